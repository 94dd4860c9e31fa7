//! Admin product creation form.
//!
//! Submitting validates locally, uploads the image, then creates the product
//! with the URL the upload returned. Nothing is sent when validation fails.

use api::models::PRODUCT_CATEGORIES;
use api::{is_image_type, Product, ProductForm};
use dioxus::html::FileData;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label, Select, Textarea};
use crate::icons::{FaCloudArrowUp, FaFloppyDisk, FaXmark};
use crate::Icon;

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Error(String),
    Success(String),
}

#[component]
pub fn ProductFormView(
    on_created: Option<EventHandler<Product>>,
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    let mut form = use_signal(ProductForm::default);
    let mut image = use_signal(|| Option::<FileData>::None);
    let mut status = use_signal(|| Option::<Status>::None);
    let mut submitting = use_signal(|| false);

    let mut reset = move || {
        form.set(ProductForm::default());
        image.set(None);
    };

    let handle_file = move |evt: FormEvent| {
        let Some(file) = evt.files().into_iter().next() else {
            image.set(None);
            return;
        };

        if !is_image_type(&file.content_type().unwrap_or_default()) {
            image.set(None);
            status.set(Some(Status::Error("Le fichier doit être une image.".into())));
            return;
        }

        status.set(None);
        image.set(Some(file));
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let current = form();
        if let Err(message) = current.validate(image.peek().is_some()) {
            status.set(Some(Status::Error(message.to_string())));
            return;
        }
        let Some(upload) = image() else {
            return;
        };

        spawn(async move {
            submitting.set(true);
            status.set(None);

            let image_url = match api::upload_product_image(upload.into()).await {
                Ok(url) => url,
                Err(e) => {
                    tracing::error!("image upload failed: {e}");
                    status.set(Some(Status::Error("Impossible d'uploader l'image.".into())));
                    submitting.set(false);
                    return;
                }
            };

            match api::create_product(current.into_new_product(image_url)).await {
                Ok(product) => {
                    tracing::info!(id = %product.id, "product created");
                    status.set(Some(Status::Success("Produit ajouté avec succès !".into())));
                    reset();
                    if let Some(handler) = on_created {
                        handler.call(product);
                    }
                }
                Err(e) => {
                    tracing::error!("product creation failed: {e}");
                    status.set(Some(Status::Error(
                        "Erreur lors de l'ajout du produit.".into(),
                    )));
                }
            }
            submitting.set(false);
        });
    };

    let handle_cancel = move |_| {
        reset();
        status.set(None);
        if let Some(handler) = on_cancel {
            handler.call(());
        }
    };

    let categories: Vec<(String, String)> = PRODUCT_CATEGORIES
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();
    let file_label = image()
        .map(|file| file.name())
        .unwrap_or_else(|| "Choisir une image".to_string());

    rsx! {
        form {
            class: "product-form",
            onsubmit: handle_submit,

            match status() {
                Some(Status::Error(message)) => rsx! { div { class: "alert alert--error", "{message}" } },
                Some(Status::Success(message)) => rsx! { div { class: "alert alert--success", "{message}" } },
                None => rsx! {},
            }

            div {
                class: "form-grid",
                div {
                    class: "form-field",
                    Label { html_for: "product-name", "Nom du produit *" }
                    Input {
                        id: "product-name",
                        placeholder: "Nom du produit",
                        value: form().name,
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "product-price", "Prix (€) *" }
                    Input {
                        id: "product-price",
                        r#type: "number",
                        min: "0",
                        step: "0.01",
                        placeholder: "0.00",
                        value: form().price,
                        oninput: move |evt: FormEvent| form.write().price = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "product-category", "Catégorie *" }
                    Select {
                        id: "product-category",
                        placeholder: "Sélectionner une catégorie",
                        options: categories,
                        value: form().category,
                        onchange: move |evt: FormEvent| form.write().category = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "product-stock", "Quantité en stock" }
                    Input {
                        id: "product-stock",
                        r#type: "number",
                        min: "0",
                        value: form().count_in_stock,
                        oninput: move |evt: FormEvent| form.write().count_in_stock = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "product-size", "Taille" }
                    Input {
                        id: "product-size",
                        placeholder: "S, M, L, XL...",
                        value: form().size,
                        oninput: move |evt: FormEvent| form.write().size = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "product-color", "Couleur" }
                    Input {
                        id: "product-color",
                        placeholder: "Rouge, Bleu...",
                        value: form().color,
                        oninput: move |evt: FormEvent| form.write().color = evt.value(),
                    }
                }
            }

            div {
                class: "form-field",
                Label { html_for: "product-description", "Description *" }
                Textarea {
                    id: "product-description",
                    placeholder: "Description du produit",
                    value: form().description,
                    oninput: move |evt: FormEvent| form.write().description = evt.value(),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "product-image", "Image du produit *" }
                label {
                    class: "dropzone",
                    r#for: "product-image",
                    Icon { icon: FaCloudArrowUp, width: 28, height: 28 }
                    span { "{file_label}" }
                    input {
                        id: "product-image",
                        class: "dropzone__input",
                        r#type: "file",
                        accept: "image/*",
                        onchange: handle_file,
                    }
                }
            }

            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: submitting(),
                    onclick: handle_cancel,
                    Icon { icon: FaXmark, width: 14, height: 14 }
                    "Annuler"
                }
                Button {
                    variant: ButtonVariant::Success,
                    r#type: "submit",
                    disabled: submitting(),
                    Icon { icon: FaFloppyDisk, width: 14, height: 14 }
                    if submitting() { "Enregistrement..." } else { "Enregistrer le produit" }
                }
            }
        }
    }
}
