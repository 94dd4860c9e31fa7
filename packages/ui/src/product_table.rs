use api::Product;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaArrowsRotate, FaEye, FaPenToSquare, FaTrash};
use crate::Icon;

/// Cell text for an optional column.
fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or("-")
}

fn stock_cell(count: u32) -> String {
    if count == 0 {
        "-".to_string()
    } else {
        count.to_string()
    }
}

/// Admin table of every product, loaded on mount and on refresh.
///
/// The row actions are placeholders with no behaviour attached.
#[component]
pub fn ProductTable() -> Element {
    let mut products = use_signal(Vec::<Product>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    let mut load = move || {
        spawn(async move {
            loading.set(true);
            match api::list_products().await {
                Ok(list) => {
                    error.set(None);
                    products.set(list);
                }
                Err(e) => {
                    tracing::error!("loading products failed: {e}");
                    let message = crate::error_text(&e);
                    error.set(Some(if message.trim().is_empty() {
                        "Une erreur est survenue lors du chargement des produits".to_string()
                    } else {
                        message
                    }));
                }
            }
            loading.set(false);
        });
    };

    use_hook(move || load());

    rsx! {
        div {
            class: "admin-panel",
            div {
                class: "admin-panel__header",
                h2 { "Liste des produits" }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: loading(),
                    onclick: move |_| load(),
                    Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                    if loading() { "Actualisation..." } else { "Actualiser" }
                }
            }

            if let Some(message) = error() {
                div { class: "alert alert--error", "{message}" }
            }

            if !loading() && products().is_empty() && error().is_none() {
                p { class: "empty-state", "Aucun produit trouvé." }
            } else if !products().is_empty() {
                table {
                    class: "product-table",
                    thead {
                        tr {
                            th { "Image" }
                            th { "Nom" }
                            th { "Prix" }
                            th { "Catégorie" }
                            th { "Taille" }
                            th { "Couleur" }
                            th { "Stock" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for product in products() {
                            tr {
                                key: "{product.id}",
                                td {
                                    match &product.image {
                                        Some(src) => rsx! { img { class: "product-table__thumb", src: "{src}", alt: "{product.name}" } },
                                        None => rsx! { span { class: "product-table__no-image", "Pas d'image" } },
                                    }
                                }
                                td { "{product.name}" }
                                td { "{product.price.display_eur()}" }
                                td { "{product.category}" }
                                td { "{or_dash(product.size.as_deref())}" }
                                td { "{or_dash(product.color.as_deref())}" }
                                td { "{stock_cell(product.count_in_stock)}" }
                                td {
                                    class: "product-table__actions",
                                    button { r#type: "button", title: "Modifier", Icon { icon: FaPenToSquare, width: 14, height: 14 } }
                                    button { r#type: "button", title: "Supprimer", Icon { icon: FaTrash, width: 14, height: 14 } }
                                    button { r#type: "button", title: "Voir", Icon { icon: FaEye, width: 14, height: 14 } }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cells_render_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(Some("XL")), "XL");
        assert_eq!(stock_cell(0), "-");
        assert_eq!(stock_cell(7), "7");
    }
}
