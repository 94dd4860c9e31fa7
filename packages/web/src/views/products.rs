use dioxus::prelude::*;

use ui::views::{ProductCatalogView, ProductDetailView};

#[component]
pub fn Products() -> Element {
    rsx! {
        ProductCatalogView {}
    }
}

/// Detail page of one product, resolved from the catalog by id.
#[component]
pub fn ProductDetail(id: String) -> Element {
    let nav = use_navigator();
    let product = use_resource(use_reactive!(|id| async move { api::get_product(id).await }));

    let view = match &*product.read() {
        None => rsx! { p { class: "catalog__status", "Loading products..." } },
        Some(Err(e)) => {
            tracing::error!("loading product failed: {e}");
            rsx! {
                p { class: "catalog__status catalog__status--error", "Failed to load products. Please try again later." }
            }
        }
        Some(Ok(None)) => rsx! {
            div {
                class: "not-found",
                p { "Produit introuvable." }
                a { href: "/products", "Retour aux produits" }
            }
        },
        Some(Ok(Some(product))) => rsx! {
            ProductDetailView {
                product: product.clone(),
                on_back: move |_| nav.go_back(),
            }
        },
    };
    view
}
