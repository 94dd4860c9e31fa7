use dioxus::prelude::*;

use ui::icons::FaPlus;
use ui::{Icon, ProductFormView, ProductTable};

use crate::Route;

#[component]
pub fn AdminProducts() -> Element {
    rsx! {
        div {
            class: "admin",
            div {
                class: "admin__toolbar",
                h1 { "Administration" }
                Link {
                    class: "btn btn--primary",
                    to: Route::AdminNewProduct {},
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Ajouter un produit"
                }
            }
            ProductTable {}
        }
    }
}

#[component]
pub fn AdminNewProduct() -> Element {
    rsx! {
        div {
            class: "admin",
            div {
                class: "admin__toolbar",
                h1 { "Ajouter un produit" }
                Link { class: "nav-link", to: Route::AdminProducts {}, "Liste des produits" }
            }
            ProductFormView {
                on_created: move |product: api::Product| {
                    tracing::info!(id = %product.id, "product added from the admin form");
                },
            }
        }
    }
}
