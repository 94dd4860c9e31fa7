use api::Product;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::FaArrowLeft;
use crate::{Icon, ProductCard};

/// Detail card of one product.
#[component]
pub fn ProductDetailView(product: Product, on_back: EventHandler<()>) -> Element {
    let availability = if product.is_available() {
        format!("En stock ({})", product.count_in_stock)
    } else {
        "Rupture de stock".to_string()
    };

    rsx! {
        div {
            class: "product-detail",
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| on_back.call(()),
                Icon { icon: FaArrowLeft, width: 14, height: 14 }
                "Retour"
            }
            div {
                class: "product-detail__body",
                ProductCard { product: product.clone(), show_quantity: true }
                div {
                    class: "product-detail__info",
                    h1 { "{product.name}" }
                    p { class: "product-detail__price", "{product.price.display_usd()}" }
                    p { class: "product-detail__stock", "{availability}" }
                    if !product.description.is_empty() {
                        p { class: "product-detail__description", "{product.description}" }
                    }
                    dl {
                        class: "product-detail__specs",
                        if let Some(size) = &product.size {
                            dt { "Taille" }
                            dd { "{size}" }
                        }
                        if let Some(color) = &product.color {
                            dt { "Couleur" }
                            dd { "{color}" }
                        }
                    }
                }
            }
        }
    }
}
