use api::Product;
use dioxus::prelude::*;

use crate::icons::{FaMinus, FaPlus};
use crate::Icon;

/// Grid card of the product listing.
///
/// `href` makes the image and title a link. With `show_quantity` the card
/// carries a quantity counter that never goes below 1.
#[component]
pub fn ProductCard(
    product: Product,
    #[props(into, default)] href: String,
    #[props(default)] show_quantity: bool,
) -> Element {
    let mut quantity = use_signal(|| 1u32);

    let media = rsx! {
        div {
            class: "product-card__media",
            match &product.image {
                Some(src) => rsx! { img { src: "{src}", alt: "{product.name}" } },
                None => rsx! { div { class: "product-card__placeholder", "No image" } },
            }
        }
    };

    rsx! {
        article {
            class: "product-card",
            if href.is_empty() {
                {media}
            } else {
                a { href: "{href}", class: "product-card__link", {media} }
            }
            div {
                class: "product-card__meta",
                span { class: "product-card__category", "{product.category}" }
                if product.colors > 0 {
                    span { class: "product-card__colors", "+{product.colors}" }
                }
            }
            div {
                class: "product-card__footer",
                if href.is_empty() {
                    h3 { class: "product-card__title", "{product.name}" }
                } else {
                    a { href: "{href}", h3 { class: "product-card__title", "{product.name}" } }
                }
                span { class: "product-card__price", "{product.price.display_usd()}" }
            }
            if show_quantity {
                div {
                    class: "quantity",
                    button {
                        r#type: "button",
                        class: "quantity__step",
                        title: "Decrease",
                        disabled: quantity() <= 1,
                        onclick: move |_| quantity.set(quantity().saturating_sub(1).max(1)),
                        Icon { icon: FaMinus, width: 10, height: 10 }
                    }
                    span { class: "quantity__value", "{quantity}" }
                    button {
                        r#type: "button",
                        class: "quantity__step",
                        title: "Increase",
                        onclick: move |_| quantity += 1,
                        Icon { icon: FaPlus, width: 10, height: 10 }
                    }
                }
            }
        }
    }
}
