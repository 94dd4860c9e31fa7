use dioxus::prelude::*;

use crate::carousel::{Carousel, Slide};

const NEW_COLLECTION: &[(&str, &str, &str)] = &[
    ("https://images.unsplash.com/photo-1521572163474-6864f9cf17ab", "Basic Slim Fit T-Shirt", "$ 99"),
    ("https://images.unsplash.com/photo-1503342217505-b0a15ec3261c", "Basic Heavy Weight T-Shirt", "$ 99"),
    ("https://images.unsplash.com/photo-1618354691373-d851c5c3a990", "Full Sleeve Zipper", "$ 129"),
    ("https://images.unsplash.com/photo-1434389677669-e08b4cac3105", "Embroidered Seersucker Shirt", "$ 119"),
];

/// Landing page with the new collection carousel.
#[component]
pub fn HomeView() -> Element {
    let slides: Vec<Slide> = NEW_COLLECTION
        .iter()
        .map(|(image, title, price)| Slide {
            image: image.to_string(),
            title: title.to_string(),
            price: price.to_string(),
        })
        .collect();

    rsx! {
        div {
            class: "home",
            section {
                class: "home__hero",
                div {
                    class: "home__intro",
                    h1 { "NEW COLLECTION" }
                    p { "Summer 2024" }
                    a { class: "btn btn--primary", href: "/products", "Go To Shop" }
                }
                Carousel { slides }
            }
        }
    }
}
