use api::Product;
use dioxus::prelude::*;

use crate::catalog::{filter_products, toggle_category, CATEGORIES};
use crate::icons::FaMagnifyingGlass;
use crate::{FilterPanel, Icon, ProductCard};

/// Product listing: search box, category chips, filter sidebar and the grid.
///
/// The collection is fetched once; searching and chips filter it in place.
#[component]
pub fn ProductCatalogView() -> Element {
    let mut query = use_signal(String::new);
    let mut category = use_signal(|| Option::<String>::None);

    let products = use_resource(|| async move {
        api::list_products().await.inspect_err(|e| {
            tracing::error!("loading products failed: {e}");
        })
    });

    // None while loading, Some(false) on failure.
    let (loaded, all): (Option<bool>, Vec<Product>) = match &*products.read() {
        None => (None, Vec::new()),
        Some(Ok(list)) => (Some(true), list.clone()),
        Some(Err(_)) => (Some(false), Vec::new()),
    };
    let visible = filter_products(&all, &query(), category().as_deref());

    rsx! {
        div {
            class: "catalog",
            FilterPanel { products: all.clone() }

            section {
                class: "catalog__main",
                div {
                    class: "catalog__search",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    input {
                        r#type: "search",
                        class: "catalog__search-input",
                        placeholder: "Search",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                    }
                }

                div {
                    class: "chips",
                    for chip in CATEGORIES.iter().copied() {
                        button {
                            key: "{chip.id}",
                            r#type: "button",
                            class: if category().as_deref() == Some(chip.id) { "chip chip--selected" } else { "chip" },
                            onclick: move |_| {
                                let next = toggle_category(category().as_deref(), chip.id);
                                category.set(next);
                            },
                            "{chip.label}"
                        }
                    }
                }

                match loaded {
                    None => rsx! { p { class: "catalog__status", "Loading products..." } },
                    Some(false) => rsx! {
                        p { class: "catalog__status catalog__status--error", "Failed to load products. Please try again later." }
                    },
                    Some(true) if visible.is_empty() => rsx! {
                        p { class: "catalog__status", "No products found matching your criteria." }
                    },
                    Some(true) => rsx! {
                        div {
                            class: "product-grid",
                            for product in visible.iter() {
                                ProductCard {
                                    key: "{product.id}",
                                    href: format!("/products/{}", product.id),
                                    product: product.clone(),
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
