//! Sidebar of the product listing: sizes, availability and a stack of
//! collapsible sections.
//!
//! The selections are local UI state only and do not narrow the product grid.

use std::collections::BTreeSet;

use api::Product;
use dioxus::prelude::*;

use crate::icons::{FaChevronDown, FaChevronRight};
use crate::Icon;

pub const SIZES: &[&str] = &["XS", "S", "M", "L", "XL", "2X"];

/// Sections that only open and close.
pub const COLLAPSIBLE_SECTIONS: &[&str] = &[
    "Category",
    "Colors",
    "Price Range",
    "Collections",
    "Tags",
    "Ratings",
];

/// Toggle state of the filter panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    sizes: BTreeSet<String>,
    open_sections: BTreeSet<String>,
    pub in_stock: bool,
    pub out_of_stock: bool,
}

impl FilterState {
    pub fn toggle_size(&mut self, size: &str) {
        if !self.sizes.remove(size) {
            self.sizes.insert(size.to_string());
        }
    }

    pub fn is_size_selected(&self, size: &str) -> bool {
        self.sizes.contains(size)
    }

    /// Selected sizes in the order of [`SIZES`].
    pub fn selected_sizes(&self) -> Vec<&'static str> {
        SIZES
            .iter()
            .copied()
            .filter(|s| self.sizes.contains(*s))
            .collect()
    }

    pub fn toggle_section(&mut self, section: &str) {
        if !self.open_sections.remove(section) {
            self.open_sections.insert(section.to_string());
        }
    }

    pub fn is_open(&self, section: &str) -> bool {
        self.open_sections.contains(section)
    }
}

/// `(available, out of stock)` counts over `products`.
pub fn availability_counts(products: &[Product]) -> (usize, usize) {
    let available = products.iter().filter(|p| p.is_available()).count();
    (available, products.len() - available)
}

#[component]
pub fn FilterPanel(products: Vec<Product>) -> Element {
    let mut state = use_signal(FilterState::default);
    let (available, out_of_stock) = availability_counts(&products);

    rsx! {
        aside {
            class: "filter-panel",
            h3 { class: "filter-panel__title", "Filters" }

            section {
                class: "filter-section",
                h4 { class: "filter-section__title", "Size" }
                div {
                    class: "size-grid",
                    for size in SIZES.iter().copied() {
                        button {
                            key: "{size}",
                            r#type: "button",
                            class: if state().is_size_selected(size) { "size-chip size-chip--selected" } else { "size-chip" },
                            onclick: move |_| state.write().toggle_size(size),
                            "{size}"
                        }
                    }
                }
            }

            section {
                class: "filter-section",
                h4 { class: "filter-section__title", "Availability" }
                label {
                    class: "filter-check",
                    input {
                        r#type: "checkbox",
                        checked: state().in_stock,
                        onchange: move |_| {
                            let mut s = state.write();
                            s.in_stock = !s.in_stock;
                        },
                    }
                    span { "Availability" }
                    span { class: "filter-check__count", "({available})" }
                }
                label {
                    class: "filter-check",
                    input {
                        r#type: "checkbox",
                        checked: state().out_of_stock,
                        onchange: move |_| {
                            let mut s = state.write();
                            s.out_of_stock = !s.out_of_stock;
                        },
                    }
                    span { "Out Of Stock" }
                    span { class: "filter-check__count", "({out_of_stock})" }
                }
            }

            for section in COLLAPSIBLE_SECTIONS.iter().copied() {
                section {
                    key: "{section}",
                    class: "filter-section",
                    button {
                        r#type: "button",
                        class: "filter-section__toggle",
                        onclick: move |_| state.write().toggle_section(section),
                        span { "{section}" }
                        if state().is_open(section) {
                            Icon { icon: FaChevronDown, width: 12, height: 12 }
                        } else {
                            Icon { icon: FaChevronRight, width: 12, height: 12 }
                        }
                    }
                    if state().is_open(section) {
                        p { class: "filter-section__body", "No options available." }
                    }
                }
            }
        }
    }
}
