//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

pub mod navigation;

mod navbar;
pub use navbar::Navbar;

mod footer;
pub use footer::Footer;

pub mod catalog;

mod filter_panel;
pub use filter_panel::{availability_counts, FilterPanel, FilterState, SIZES};

pub mod carousel;
pub use carousel::{Carousel, CarouselState, Slide};

mod product_card;
pub use product_card::ProductCard;

mod product_form;
pub use product_form::ProductFormView;

mod product_table;
pub use product_table::ProductTable;

/// Text to show for a failed server function call.
///
/// Messages raised by the server function itself are shown as-is.
pub fn error_text(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
