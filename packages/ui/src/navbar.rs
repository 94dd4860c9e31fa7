use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top navigation. Admin links appear for admin sessions, and the right end
/// holds the login link or the logout button.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let user = auth().user;

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            a { class: "navbar__brand", href: "/", "STOREFRONT" }
            div {
                class: "navbar__links",
                a { class: "nav-link", href: "/", "Home" }
                a { class: "nav-link", href: "/products", "Products" }
                if auth().is_admin() {
                    a { class: "nav-link", href: "/admin", "Admin" }
                    a { class: "nav-link", href: "/admin/ajoutProduit", "Ajouter un produit" }
                }
            }
            div {
                class: "navbar__session",
                match user {
                    _ if auth().loading => rsx! { span { class: "navbar__user" } },
                    Some(user) => rsx! {
                        span { class: "navbar__user", "{user.display_name()}" }
                        LogoutButton {}
                    },
                    None => rsx! { a { class: "nav-link", href: "/auth/login", "Connexion" } },
                }
            }
        }
    }
}
