use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer__columns",
                div {
                    h4 { "Shop" }
                    a { href: "/products", "All products" }
                    a { href: "/products", "New collection" }
                }
                div {
                    h4 { "Help" }
                    span { "Shipping" }
                    span { "Returns" }
                    span { "Contact" }
                }
                div {
                    h4 { "Account" }
                    a { href: "/auth/login", "Connexion" }
                }
            }
            p { class: "footer__legal", "© Storefront" }
        }
    }
}
