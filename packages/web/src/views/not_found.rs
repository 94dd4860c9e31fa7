use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "not-found",
            h1 { "404" }
            p { "Page not found: /{path}" }
            a { href: "/", "Back to home" }
        }
    }
}
