use dioxus::prelude::*;

#[component]
pub fn Textarea(
    #[props(into, default)] id: String,
    #[props(into, default)] class: String,
    #[props(into, default)] placeholder: String,
    #[props(into, default)] value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "input textarea {class}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
