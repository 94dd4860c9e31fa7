use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(into, default)] id: String,
    #[props(into, default)] name: String,
    #[props(into, default)] class: String,
    #[props(into, default = "text".to_string())] r#type: String,
    #[props(into, default)] placeholder: String,
    #[props(into, default)] value: String,
    #[props(into, default)] min: String,
    #[props(into, default)] step: String,
    /// Renders the error outline.
    #[props(default)]
    invalid: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let state = if invalid { "input input--invalid" } else { "input" };
    rsx! {
        input {
            id: "{id}",
            name: "{name}",
            class: "{state} {class}",
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            min: "{min}",
            step: "{step}",
            value: "{value}",
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}
