use dioxus::prelude::*;

/// A `<select>` over `(value, label)` pairs with a leading empty choice.
#[component]
pub fn Select(
    #[props(into, default)] id: String,
    #[props(into)] placeholder: String,
    options: Vec<(String, String)>,
    #[props(into, default)] value: String,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "input select",
            value: "{value}",
            onchange: move |evt| onchange.call(evt),
            option { value: "", "{placeholder}" }
            for (option_value, label) in options {
                option {
                    key: "{option_value}",
                    value: "{option_value}",
                    selected: option_value == value,
                    "{label}"
                }
            }
        }
    }
}
