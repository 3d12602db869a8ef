use dioxus::prelude::*;

use crate::util::humanize_number;

#[component]
pub fn HumanizedNumber(value: f64, suffix: Option<String>) -> Element {
    let text = humanize_number(value);

    rsx!(span {
        title: "{value}",
        "{text}"
        if let Some(suffix) = suffix {
            " {suffix}"
        }
    })
}
