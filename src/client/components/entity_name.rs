use dioxus::prelude::*;

use crate::{client::hooks::use_name_context, model::names::EntityId};

/// Display name for `id`, falling back to `fallback` or the ID itself until it is resolved.
#[component]
pub fn EntityName(id: Option<EntityId>, fallback: Option<String>) -> Element {
    let names = use_name_context();
    let name = names.get_name(id, fallback.as_deref());

    rsx!(span {
        "{name}"
    })
}
