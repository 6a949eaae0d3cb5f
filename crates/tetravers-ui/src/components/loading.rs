//! Loading placeholder shown while a page's queries are outstanding.

use dioxus::prelude::*;

#[component]
pub fn LoadingState(text: String) -> Element {
    rsx! {
        div { class: "loading-state", "{text}" }
    }
}
