use dioxus::prelude::*;

use crate::components::feed::{Action, ViewStore};
use crate::environment::PostStore;
use crate::icons;
use crate::loc;
use crate::widgets::*;

/// The "show details" dialog. Both the close button and a click on the
/// backdrop close it.
#[inline_props]
pub fn DetailsModal<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>, content: &'a PostStore) -> Element<'a> {
    cx.render(rsx!(
        Modal {
            ondismiss: move |_| store.send(Action::CloseModal),
            div { class: "text-center",
                div { class: "modal-icon", "🎯" }
                h2 { loc!("What makes this course special") }
                VStack { class: "gap-3 text-left mb-4",
                    content.highlights().iter().map(|highlight| rsx!(HStack {
                        key: "{highlight.title}",
                        class: "gap-3 align-items-start",
                        span { class: "icon star", dangerous_inner_html: icons::ICON_STAR }
                        div {
                            h3 { "{highlight.title}" }
                            Paragraph { style: TextStyle::Secondary, "{highlight.description}" }
                        }
                    }))
                }
                TextButton {
                    class: "primary",
                    text: loc!("Close"),
                    onclick: move |_| store.send(Action::CloseModal)
                }
            }
        }
    ))
}
