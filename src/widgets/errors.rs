use super::{HStack, IconButton, Paragraph};
use dioxus::prelude::*;

/// A small box that displays an error, with a button to dismiss it
#[inline_props]
pub fn ErrorBox<'a>(cx: Scope<'a>, content: String, onclick: EventHandler<'a, ()>) -> Element<'a> {
    cx.render(rsx!(
        div { class: "error-box pop-in",
            HStack { class: "align-items-center",
                div { class: "grow",
                    Paragraph { "{content}" }
                }
                IconButton {
                    icon: crate::icons::ICON_CLOSE,
                    title: crate::loc!("Dismiss"),
                    onclick: move |_| onclick.call(())
                }
            }
        }
    ))
}
