use dioxus::prelude::*;

use crate::environment::model::SettingsEntry;
use crate::environment::PostStore;
use crate::icons;
use crate::loc;
use crate::widgets::*;

#[inline_props]
pub fn SettingsPanel<'a>(cx: Scope<'a>, content: &'a PostStore) -> Element<'a> {
    log::trace!("rerender settings panel");
    cx.render(rsx!(
        Card { class: "settings-card",
            h2 { loc!("Settings") }
            VStack { class: "gap-3",
                content.settings().iter().map(|entry| rsx!(SettingsRow {
                    key: "{entry.title}",
                    entry: entry
                }))
            }
        }
    ))
}

// Rows are placeholders, selecting one has no effect yet
#[inline_props]
fn SettingsRow<'a>(cx: Scope<'a>, entry: &'a SettingsEntry) -> Element<'a> {
    cx.render(rsx!(
        div { class: "settings-row hover-nudge",
            VStack {
                h3 { "{entry.title}" }
                Paragraph { style: TextStyle::Secondary, "{entry.description}" }
            }
            span { class: "icon label-tertiary", dangerous_inner_html: icons::ICON_CHEVRON_RIGHT }
        }
    ))
}
