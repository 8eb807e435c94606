use dioxus::prelude::*;

use crate::session::Tab;
use crate::view_model::TabViewModel;

/// The row of tab buttons in the header
#[inline_props]
pub fn TabBar<'a>(cx: Scope<'a>, items: Vec<TabViewModel>, onclick: EventHandler<'a, Tab>) -> Element<'a> {
    cx.render(rsx!(
        nav { class: "tabbar",
            items.iter().map(|item| rsx!(TabButton {
                key: "{item.tab}",
                item: item.clone(),
                class: "",
                onclick: move |_| onclick.call(item.tab),
            }))
        }
    ))
}

/// The vertical tab list in the mobile menu. Entries slide in one after
/// another.
#[inline_props]
pub fn TabList<'a>(cx: Scope<'a>, items: Vec<TabViewModel>, onclick: EventHandler<'a, Tab>) -> Element<'a> {
    cx.render(rsx!(
        div { class: "tablist",
            items.iter().enumerate().map(|(index, item)| {
                let delay = index * 100;
                rsx!(div {
                    key: "{item.tab}",
                    class: "slide-in-left full-width",
                    style: "animation-delay: {delay}ms;",
                    TabButton {
                        item: item.clone(),
                        class: "full-width",
                        onclick: move |_| onclick.call(item.tab),
                    }
                })
            })
        }
    ))
}

#[inline_props]
fn TabButton<'a>(
    cx: Scope<'a>,
    item: TabViewModel,
    class: &'static str,
    onclick: EventHandler<'a, ()>,
) -> Element<'a> {
    let cls = item.selected.then_some(" selected").unwrap_or_default();
    cx.render(rsx!(
        button { class: "tab-button {class}{cls}", onclick: move |_| {
                onclick.call(());
            },
            span { class: "icon", dangerous_inner_html: "{item.icon}" }
            span { "{item.label}" }
        }
    ))
}
