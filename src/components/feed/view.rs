use dioxus::prelude::*;

use super::reducer::{Action, State, ViewStore};
use super::transition::PanelTransition;
use crate::environment::types::{AppEvent, ShortcutEvent};
use crate::environment::{Environment, PostStore};
use crate::icons;
use crate::loc;
use crate::session::Tab;
use crate::view_model::TabViewModel;
use crate::widgets::*;

#[inline_props]
pub fn FeedApp<'a>(cx: Scope<'a>, environment: &'a UseState<Environment>) -> Element<'a> {
    log::trace!("rerender feed app");

    let view_store: ViewStore = navicula::root(cx, &[], environment.get(), State::default);

    cx.render(rsx!(FeedView {
        store: view_store,
        content: &environment.get().store
    }))
}

#[inline_props]
fn FeedView<'a>(cx: Scope<'a>, store: ViewStore<'a>, content: &'a PostStore) -> Element<'a> {
    let error = store.error.clone();

    cx.render(rsx!(
        div {
            class: "app",
            tabindex: "0",
            onkeydown: move |evt: KeyboardEvent| {
                #[allow(deprecated)]
                let command = evt.ctrl_key || evt.meta_key;
                let key = evt.key().to_string();
                if let Some(shortcut) = ShortcutEvent::from_key(&key, command) {
                    store.send(Action::AppEvent(AppEvent::Shortcut(shortcut)));
                }
            },
            HeaderComponent { store: store }
            main { class: "content",
                PanelComponent { store: store, content: content }
            }
            store.session.is_modal_open().then(|| rsx!(
                crate::components::details::DetailsModal {
                    store: store,
                    content: content
                }
            )),
            error.map(|error| rsx!(div {
                class: "error-box-bottom",
                ErrorBox {
                    content: error,
                    onclick: move |_| store.send(Action::ClearError)
                }
            })),
            FloatingButton {
                icon: icons::ICON_PLUS,
                title: loc!("New Post"),
                onclick: move |_| store.send(Action::Compose)
            }
        }
    ))
}

#[inline_props]
fn HeaderComponent<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>) -> Element<'a> {
    log::trace!("rerender header");
    let tabs = TabViewModel::all(store.session.tab());
    let notifications = store.session.notifications();

    cx.render(rsx!(
        header { class: "header slide-down",
            div { class: "header-row",
                HStack { class: "brand gap-2 align-items-center",
                    div { class: "brand-logo", "🦜" }
                    h1 { "ParrotProgress" }
                }
                HStack { class: "desktop-only gap-3 align-items-center",
                    TabBar {
                        items: tabs.clone(),
                        onclick: move |tab| store.send(Action::SelectTab(tab))
                    }
                    IconButton {
                        icon: icons::ICON_BELL,
                        title: loc!("Notifications"),
                        badge: notifications
                    }
                    IconButton {
                        icon: icons::ICON_SEARCH,
                        title: loc!("Search")
                    }
                }
                IconButton {
                    class: "mobile-only",
                    icon: icons::ICON_MENU,
                    title: loc!("Menu"),
                    onclick: move |_| store.send(Action::ToggleMenu)
                }
            }
            store.session.is_menu_open().then(|| rsx!(MobileMenuComponent {
                store: store,
                tabs: tabs.clone()
            }))
        }
    ))
}

#[inline_props]
fn MobileMenuComponent<'a>(
    cx: Scope<'a>,
    store: &'a ViewStore<'a>,
    tabs: Vec<TabViewModel>,
) -> Element<'a> {
    cx.render(rsx!(
        div { class: "mobile-menu mobile-only expand-down",
            HStack { class: "justify-content-between align-items-center mb-3",
                Label { class: "bold", loc!("Menu") }
                IconButton {
                    icon: icons::ICON_CLOSE,
                    title: loc!("Close"),
                    onclick: move |_| store.send(Action::CloseMenu)
                }
            }
            TabList {
                items: tabs.clone(),
                onclick: move |tab| store.send(Action::SelectTab(tab))
            }
        }
    ))
}

#[inline_props]
fn PanelComponent<'a>(
    cx: Scope<'a>,
    store: &'a ViewStore<'a>,
    content: &'a PostStore,
) -> Element<'a> {
    let tab = store.session.tab();
    let transition = PanelTransition::between(store.previous_tab, tab);
    let class = transition.css_class();
    log::trace!("render panel {tab} with {transition:?}");

    // A new key per tab remounts the panel so its enter animation runs again
    let panel = match tab {
        Tab::Home => rsx!(crate::components::home::HomePanel {
            store: store,
            content: content
        }),
        Tab::Profile => rsx!(crate::components::profile::ProfilePanel { content: content }),
        Tab::Settings => rsx!(crate::components::settings::SettingsPanel { content: content }),
    };

    cx.render(rsx!(
        div { key: "{tab}", class: "panel {class}", panel }
    ))
}
