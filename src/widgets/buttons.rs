use super::{Label, PointerStyle};
use dioxus::prelude::*;

#[derive(Props)]
pub struct IconButtonProps<'a, S: AsRef<str>> {
    pub icon: &'a str,
    pub title: S,
    #[props(optional)]
    pub class: Option<&'a str>,
    /// A count shown as a bubble on the top right, hidden when zero
    #[props(optional)]
    pub badge: Option<u32>,
    #[props(optional)]
    pub onclick: Option<EventHandler<'a, MouseEvent>>,
}

pub fn IconButton<'a, S: AsRef<str>>(cx: Scope<'a, IconButtonProps<'a, S>>) -> Element {
    let class = cx.props.class.unwrap_or("");
    let badge = cx
        .props
        .badge
        .filter(|count| *count > 0)
        .map(|count| rsx!(span { class: "badge pop-in", "{count}" }));
    cx.render(rsx!(
        div { class: "icon-button {class}", title: "{cx.props.title.as_ref()}",
            button {
                r#type: "button",
                onclick: move |e| {
                    if let Some(ref handler) = cx.props.onclick {
                        handler.call(e)
                    }
                },
                dangerous_inner_html: cx.props.icon
            }
            badge
        }
    ))
}

#[derive(Props)]
pub struct IconTextButtonProps<'a, S: AsRef<str>, ST: AsRef<str>> {
    pub icon: &'a str,
    pub text: S,
    pub title: ST,
    #[props(optional)]
    pub class: Option<&'a str>,
    pub onclick: EventHandler<'a, MouseEvent>,
}

pub fn IconTextButton<'a, S: AsRef<str>, ST: AsRef<str>>(
    cx: Scope<'a, IconTextButtonProps<'a, S, ST>>,
) -> Element {
    let rule = PointerStyle::Pointer.rule();
    let class = cx.props.class.unwrap_or("");
    cx.render(rsx!(
        div {
            style: "{rule}",
            class: "icon-button text {class}",
            title: "{cx.props.title.as_ref()}",
            onclick: move |e| cx.props.onclick.call(e),
            button { r#type: "button", style: "{rule}", dangerous_inner_html: cx.props.icon }
            Label { pointer_style: PointerStyle::Pointer, "{cx.props.text.as_ref()}" }
        }
    ))
}

#[derive(Props)]
pub struct TextButtonProps<'a, S: AsRef<str>> {
    pub text: S,
    #[props(optional)]
    pub class: Option<&'a str>,
    pub onclick: EventHandler<'a, MouseEvent>,
}

pub fn TextButton<'a, S: AsRef<str>>(cx: Scope<'a, TextButtonProps<'a, S>>) -> Element {
    let class = cx.props.class.unwrap_or("");
    cx.render(rsx!(
        button {
            r#type: "button",
            class: "text-button {class}",
            onclick: move |e| cx.props.onclick.call(e),
            "{cx.props.text.as_ref()}"
        }
    ))
}

/// The round button in the bottom right corner
#[inline_props]
pub fn FloatingButton<'a>(
    cx: Scope<'a>,
    icon: &'static str,
    title: &'static str,
    onclick: EventHandler<'a, MouseEvent>,
) -> Element<'a> {
    cx.render(rsx!(
        button {
            r#type: "button",
            class: "floating-button",
            title: "{title}",
            onclick: move |e| onclick.call(e),
            dangerous_inner_html: "{icon}"
        }
    ))
}
