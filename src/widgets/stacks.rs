use dioxus::prelude::*;

/// Shared by all flex containers: extra classes plus the children
#[derive(Props)]
pub struct StackProps<'a> {
    #[props(optional)]
    pub class: Option<&'a str>,
    pub children: Element<'a>,
}

fn render_stack<'a>(cx: Scope<'a, StackProps<'a>>, base: &'static str) -> Element<'a> {
    let extra = cx.props.class.unwrap_or_default();
    cx.render(rsx!(
        div { class: "{base} {extra}", &cx.props.children }
    ))
}

pub fn VStack<'a>(cx: Scope<'a, StackProps<'a>>) -> Element<'a> {
    render_stack(cx, "vstack")
}

pub fn HStack<'a>(cx: Scope<'a, StackProps<'a>>) -> Element<'a> {
    render_stack(cx, "hstack")
}

/// A white, rounded, shadowed container
pub fn Card<'a>(cx: Scope<'a, StackProps<'a>>) -> Element<'a> {
    render_stack(cx, "card")
}
