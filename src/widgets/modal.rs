use dioxus::prelude::*;

/// A dimmed fullscreen backdrop with a centered dialog.
///
/// Clicking the backdrop calls `ondismiss`. Clicks inside the dialog stop
/// propagating, so they never reach the backdrop.
#[derive(Props)]
pub struct ModalProps<'a> {
    pub ondismiss: EventHandler<'a, ()>,
    pub children: Element<'a>,
}

pub fn Modal<'a>(cx: Scope<'a, ModalProps<'a>>) -> Element<'a> {
    cx.render(rsx!(
        div {
            class: "modal-backdrop fade-in",
            onclick: move |_| cx.props.ondismiss.call(()),
            div {
                class: "modal-content scale-in",
                onclick: move |evt| evt.stop_propagation(),
                &cx.props.children
            }
        }
    ))
}
