use dioxus::prelude::*;

/// A horizontal bar that grows to `level` percent on first render
#[inline_props]
pub fn ProgressBar(cx: Scope, level: u8, delay_ms: u32) -> Element {
    let level = (*level).min(100);
    cx.render(rsx!(
        div { class: "progress-track",
            div {
                class: "progress-fill grow-width",
                style: "--target-width: {level}%; width: {level}%; animation-delay: {delay_ms}ms;"
            }
        }
    ))
}
