use dioxus::prelude::Scope;
use dioxus_desktop::{LogicalSize, WindowBuilder};

use super::types::WindowConfig;

pub fn default_window(config: &WindowConfig) -> WindowBuilder {
    let s = LogicalSize::new(config.width as f64, config.height as f64);
    WindowBuilder::new()
        .with_title("ParrotProgress")
        .with_theme(Some(dioxus_desktop::tao::window::Theme::Light))
        .with_inner_size(s)
}

/// Evaluate `script` in the webview on the first render of `cx` only
pub fn run_script_once<T>(cx: &Scope<'_, T>, script: &str) {
    let done = dioxus::prelude::use_state(cx, || false);
    let eval = dioxus_desktop::use_eval(cx).clone();
    if *done.get() {
        return;
    }
    let script = script.to_string();
    cx.push_future(async move {
        eval(script);
    });
    done.set(true);
}
