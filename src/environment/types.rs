use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

// Configuration Types

#[derive(Default, Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct UiConfig {
    #[serde(default)]
    pub zoom: UiZoom,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1100,
            height: 800,
        }
    }
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, Eq, PartialEq, FromRepr)]
#[repr(u8)]
#[derive(Default)]
pub enum UiZoom {
    Z90 = 90,
    #[default]
    Z100 = 100,
    Z110 = 110,
    Z120 = 120,
    Z130 = 130,
    Z140 = 140,
    Z150 = 150,
}

impl UiZoom {
    pub fn css_class(&self) -> String {
        let value: u8 = *self as u8;
        format!("zoom{value}")
    }
}

impl UiZoom {
    const CHANGE: u8 = 10;

    pub fn increase(&self) -> Option<Self> {
        let v: u8 = *self as u8;
        Self::from_repr(v.checked_add(Self::CHANGE)?)
    }

    pub fn decrease(&self) -> Option<Self> {
        let v: u8 = *self as u8;
        Self::from_repr(v.checked_sub(Self::CHANGE)?)
    }
}

// Events

/// Keyboard shortcuts handled by the window
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TextSizeEvent {
    Increase,
    Decrease,
    Reset,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ShortcutEvent {
    TextSize(TextSizeEvent),
    /// Close whatever overlay is on top
    Dismiss,
}

impl ShortcutEvent {
    /// Map a key press to a shortcut. `command` is Ctrl, or Cmd on macOS.
    pub fn from_key(key: &str, command: bool) -> Option<Self> {
        match (key, command) {
            ("Escape", _) => Some(ShortcutEvent::Dismiss),
            ("+" | "=", true) => Some(ShortcutEvent::TextSize(TextSizeEvent::Increase)),
            ("-", true) => Some(ShortcutEvent::TextSize(TextSizeEvent::Decrease)),
            ("0", true) => Some(ShortcutEvent::TextSize(TextSizeEvent::Reset)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub enum AppEvent {
    Shortcut(ShortcutEvent),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_steps_clamp() {
        assert_eq!(UiZoom::Z100.increase(), Some(UiZoom::Z110));
        assert_eq!(UiZoom::Z100.decrease(), Some(UiZoom::Z90));
        assert_eq!(UiZoom::Z150.increase(), None);
        assert_eq!(UiZoom::Z90.decrease(), None);
        assert_eq!(UiZoom::Z120.css_class(), "zoom120");
    }

    #[test]
    fn config_fields_default_when_missing() {
        let config: UiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, UiConfig::default());

        let config: UiConfig = serde_json::from_str(r#"{"zoom": "Z130"}"#).unwrap();
        assert_eq!(config.zoom, UiZoom::Z130);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn shortcuts_need_modifier_except_escape() {
        assert_eq!(
            ShortcutEvent::from_key("Escape", false),
            Some(ShortcutEvent::Dismiss)
        );
        assert_eq!(ShortcutEvent::from_key("+", false), None);
        assert_eq!(
            ShortcutEvent::from_key("=", true),
            Some(ShortcutEvent::TextSize(TextSizeEvent::Increase))
        );
        assert_eq!(
            ShortcutEvent::from_key("0", true),
            Some(ShortcutEvent::TextSize(TextSizeEvent::Reset))
        );
        assert_eq!(ShortcutEvent::from_key("a", true), None);
    }
}
