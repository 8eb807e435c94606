use crate::session::Tab;

/// The enter animation of a panel, chosen from the tab that was shown
/// before and the tab shown now.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PanelTransition {
    None,
    SlideFromRight,
    SlideFromLeft,
}

impl PanelTransition {
    pub fn between(previous: Tab, next: Tab) -> Self {
        use std::cmp::Ordering;
        match next.index().cmp(&previous.index()) {
            Ordering::Greater => PanelTransition::SlideFromRight,
            Ordering::Less => PanelTransition::SlideFromLeft,
            Ordering::Equal => PanelTransition::None,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PanelTransition::None => "fade-in",
            PanelTransition::SlideFromRight => "slide-in-right",
            PanelTransition::SlideFromLeft => "slide-in-left",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_follows_tab_order() {
        assert_eq!(
            PanelTransition::between(Tab::Home, Tab::Settings),
            PanelTransition::SlideFromRight
        );
        assert_eq!(
            PanelTransition::between(Tab::Settings, Tab::Profile),
            PanelTransition::SlideFromLeft
        );
        assert_eq!(
            PanelTransition::between(Tab::Profile, Tab::Profile),
            PanelTransition::None
        );
    }

    #[test]
    fn every_transition_has_a_class() {
        for t in [
            PanelTransition::None,
            PanelTransition::SlideFromRight,
            PanelTransition::SlideFromLeft,
        ] {
            assert!(!t.css_class().is_empty());
        }
    }
}
