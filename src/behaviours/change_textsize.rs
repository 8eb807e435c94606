use dioxus::prelude::*;

use crate::environment::types::{TextSizeEvent, UiConfig, UiZoom};
use navicula::{types::AppWindow, Effect};

use super::Behaviour;

pub struct ChangeTextsizeBehaviour {}

impl Behaviour for ChangeTextsizeBehaviour {
    type InputAction = TextSizeEvent;
    type InputState = UiConfig;
    type Environment = crate::environment::Environment;

    fn setup<T>(cx: Scope<'_, T>, environment: &Self::Environment) {
        let zoom = environment.repository.config().zoom.css_class();
        log::debug!("startup zoom {zoom}");
        crate::environment::platform::run_script_once(
            &cx,
            &format!(
                r#"
            document.documentElement.classList.add("{zoom}");
            "#
            ),
        );
    }

    fn handle<'a, 'b, OutputAction>(
        _window: &'a AppWindow<'a>,
        action: TextSizeEvent,
        state: &'a mut Self::InputState,
        _environment: &'a Self::Environment,
    ) -> Effect<'b, OutputAction> {
        let new = target_zoom(state.zoom, action);
        change_textsize(state, new)
    }
}

/// The zoom level `action` leads to, `None` past either end
fn target_zoom(current: UiZoom, action: TextSizeEvent) -> Option<UiZoom> {
    match action {
        TextSizeEvent::Increase => current.increase(),
        TextSizeEvent::Decrease => current.decrease(),
        TextSizeEvent::Reset => Some(UiZoom::Z100),
    }
}

fn change_textsize<'b, A>(state: &mut UiConfig, new: Option<UiZoom>) -> Effect<'b, A> {
    let Some(new) = new else {
        return Effect::NONE
    };
    if new == state.zoom {
        return Effect::NONE;
    }
    let current = state.zoom.css_class();
    log::debug!("change zoom {:?} -> {:?}", state.zoom, new);
    state.zoom = new;
    let new = new.css_class();
    Effect::ui(format!(
        r#"
        document.documentElement.classList.remove("{current}");
        document.documentElement.classList.add("{new}");
    "#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_state_follows_steps() {
        let mut state = UiConfig::default();
        let bigger = state.zoom.increase();
        let _ = change_textsize::<()>(&mut state, bigger);
        assert_eq!(state.zoom, UiZoom::Z110);
        let _ = change_textsize::<()>(&mut state, Some(UiZoom::Z100));
        assert_eq!(state.zoom, UiZoom::Z100);
        let _ = change_textsize::<()>(&mut state, None);
        assert_eq!(state.zoom, UiZoom::Z100);
    }

    #[test]
    fn text_size_events_pick_the_next_level() {
        assert_eq!(
            target_zoom(UiZoom::Z100, TextSizeEvent::Increase),
            Some(UiZoom::Z110)
        );
        assert_eq!(
            target_zoom(UiZoom::Z100, TextSizeEvent::Decrease),
            Some(UiZoom::Z90)
        );
        assert_eq!(target_zoom(UiZoom::Z150, TextSizeEvent::Increase), None);
        assert_eq!(
            target_zoom(UiZoom::Z140, TextSizeEvent::Reset),
            Some(UiZoom::Z100)
        );
    }
}
