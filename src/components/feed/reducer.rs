use crate::behaviours::{Behaviour, ChangeTextsizeBehaviour};
use crate::environment::model::PostId;
use crate::environment::store::PostStore;
use crate::environment::types::{AppEvent, ShortcutEvent, UiConfig};
use crate::environment::Environment;
use crate::session::{Command, Session, Tab};
use navicula::Effect;

pub type ViewStore<'a> = navicula::ViewStore<'a, super::FeedReducer>;

#[derive(Clone, Debug)]
pub enum Action {
    Initial,
    SelectTab(Tab),
    ToggleLike(PostId),
    OpenMenu,
    CloseMenu,
    ToggleMenu,
    OpenModal,
    CloseModal,
    /// The floating "new post" button
    Compose,
    AppEvent(AppEvent),
    ClearError,
}

impl Action {
    /// The session command behind this action, if any
    pub fn command(&self) -> Option<Command> {
        Some(match self {
            Action::SelectTab(tab) => Command::SelectTab(*tab),
            Action::ToggleLike(id) => Command::ToggleLike(*id),
            Action::OpenMenu => Command::OpenMenu,
            Action::CloseMenu => Command::CloseMenu,
            Action::ToggleMenu => Command::ToggleMenu,
            Action::OpenModal => Command::OpenModal,
            Action::CloseModal => Command::CloseModal,
            Action::Initial
            | Action::Compose
            | Action::AppEvent(_)
            | Action::ClearError => return None,
        })
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct State {
    pub session: Session,
    /// The tab shown before the last navigation
    pub previous_tab: Tab,
    pub ui_settings: UiConfig,
    pub error: Option<String>,
}

impl State {
    /// Run a session command, keeping track of the previous tab and
    /// recording a failure for display.
    pub fn apply(&mut self, store: &PostStore, command: Command) {
        if let Command::SelectTab(_) = command {
            self.previous_tab = self.session.tab();
        }
        if let Err(e) = self.session.apply(store, command) {
            self.error = Some(e);
        }
    }

    /// Close the topmost overlay: the modal first, then the menu
    pub fn dismiss(&mut self) {
        if self.session.is_modal_open() {
            self.session.close_modal();
        } else {
            self.session.close_menu();
        }
    }
}

pub fn reduce<'a>(
    context: &'a impl navicula::types::MessageContext<Action, (), ()>,
    action: Action,
    state: &'a mut State,
    environment: &'a Environment,
) -> Effect<'static, Action> {
    log::trace!("{action:?}");

    if let Some(command) = action.command() {
        state.apply(&environment.store, command);
        return Effect::NONE;
    }

    match action {
        Action::Initial => {
            state.ui_settings = environment.repository.config().clone();
            Effect::NONE
        }
        Action::Compose => {
            log::info!("New post requested");
            Effect::NONE
        }
        Action::AppEvent(AppEvent::Shortcut(ShortcutEvent::Dismiss)) => {
            state.dismiss();
            Effect::NONE
        }
        Action::AppEvent(AppEvent::Shortcut(ShortcutEvent::TextSize(change))) => {
            let window = context.window();
            ChangeTextsizeBehaviour::handle(window, change, &mut state.ui_settings, environment)
        }
        Action::ClearError => {
            state.error = None;
            Effect::NONE
        }
        _ => Effect::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_actions_map_to_commands() {
        assert_eq!(
            Action::SelectTab(Tab::Profile).command(),
            Some(Command::SelectTab(Tab::Profile))
        );
        assert_eq!(
            Action::ToggleLike(PostId(2)).command(),
            Some(Command::ToggleLike(PostId(2)))
        );
        assert_eq!(Action::CloseModal.command(), Some(Command::CloseModal));
        assert_eq!(Action::Compose.command(), None);
        assert_eq!(Action::ClearError.command(), None);
    }

    #[test]
    fn navigation_remembers_previous_tab() {
        let store = PostStore::sample();
        let mut state = State::default();
        state.apply(&store, Command::SelectTab(Tab::Settings));
        assert_eq!(state.previous_tab, Tab::Home);
        state.apply(&store, Command::SelectTab(Tab::Profile));
        assert_eq!(state.previous_tab, Tab::Settings);
        assert_eq!(state.session.tab(), Tab::Profile);
    }

    #[test]
    fn unknown_like_is_reported() {
        let store = PostStore::sample();
        let mut state = State::default();
        state.apply(&store, Command::ToggleLike(PostId(77)));
        assert!(state.error.is_some());
        assert!(!state.session.is_liked(PostId(77)));
    }

    #[test]
    fn dismiss_closes_modal_before_menu() {
        let store = PostStore::sample();
        let mut state = State::default();
        state.apply(&store, Command::OpenMenu);
        state.apply(&store, Command::OpenModal);

        state.dismiss();
        assert!(!state.session.is_modal_open());
        assert!(state.session.is_menu_open());

        state.dismiss();
        assert!(!state.session.is_menu_open());
    }

    #[test]
    fn like_then_navigate_then_modal() {
        let store = PostStore::sample();
        let mut state = State::default();
        state.apply(&store, Command::ToggleLike(PostId(1)));
        state.apply(&store, Command::SelectTab(Tab::Profile));
        assert!(state.session.is_liked(PostId(1)));
        state.apply(&store, Command::OpenModal);
        assert!(state.session.is_modal_open());
        state.apply(&store, Command::CloseModal);
        assert!(!state.session.is_modal_open());
        assert!(state.error.is_none());
    }
}
