mod reducer;
mod transition;
mod view;

pub use reducer::{Action, ViewStore};
pub use view::FeedApp;

pub struct FeedReducer;
use navicula::reducer::Reducer;

impl Reducer for FeedReducer {
    type Message = ();

    type DelegateMessage = ();

    type Action = reducer::Action;

    type State = reducer::State;

    type Environment = crate::environment::Environment;

    fn reduce<'a, 'b>(
        context: &'a impl navicula::types::MessageContext<
            Self::Action,
            Self::DelegateMessage,
            Self::Message,
        >,
        action: Self::Action,
        state: &'a mut Self::State,
        environment: &'a Self::Environment,
    ) -> navicula::effect::Effect<'b, Self::Action> {
        reducer::reduce(context, action, state, environment)
    }

    fn initial_action() -> Option<Self::Action> {
        Some(Action::Initial)
    }
}
