//! The state of one feed window, independent of rendering.
//!
//! Every operation here is synchronous and free of I/O, so applying the same
//! sequence of [`Command`]s to two fresh sessions always yields equal
//! sessions.

use im::HashSet;
use strum_macros::{Display, EnumIter};

use crate::environment::model::{Post, PostId};
use crate::environment::store::PostStore;

/// Initial value of the (not yet wired) notification counter
pub const INITIAL_NOTIFICATIONS: u32 = 3;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default, Display, EnumIter)]
pub enum Tab {
    #[default]
    Home,
    Profile,
    Settings,
}

impl Tab {
    /// Position in the tab bar, left to right
    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Profile => 1,
            Tab::Settings => 2,
        }
    }
}

/// The result of a successful like toggle
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LikeChange {
    Liked(PostId),
    Unliked(PostId),
}

/// The set of posts the viewer liked during this session
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LikeTracker {
    liked: HashSet<PostId>,
}

impl LikeTracker {
    pub fn contains(&self, id: PostId) -> bool {
        self.liked.contains(&id)
    }

    /// Flip membership of `id`. The caller validates the id.
    fn toggle(&mut self, id: PostId) -> LikeChange {
        if self.liked.remove(&id).is_some() {
            LikeChange::Unliked(id)
        } else {
            self.liked.insert(id);
            LikeChange::Liked(id)
        }
    }

    /// The like count to display for `post`
    pub fn displayed_likes(&self, post: &Post) -> u32 {
        post.likes + u32::from(self.contains(post.id))
    }
}

/// Everything a user interaction can do to a session
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    SelectTab(Tab),
    ToggleLike(PostId),
    OpenMenu,
    CloseMenu,
    ToggleMenu,
    OpenModal,
    CloseModal,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Session {
    tab: Tab,
    likes: LikeTracker,
    notifications: u32,
    menu_open: bool,
    modal_open: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            tab: Tab::default(),
            likes: LikeTracker::default(),
            notifications: INITIAL_NOTIFICATIONS,
            menu_open: false,
            modal_open: false,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn notifications(&self) -> u32 {
        self.notifications
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_liked(&self, id: PostId) -> bool {
        self.likes.contains(id)
    }

    pub fn displayed_likes(&self, post: &Post) -> u32 {
        self.likes.displayed_likes(post)
    }

    /// Navigate to `tab`. Always closes the mobile menu.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.menu_open = false;
    }

    /// Like or unlike a post. Unknown ids leave the session untouched.
    pub fn toggle_like(&mut self, store: &PostStore, id: PostId) -> Result<LikeChange, String> {
        if !store.contains(id) {
            log::warn!("Ignoring like toggle for unknown post {id}");
            return Err(format!("Unknown post {id}"));
        }
        let change = self.likes.toggle(id);
        match change {
            LikeChange::Liked(id) => log::info!("Liked post {id}"),
            LikeChange::Unliked(id) => log::info!("Unliked post {id}"),
        }
        Ok(change)
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn apply(&mut self, store: &PostStore, command: Command) -> Result<(), String> {
        match command {
            Command::SelectTab(tab) => self.select_tab(tab),
            Command::ToggleLike(id) => {
                self.toggle_like(store, id)?;
            }
            Command::OpenMenu => self.open_menu(),
            Command::CloseMenu => self.close_menu(),
            Command::ToggleMenu => self.toggle_menu(),
            Command::OpenModal => self.open_modal(),
            Command::CloseModal => self.close_modal(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn base_likes(store: &PostStore, id: PostId) -> u32 {
        store.post(id).map(|p| p.likes).unwrap()
    }

    fn displayed(session: &Session, store: &PostStore, id: PostId) -> u32 {
        session.displayed_likes(store.post(id).unwrap())
    }

    #[test]
    fn starts_on_home_with_everything_closed() {
        let session = Session::new();
        assert_eq!(session.tab(), Tab::Home);
        assert!(session.likes.liked.is_empty());
        assert!(!session.is_menu_open());
        assert!(!session.is_modal_open());
        assert_eq!(session.notifications(), INITIAL_NOTIFICATIONS);
    }

    #[test]
    fn single_toggle_likes_and_second_restores() {
        let store = PostStore::sample();
        for post in store.posts().iter() {
            let mut session = Session::new();
            let change = session.toggle_like(&store, post.id).unwrap();
            assert_eq!(change, LikeChange::Liked(post.id));
            assert!(session.is_liked(post.id));
            assert_eq!(displayed(&session, &store, post.id), post.likes + 1);

            let change = session.toggle_like(&store, post.id).unwrap();
            assert_eq!(change, LikeChange::Unliked(post.id));
            assert!(!session.is_liked(post.id));
            assert_eq!(displayed(&session, &store, post.id), post.likes);
        }
    }

    #[test]
    fn likes_are_tracked_per_post() {
        let store = PostStore::sample();
        let mut session = Session::new();
        session.toggle_like(&store, PostId(1)).unwrap();
        session.toggle_like(&store, PostId(3)).unwrap();
        assert_eq!(session.likes.liked.len(), 2);
        assert_eq!(
            displayed(&session, &store, PostId(2)),
            base_likes(&store, PostId(2))
        );
    }

    #[test]
    fn unknown_post_is_rejected_without_change() {
        let store = PostStore::sample();
        let mut session = Session::new();
        session.toggle_like(&store, PostId(1)).unwrap();
        let before = session.clone();
        let result = session.toggle_like(&store, PostId(404));
        assert!(result.is_err());
        assert_eq!(session, before);
    }

    #[test]
    fn selecting_a_tab_closes_the_menu() {
        for tab in Tab::iter() {
            for menu_open in [false, true] {
                let mut session = Session::new();
                if menu_open {
                    session.open_menu();
                }
                session.select_tab(tab);
                assert_eq!(session.tab(), tab);
                assert!(!session.is_menu_open());
            }
        }
    }

    #[test]
    fn menu_toggle_flips() {
        let mut session = Session::new();
        session.toggle_menu();
        assert!(session.is_menu_open());
        session.toggle_menu();
        assert!(!session.is_menu_open());
        session.open_menu();
        session.close_menu();
        assert!(!session.is_menu_open());
    }

    #[test]
    fn like_survives_navigation_and_modal() {
        let store = PostStore::sample();
        let mut session = Session::new();
        session.toggle_like(&store, PostId(1)).unwrap();
        assert!(session.is_liked(PostId(1)));
        assert_eq!(
            displayed(&session, &store, PostId(1)),
            base_likes(&store, PostId(1)) + 1
        );

        session.select_tab(Tab::Profile);
        assert_eq!(session.tab(), Tab::Profile);
        assert!(session.is_liked(PostId(1)));
        assert_eq!(session.likes.liked.len(), 1);

        session.open_modal();
        assert!(session.is_modal_open());
        session.close_modal();
        assert!(!session.is_modal_open());
    }

    #[test]
    fn navigation_forces_menu_closed() {
        let mut session = Session::new();
        session.open_menu();
        assert!(session.is_menu_open());
        session.select_tab(Tab::Settings);
        assert!(!session.is_menu_open());
        assert_eq!(session.tab(), Tab::Settings);
    }

    #[test]
    fn apply_reports_unknown_posts() {
        let store = PostStore::sample();
        let mut session = Session::new();
        assert!(session
            .apply(&store, Command::ToggleLike(PostId(0)))
            .is_err());
        assert!(session.apply(&store, Command::OpenModal).is_ok());
        assert!(session.is_modal_open());
    }

    #[test]
    fn tab_indices_follow_declaration_order() {
        let indices: Vec<usize> = Tab::iter().map(|t| t.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn tab_strategy() -> impl Strategy<Value = Tab> {
        prop_oneof![Just(Tab::Home), Just(Tab::Profile), Just(Tab::Settings)]
    }

    /// Ids 0..6 cover both known (1..=3) and unknown posts
    fn command_strategy() -> impl Strategy<Value = Command> {
        prop_oneof![
            tab_strategy().prop_map(Command::SelectTab),
            (0u32..6).prop_map(|id| Command::ToggleLike(PostId(id))),
            Just(Command::OpenMenu),
            Just(Command::CloseMenu),
            Just(Command::ToggleMenu),
            Just(Command::OpenModal),
            Just(Command::CloseModal),
        ]
    }

    proptest! {
        #[test]
        fn replay_is_deterministic(commands in prop::collection::vec(command_strategy(), 0..64)) {
            let store = PostStore::sample();
            let mut a = Session::new();
            let mut b = Session::new();
            for command in commands.iter() {
                let _ = a.apply(&store, *command);
            }
            for command in commands.iter() {
                let _ = b.apply(&store, *command);
            }
            prop_assert_eq!(a, b);
        }

        #[test]
        fn double_toggle_is_identity(
            prefix in prop::collection::vec(command_strategy(), 0..32),
            id in 1u32..=3,
        ) {
            let store = PostStore::sample();
            let mut session = Session::new();
            for command in prefix.iter() {
                let _ = session.apply(&store, *command);
            }
            let before = session.clone();
            session.toggle_like(&store, PostId(id)).unwrap();
            session.toggle_like(&store, PostId(id)).unwrap();
            prop_assert_eq!(session, before);
        }

        #[test]
        fn select_tab_always_lands_with_menu_closed(
            prefix in prop::collection::vec(command_strategy(), 0..32),
            tab in tab_strategy(),
        ) {
            let store = PostStore::sample();
            let mut session = Session::new();
            for command in prefix.iter() {
                let _ = session.apply(&store, *command);
            }
            session.select_tab(tab);
            prop_assert_eq!(session.tab(), tab);
            prop_assert!(!session.is_menu_open());
        }
    }
}
