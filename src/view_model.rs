use crate::environment::model::*;
use crate::helper::format_number;
use crate::icons::*;
use crate::loc;
use crate::session::{Session, Tab};

/// A post, combined with the like state of the current session
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostViewModel {
    pub id: PostId,
    pub author: String,
    pub avatar: String,
    pub content: String,
    pub time: String,
    pub location: String,
    pub is_liked: bool,
    pub likes: String,
    pub likes_title: String,
    pub comments: String,
    pub comments_title: String,
    pub share_title: String,
}

impl PostViewModel {
    pub fn new(post: &Post, session: &Session) -> Self {
        let is_liked = session.is_liked(post.id);
        let likes = session.displayed_likes(post);
        let likes_title = if is_liked {
            loc!("Unlike")
        } else {
            loc!("Like")
        };
        Self {
            id: post.id,
            author: post.author.clone(),
            avatar: post.avatar.clone(),
            content: post.content.clone(),
            time: post.time.clone(),
            location: post.location.clone(),
            is_liked,
            likes: format_number(likes as i64),
            likes_title: likes_title.to_string(),
            comments: format_number(post.comments as i64),
            comments_title: format!("{} {}", post.comments, loc!("Comments")),
            share_title: loc!("Share").to_string(),
        }
    }

    pub fn is_liked<T>(&self, action: impl Fn(bool, &'static str) -> T) -> T {
        let value = self.is_liked;
        let icon = if value { ICON_HEART2 } else { ICON_HEART1 };
        action(value, icon)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfileViewModel {
    pub avatar: String,
    pub name: String,
    pub tagline: String,
    pub posts: String,
    pub followers: String,
    pub likes: String,
    pub skills: Vec<SkillViewModel>,
}

impl ProfileViewModel {
    pub fn new(profile: &ProfileSummary) -> Self {
        Self {
            avatar: profile.avatar.clone(),
            name: profile.name.clone(),
            tagline: profile.tagline.clone(),
            posts: format_number(profile.posts as i64),
            followers: format_number(profile.followers as i64),
            likes: format_number(profile.likes as i64),
            skills: profile
                .skills
                .iter()
                .enumerate()
                .map(|(index, skill)| SkillViewModel::new(index, skill))
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SkillViewModel {
    pub name: String,
    pub level: u8,
    pub label: String,
    /// Bars fill one after another
    pub delay_ms: u32,
}

impl SkillViewModel {
    const STAGGER_MS: u32 = 200;

    fn new(index: usize, skill: &Skill) -> Self {
        let level = skill.level.min(100);
        Self {
            name: skill.name.clone(),
            level,
            label: format!("{level}%"),
            delay_ms: index as u32 * Self::STAGGER_MS,
        }
    }
}

/// One entry of the tab bar and the mobile menu
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TabViewModel {
    pub tab: Tab,
    pub label: &'static str,
    pub icon: &'static str,
    pub selected: bool,
}

impl TabViewModel {
    pub fn new(tab: Tab, selected: Tab) -> Self {
        let (label, icon) = match tab {
            Tab::Home => (loc!("Home"), ICON_HOME),
            Tab::Profile => (loc!("Profile"), ICON_PROFILE),
            Tab::Settings => (loc!("Settings"), ICON_SETTINGS),
        };
        Self {
            tab,
            label,
            icon,
            selected: tab == selected,
        }
    }

    pub fn all(selected: Tab) -> Vec<Self> {
        use strum::IntoEnumIterator;
        Tab::iter().map(|tab| Self::new(tab, selected)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::store::PostStore;

    #[test]
    fn post_view_model_reflects_like() {
        let store = PostStore::sample();
        let post = store.post(PostId(1)).unwrap();
        let mut session = Session::new();

        let vm = PostViewModel::new(post, &session);
        assert!(!vm.is_liked);
        assert_eq!(vm.likes, post.likes.to_string());
        vm.is_liked(|liked, icon| {
            assert!(!liked);
            assert_eq!(icon, ICON_HEART1);
        });

        session.toggle_like(&store, post.id).unwrap();
        let vm = PostViewModel::new(post, &session);
        assert!(vm.is_liked);
        assert_eq!(vm.likes, (post.likes + 1).to_string());
        vm.is_liked(|liked, icon| {
            assert!(liked);
            assert_eq!(icon, ICON_HEART2);
        });
    }

    #[test]
    fn skills_are_staggered() {
        let store = PostStore::sample();
        let profile = ProfileViewModel::new(store.profile());
        let delays: Vec<u32> = profile.skills.iter().map(|s| s.delay_ms).collect();
        assert_eq!(delays, vec![0, 200, 400, 600]);
        assert_eq!(profile.skills[0].label, "90%");
        assert_eq!(profile.posts, "42");
    }

    #[test]
    fn exactly_one_tab_is_selected() {
        let tabs = TabViewModel::all(Tab::Profile);
        assert_eq!(tabs.len(), 3);
        let selected: Vec<Tab> = tabs.iter().filter(|t| t.selected).map(|t| t.tab).collect();
        assert_eq!(selected, vec![Tab::Profile]);
    }
}
