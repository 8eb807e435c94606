use std::collections::HashSet;

use im::Vector;

use super::model::*;
use crate::loc;

/// The read-only sample content of a session. Cloning is cheap, the
/// collections are shared.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostStore {
    posts: Vector<Post>,
    features: Vector<Feature>,
    profile: ProfileSummary,
    settings: Vector<SettingsEntry>,
    highlights: Vector<Highlight>,
}

impl PostStore {
    /// A store with the given posts and otherwise the sample content.
    /// Fails if two posts share an id.
    pub fn with_posts(posts: Vec<Post>) -> Result<Self, String> {
        check_unique(&posts)?;
        Ok(Self::with_static_content(posts))
    }

    /// The demo store. Should the sample posts ever repeat an id, the
    /// error is logged and only the first post with that id is kept.
    pub fn sample() -> Self {
        Self::checked(sample_posts())
    }

    fn checked(posts: Vec<Post>) -> Self {
        match Self::with_posts(posts.clone()) {
            Ok(store) => store,
            Err(e) => {
                log::error!("Invalid sample posts: {e}");
                let mut seen = HashSet::new();
                let unique = posts.into_iter().filter(|p| seen.insert(p.id)).collect();
                Self::with_static_content(unique)
            }
        }
    }

    fn with_static_content(posts: Vec<Post>) -> Self {
        Self {
            posts: posts.into(),
            features: sample_features().into(),
            profile: sample_profile(),
            settings: sample_settings().into(),
            highlights: sample_highlights().into(),
        }
    }

    pub fn posts(&self) -> &Vector<Post> {
        &self.posts
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PostId) -> bool {
        self.post(id).is_some()
    }

    pub fn features(&self) -> &Vector<Feature> {
        &self.features
    }

    pub fn profile(&self) -> &ProfileSummary {
        &self.profile
    }

    pub fn settings(&self) -> &Vector<SettingsEntry> {
        &self.settings
    }

    pub fn highlights(&self) -> &Vector<Highlight> {
        &self.highlights
    }
}

fn check_unique(posts: &[Post]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for post in posts.iter() {
        if !seen.insert(post.id) {
            return Err(format!("Duplicate post id {}", post.id));
        }
    }
    Ok(())
}

impl Default for PostStore {
    fn default() -> Self {
        Self::sample()
    }
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: u32,
    author: &str,
    avatar: &str,
    content: &str,
    time: &str,
    likes: u32,
    comments: u32,
    location: &str,
) -> Post {
    Post {
        id: PostId(id),
        author: author.to_string(),
        avatar: avatar.to_string(),
        content: content.to_string(),
        time: time.to_string(),
        likes,
        comments,
        location: location.to_string(),
    }
}

fn sample_posts() -> Vec<Post> {
    vec![
        post(
            1,
            "Taro Tanaka",
            "👨‍💻",
            loc!("Tried the new features of Next.js 15! Turbopack made development blazing fast."),
            loc!("2 hours ago"),
            12,
            3,
            loc!("Tokyo, Japan"),
        ),
        post(
            2,
            "Hanako Sato",
            "👩‍🎨",
            loc!("Building animations with Framer Motion is way too much fun! The UI becomes so much more appealing."),
            loc!("5 hours ago"),
            25,
            8,
            loc!("Osaka, Japan"),
        ),
        post(
            3,
            "Jiro Yamada",
            "🧑‍🚀",
            loc!("Finished the realtime features with Supabase! Authentication was set up in no time."),
            loc!("1 day ago"),
            18,
            5,
            loc!("Fukuoka, Japan"),
        ),
    ]
}

fn sample_features() -> Vec<Feature> {
    [
        ("🚀", loc!("Fast Development"), loc!("Blazing fast builds with Turbopack")),
        ("🎨", loc!("Beautiful UI"), loc!("Tailwind CSS and Framer Motion")),
        ("🔐", loc!("Authentication"), loc!("Supabase auth system")),
        ("📱", loc!("Responsive"), loc!("Mobile-first design")),
    ]
    .into_iter()
    .map(|(icon, title, description)| Feature {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn sample_profile() -> ProfileSummary {
    let skills = [
        ("Next.js", 90),
        ("React", 95),
        ("TypeScript", 85),
        ("Tailwind CSS", 80),
    ]
    .into_iter()
    .map(|(name, level)| Skill {
        name: name.to_string(),
        level,
    })
    .collect();
    ProfileSummary {
        avatar: "👨‍💻".to_string(),
        name: loc!("Developer Profile").to_string(),
        tagline: loc!("Next.js enthusiast | React developer").to_string(),
        posts: 42,
        followers: 1200,
        likes: 256,
        skills,
    }
}

fn sample_settings() -> Vec<SettingsEntry> {
    [
        (loc!("Notifications"), loc!("Manage push and email notifications")),
        (loc!("Privacy"), loc!("Account visibility settings")),
        (loc!("Theme"), loc!("Switch between dark and light mode")),
        (loc!("Language"), loc!("Change the display language")),
        (loc!("Data Sync"), loc!("Cloud backup settings")),
    ]
    .into_iter()
    .map(|(title, description)| SettingsEntry {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn sample_highlights() -> Vec<Highlight> {
    [
        (loc!("Practical learning"), loc!("The tech stack real projects use")),
        (loc!("Modern developer experience"), loc!("The latest React features and Next.js 15")),
        (loc!("Beautiful UI/UX"), loc!("Framer Motion and Tailwind CSS")),
    ]
    .into_iter()
    .map(|(title, description)| Highlight {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_post_ids_are_unique() {
        let store = PostStore::sample();
        let posts: Vec<Post> = store.posts().iter().cloned().collect();
        assert_eq!(posts.len(), 3);
        assert!(PostStore::with_posts(posts).is_ok());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let a = post(7, "a", "🙂", "first", "now", 0, 0, "here");
        let b = post(7, "b", "🙃", "second", "now", 1, 1, "there");
        let error = PostStore::with_posts(vec![a, b]).unwrap_err();
        assert!(error.contains('7'));
    }

    #[test]
    fn sample_posts_pass_the_id_check() {
        assert!(check_unique(&sample_posts()).is_ok());
        assert_eq!(PostStore::sample().posts().len(), sample_posts().len());
    }

    #[test]
    fn checked_store_keeps_first_of_duplicate_ids() {
        let a = post(4, "a", "🙂", "first", "now", 0, 0, "here");
        let b = post(4, "b", "🙃", "second", "now", 1, 1, "there");
        let c = post(5, "c", "😀", "third", "now", 2, 2, "elsewhere");
        let store = PostStore::checked(vec![a, b, c]);
        assert_eq!(store.posts().len(), 2);
        assert_eq!(store.post(PostId(4)).map(|p| p.author.as_str()), Some("a"));
        assert!(store.contains(PostId(5)));
    }

    #[test]
    fn lookup_by_id() {
        let store = PostStore::sample();
        assert_eq!(store.post(PostId(2)).map(|p| p.likes), Some(25));
        assert!(store.contains(PostId(3)));
        assert!(!store.contains(PostId(99)));
    }

    #[test]
    fn static_content_is_complete() {
        let store = PostStore::sample();
        assert_eq!(store.features().len(), 4);
        assert_eq!(store.settings().len(), 5);
        assert_eq!(store.highlights().len(), 3);
        assert!(store.profile().skills.iter().all(|s| s.level <= 100));
    }
}
