#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct PostId(pub u32);

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single sample post as shown in the home feed
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub author: String,
    /// An emoji glyph, we have no images
    pub avatar: String,
    pub content: String,
    /// Relative time label such as "2 hours ago"
    pub time: String,
    pub likes: u32,
    pub comments: u32,
    pub location: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Skill {
    pub name: String,
    /// 0..=100
    pub level: u8,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfileSummary {
    pub avatar: String,
    pub name: String,
    pub tagline: String,
    pub posts: u32,
    pub followers: u32,
    pub likes: u32,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettingsEntry {
    pub title: String,
    pub description: String,
}

/// One bullet in the details modal
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Highlight {
    pub title: String,
    pub description: String,
}
