pub mod model;
pub mod platform;
pub mod repository;
pub mod store;
pub mod types;

use navicula::types::EnvironmentType;

pub use repository::Repository;
pub use store::PostStore;

#[derive(Clone)]
pub struct Environment {
    pub repository: Repository,
    pub store: PostStore,
}

impl EnvironmentType for Environment {
    type AppEvent = types::AppEvent;
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish()
    }
}

impl Environment {
    pub fn new(repository: Repository, store: PostStore) -> Self {
        Self { repository, store }
    }
}
