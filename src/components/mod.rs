pub mod details;
pub mod feed;
pub mod home;
pub mod profile;
pub mod settings;
