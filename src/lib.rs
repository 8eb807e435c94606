#![allow(non_snake_case)]

mod app;
mod behaviours;
mod components;
mod environment;
mod helper;
mod icons;
pub mod session;
mod style;
mod view_model;
mod widgets;

pub use app::run;
pub use environment::model::{Post, PostId};
pub use environment::PostStore;

/// Handy macro for future localization
#[macro_export]
macro_rules! loc {
    ($x:expr $(,)?) => {
        $x
    };
}
