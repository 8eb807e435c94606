#![allow(non_snake_case)]

use crate::environment::{Environment, PostStore, Repository};
use dioxus::prelude::*;

use crate::behaviours::{Behaviour, ChangeTextsizeBehaviour};
use crate::environment::platform::default_window;

use crate::style::STYLE;

use dioxus_desktop::{Config, WindowCloseBehaviour};

pub fn run() {
    use env_logger::Env;
    use std::io::Write;
    env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .init();

    let repository = Repository::new();
    let window = default_window(&repository.config().window);

    let style = STYLE;
    let config = Config::new()
        .with_close_behaviour(WindowCloseBehaviour::LastWindowExitsApp)
        .with_custom_head(format!(
            r#"
        <title>ParrotProgress</title>
        <style>{style}</style>
        "#
        ))
        .with_window(window);

    dioxus_desktop::launch_with_props(RootApp, RootAppProps { repository }, config);
}

pub struct RootAppProps {
    repository: Repository,
}

pub fn RootApp(cx: Scope<'_, RootAppProps>) -> Element<'_> {
    log::trace!("rerender root-app");
    let environment_state = use_state(cx, || {
        Environment::new(cx.props.repository.clone(), PostStore::sample())
    });

    ChangeTextsizeBehaviour::setup(cx, environment_state.get());

    cx.render(rsx! {
        crate::components::feed::FeedApp {
            environment: environment_state,
        }
    })
}
