use dioxus::prelude::*;

use crate::components::feed::{Action, ViewStore};
use crate::environment::model::Feature;
use crate::environment::PostStore;
use crate::icons;
use crate::loc;
use crate::view_model::PostViewModel;
use crate::widgets::*;

#[inline_props]
pub fn HomePanel<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>, content: &'a PostStore) -> Element<'a> {
    log::trace!("rerender home panel");
    let posts: Vec<PostViewModel> = content
        .posts()
        .iter()
        .map(|post| PostViewModel::new(post, &store.session))
        .collect();

    cx.render(rsx!(
        VStack { class: "gap-4 stagger",
            WelcomeCard { store: store }
            div { class: "feature-grid fade-up",
                content.features().iter().map(|feature| rsx!(FeatureCard {
                    key: "{feature.title}",
                    feature: feature
                }))
            }
            posts.into_iter().map(|post| {
                let id = post.id;
                rsx!(PostCard {
                    key: "{id}",
                    store: store,
                    post: post
                })
            })
        }
    ))
}

#[inline_props]
fn WelcomeCard<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>) -> Element<'a> {
    cx.render(rsx!(
        div { class: "welcome-card fade-up",
            h1 { loc!("Welcome to the Next.js learning app! 🎉") }
            Paragraph { class: "subtitle", loc!("Experience the world of modern React development") }
            TextButton {
                class: "light mt-3",
                text: loc!("Show details"),
                onclick: move |_| store.send(Action::OpenModal)
            }
        }
    ))
}

#[inline_props]
fn FeatureCard<'a>(cx: Scope<'a>, feature: &'a Feature) -> Element<'a> {
    cx.render(rsx!(
        Card { class: "feature-card hover-lift",
            div { class: "feature-icon", "{feature.icon}" }
            h3 { "{feature.title}" }
            Paragraph { style: TextStyle::Secondary, "{feature.description}" }
        }
    ))
}

#[inline_props]
fn PostCard<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>, post: PostViewModel) -> Element<'a> {
    let id = post.id;
    let like_class = if post.is_liked {
        "like-button liked"
    } else {
        "like-button"
    };
    cx.render(rsx!(
        Card { class: "post-card fade-up hover-grow",
            HStack { class: "gap-3",
                div { class: "avatar", "{post.avatar}" }
                VStack { class: "grow gap-1",
                    h3 { class: "author", "{post.author}" }
                    IconLabel { icon: icons::ICON_CLOCK, text: &post.time }
                    IconLabel { icon: icons::ICON_PIN, text: &post.location }
                    Paragraph { class: "post-content", "{post.content}" }
                    HStack { class: "post-actions gap-4 mt-2",
                        post.is_liked(|_, icon| cx.render(rsx!(IconTextButton {
                            class: like_class,
                            icon: icon,
                            title: &post.likes_title,
                            text: &post.likes,
                            onclick: move |_| store.send(Action::ToggleLike(id))
                        }))),
                        div { class: "comment-button",
                            IconButton {
                                icon: icons::ICON_COMMENT,
                                title: &post.comments_title
                            }
                            Label { style: TextStyle::Secondary, "{post.comments}" }
                        }
                        IconButton {
                            class: "share-button",
                            icon: icons::ICON_SHARE,
                            title: &post.share_title
                        }
                    }
                }
            }
        }
    ))
}
