use dioxus::prelude::*;

use crate::environment::PostStore;
use crate::loc;
use crate::view_model::{ProfileViewModel, SkillViewModel};
use crate::widgets::*;

#[inline_props]
pub fn ProfilePanel<'a>(cx: Scope<'a>, content: &'a PostStore) -> Element<'a> {
    log::trace!("rerender profile panel");
    let profile = ProfileViewModel::new(content.profile());

    cx.render(rsx!(
        VStack { class: "gap-4",
            Card { class: "profile-card text-center",
                div { class: "profile-avatar", "{profile.avatar}" }
                h2 { "{profile.name}" }
                Paragraph { style: TextStyle::Secondary, "{profile.tagline}" }
                div { class: "stats-grid",
                    StatComponent { value: profile.posts.clone(), label: loc!("Posts"), class: "stat-blue" }
                    StatComponent { value: profile.followers.clone(), label: loc!("Followers"), class: "stat-green" }
                    StatComponent { value: profile.likes.clone(), label: loc!("Likes"), class: "stat-purple" }
                }
            }
            Card { class: "skills-card fade-up",
                h2 { loc!("Skills") }
                VStack { class: "gap-3",
                    profile.skills.iter().map(|skill| rsx!(SkillRow {
                        key: "{skill.name}",
                        skill: skill.clone()
                    }))
                }
            }
        }
    ))
}

#[inline_props]
fn StatComponent(cx: Scope, value: String, label: &'static str, class: &'static str) -> Element {
    cx.render(rsx!(
        div { class: "stat",
            div { class: "stat-value {class}", "{value}" }
            Label { style: TextStyle::Tertiary, "{label}" }
        }
    ))
}

#[inline_props]
fn SkillRow(cx: Scope, skill: SkillViewModel) -> Element {
    cx.render(rsx!(
        div { class: "skill",
            HStack { class: "justify-content-between mb-1",
                Label { class: "bold", "{skill.name}" }
                Label { style: TextStyle::Tertiary, "{skill.label}" }
            }
            ProgressBar { level: skill.level, delay_ms: skill.delay_ms }
        }
    ))
}
