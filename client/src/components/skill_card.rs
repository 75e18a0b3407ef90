//! Skill group card: heading plus one tag per skill, in author order.

#[cfg(test)]
#[path = "skill_card_test.rs"]
mod skill_card_test;

use leptos::prelude::*;

use crate::util::motion::{Hover, motion_style};

pub const SKILL_CARD_HOVER: Hover = Hover::lift(-5.0, 1.02);

/// Card listing a group of skills. Items are rendered as given; duplicates
/// produce duplicate tags.
#[component]
pub fn SkillCard(title: String, icon: String, items: Vec<String>) -> impl IntoView {
    view! {
        <div
            class="skill-card"
            data-hover="true"
            style=motion_style(None, Some(&SKILL_CARD_HOVER))
        >
            <div class="skill-card__header">
                <span class="skill-card__icon">{icon}</span>
                <h3 class="skill-card__title">{title}</h3>
            </div>
            <div class="skill-card__tags">
                {items
                    .into_iter()
                    .map(|item| view! { <span class="skill-tag">{item}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
