//! Project showcase card.
//!
//! DESIGN
//! ======
//! Featured and standard cards share one markup path; the featured flag only
//! switches type scale, padding, icon size, and hover scale.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use leptos::prelude::*;

use crate::components::contact_link::{link_rel, link_target};
use crate::components::icon::Icon;
use crate::content::{IconName, Project};
use crate::util::motion::{Hover, Motion, Pose, motion_style, stagger_delay};

/// Reveal stagger between neighbouring cards.
pub const CARD_STAGGER_MS: u32 = 100;
pub const LINK_ICON_SIZE: u32 = 16;
pub const ICON_HOVER: Hover = Hover::spin(45.0, 1.1);

/// Viewport reveal for the `index`-th card of a grid.
#[must_use]
pub fn card_motion(index: usize) -> Motion {
    Motion::reveal(Pose::hidden().with_y(30.0), 600).with_delay(stagger_delay(index, CARD_STAGGER_MS))
}

#[must_use]
pub const fn card_hover(featured: bool) -> Hover {
    Hover::lift(-8.0, if featured { 1.02 } else { 1.05 })
}

#[must_use]
pub const fn card_class(featured: bool) -> &'static str {
    if featured { "project-card project-card--featured" } else { "project-card" }
}

#[must_use]
pub const fn external_icon_size(featured: bool) -> u32 {
    if featured { 24 } else { 20 }
}

/// A project's name, description, technology tags, and outbound link.
///
/// `index` only staggers the reveal timing.
#[component]
pub fn ProjectCard(project: Project, index: usize, #[prop(optional)] featured: bool) -> impl IntoView {
    let motion = card_motion(index);
    let hover = card_hover(featured);
    let Project { name, description, tech, link, .. } = project;
    let key = name.clone();

    view! {
        <div
            class=card_class(featured)
            data-key=key
            data-motion=motion.kind()
            data-motion-once=motion.once()
            data-hover="true"
            style=motion_style(Some(&motion), Some(&hover))
        >
            <div class="project-card__header">
                <h3 class="project-card__title">{name}</h3>
                <div class="project-card__icon" data-hover="true" style=ICON_HOVER.style()>
                    <Icon name=IconName::ExternalLink size=external_icon_size(featured)/>
                </div>
            </div>
            <p class="project-card__description">{description}</p>
            <div class="project-card__tags">
                {tech
                    .into_iter()
                    .map(|t| view! { <span class="tech-tag">{t}</span> })
                    .collect_view()}
            </div>
            <a class="project-card__link" href=link target=link_target(true) rel=link_rel(true)>
                <Icon name=IconName::Globe size=LINK_ICON_SIZE/>
                <span>"View Project"</span>
            </a>
        </div>
    }
}
