//! Hero banner: avatar glyph, identity, and contact links.
//!
//! All three layers animate on mount with offsets so the avatar pops in
//! first and the contact row settles last.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use leptos::prelude::*;

use crate::components::contact_link::ContactLink;
use crate::components::icon::Icon;
use crate::content::{IconName, Profile};
use crate::util::motion::{Motion, Pose, motion_style};

pub const HERO_MOTION: Motion = Motion::mount(Pose::hidden().with_y(30.0), 800);
pub const AVATAR_MOTION: Motion = Motion::mount(Pose::hidden().with_scale(0.5), 600).with_delay(200);
pub const CONTACTS_MOTION: Motion = Motion::mount(Pose::hidden().with_y(20.0), 600).with_delay(600);
pub const AVATAR_ICON_SIZE: u32 = 48;

#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    let Profile { name, headline, summary, contacts, .. } = profile;

    view! {
        <section class="hero">
            <div class="hero__glow"></div>
            <div
                class="hero__inner"
                data-motion=HERO_MOTION.kind()
                style=motion_style(Some(&HERO_MOTION), None)
            >
                <div
                    class="hero__avatar"
                    data-motion=AVATAR_MOTION.kind()
                    style=motion_style(Some(&AVATAR_MOTION), None)
                >
                    <Icon name=IconName::Code size=AVATAR_ICON_SIZE/>
                </div>
                <h1 class="hero__name">{name}</h1>
                <p class="hero__headline">{headline}</p>
                <p class="hero__summary">{summary}</p>
                <div
                    class="hero__contacts"
                    data-motion=CONTACTS_MOTION.kind()
                    style=motion_style(Some(&CONTACTS_MOTION), None)
                >
                    {contacts
                        .into_iter()
                        .map(|c| {
                            view! { <ContactLink href=c.href icon=c.icon label=c.label external=c.external/> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
