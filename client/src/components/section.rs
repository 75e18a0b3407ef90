//! Page section wrapper with a gradient heading and a one-shot viewport
//! reveal.

use leptos::prelude::*;

use crate::util::motion::{Motion, Pose, motion_style};

pub const SECTION_MOTION: Motion = Motion::reveal(Pose::hidden().with_y(50.0), 800);

#[component]
pub fn Section(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=id
            class="section"
            data-motion=SECTION_MOTION.kind()
            data-motion-once=SECTION_MOTION.once()
            style=motion_style(Some(&SECTION_MOTION), None)
        >
            <h2 class="section__title">{title}</h2>
            {children()}
        </section>
    }
}
