//! Career timeline: a vertical connector with one staggered block per entry.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::{IconName, TimelineEntry};
use crate::util::motion::{Motion, Pose, motion_style, stagger_delay};

pub const ENTRY_STAGGER_MS: u32 = 200;
pub const ENTRY_ICON_SIZE: u32 = 24;

/// Viewport reveal for the `index`-th entry, sliding in from the left.
#[must_use]
pub fn entry_motion(index: usize) -> Motion {
    Motion::reveal(Pose::hidden().with_x(-30.0), 600).with_delay(stagger_delay(index, ENTRY_STAGGER_MS))
}

/// Subheading line, e.g. `Acme · 2020 – 2022`.
#[must_use]
pub fn entry_meta(company: &str, period: &str) -> String {
    format!("{company} · {period}")
}

/// Entries render in the order given; the timeline does not sort.
#[component]
pub fn Timeline(entries: Vec<TimelineEntry>) -> impl IntoView {
    view! {
        <div class="timeline">
            <div class="timeline__line"></div>
            <div class="timeline__entries">
                {entries
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let motion = entry_motion(index);
                        let meta = entry_meta(&entry.company, &entry.period);
                        view! {
                            <div
                                class="timeline-entry"
                                data-key=entry.company
                                data-motion=motion.kind()
                                data-motion-once=motion.once()
                                style=motion_style(Some(&motion), None)
                            >
                                <div class="timeline-entry__badge">
                                    <Icon name=IconName::Briefcase size=ENTRY_ICON_SIZE/>
                                </div>
                                <div class="timeline-entry__body">
                                    <h3 class="timeline-entry__role">{entry.role}</h3>
                                    <p class="timeline-entry__meta">{meta}</p>
                                    <p class="timeline-entry__desc">{entry.desc}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
