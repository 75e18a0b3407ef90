//! Inline SVG icon set.
//!
//! Outline icons drawn on a 24×24 grid with round caps, scaled to the pixel
//! size requested by each usage site.

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use leptos::prelude::*;

use crate::content::IconName;

/// SVG child markup for an icon on the 24×24 grid.
#[must_use]
pub fn icon_markup(name: IconName) -> &'static str {
    match name {
        IconName::Briefcase => {
            r#"<path d="M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/><rect width="20" height="14" x="2" y="6" rx="2"/>"#
        }
        IconName::Code => r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#,
        IconName::ExternalLink => {
            r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#
        }
        IconName::Github => {
            r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
        }
        IconName::Globe => {
            r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#
        }
        IconName::Mail => {
            r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
        }
        IconName::Phone => {
            r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#
        }
    }
}

/// Stable class suffix for an icon, e.g. `icon--external-link`.
#[must_use]
pub fn icon_class(name: IconName) -> String {
    let slug = match name {
        IconName::Briefcase => "briefcase",
        IconName::Code => "code",
        IconName::ExternalLink => "external-link",
        IconName::Github => "github",
        IconName::Globe => "globe",
        IconName::Mail => "mail",
        IconName::Phone => "phone",
    };
    format!("icon icon--{slug}")
}

/// Decorative icon at `size` CSS pixels.
#[component]
pub fn Icon(name: IconName, size: u32) -> impl IntoView {
    view! {
        <svg
            class=icon_class(name)
            xmlns="http://www.w3.org/2000/svg"
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=icon_markup(name)
        ></svg>
    }
}
