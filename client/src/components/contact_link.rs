//! Hero contact pill (mail, phone, external profile).

#[cfg(test)]
#[path = "contact_link_test.rs"]
mod contact_link_test;

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::IconName;
use crate::util::motion::{Hover, motion_style};

pub const CONTACT_ICON_SIZE: u32 = 18;
pub const CONTACT_HOVER: Hover = Hover::lift(-2.0, 1.05);

/// `target` attribute: external links open a new browsing context.
#[must_use]
pub const fn link_target(external: bool) -> Option<&'static str> {
    if external { Some("_blank") } else { None }
}

/// `rel` attribute isolating the opener and referrer of external links.
#[must_use]
pub const fn link_rel(external: bool) -> Option<&'static str> {
    if external { Some("noopener noreferrer") } else { None }
}

/// A labeled contact link with an icon.
#[component]
pub fn ContactLink(
    href: String,
    icon: IconName,
    label: String,
    #[prop(optional)] external: bool,
) -> impl IntoView {
    view! {
        <a
            class="contact-link"
            href=href
            target=link_target(external)
            rel=link_rel(external)
            data-hover="true"
            style=motion_style(None, Some(&CONTACT_HOVER))
        >
            <Icon name=icon size=CONTACT_ICON_SIZE/>
            <span class="contact-link__label">{label}</span>
        </a>
    }
}
