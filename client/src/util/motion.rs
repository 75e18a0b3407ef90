//! Declarative animation configuration.
//!
//! DESIGN
//! ======
//! Components describe motion as data: an entry `Motion` (trigger, starting
//! pose, timing) and an optional `Hover` transform. Both are emitted as
//! `data-motion*` attributes plus CSS custom properties; the stylesheet owns
//! the actual transitions and `util::reveal` flips in-view elements once the
//! browser reports them visible.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use std::fmt::Write as _;

/// Class added to an in-view element when it has entered the viewport.
pub const REVEALED_CLASS: &str = "is-revealed";
/// Selector for every element waiting on a viewport reveal.
pub const REVEAL_SELECTOR: &str = "[data-motion=\"reveal\"]";
/// Attribute carrying the `once` flag for in-view triggers.
pub const ONCE_ATTR: &str = "data-motion-once";

/// Visual state an element animates from. The resting pose is identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    /// Horizontal offset in px.
    pub x: f64,
    /// Vertical offset in px.
    pub y: f64,
    pub scale: f64,
    /// Rotation in degrees.
    pub rotate: f64,
}

impl Pose {
    pub const REST: Self = Self { opacity: 1.0, x: 0.0, y: 0.0, scale: 1.0, rotate: 0.0 };

    /// Fully transparent, otherwise at rest.
    #[must_use]
    pub const fn hidden() -> Self {
        Self { opacity: 0.0, ..Self::REST }
    }

    #[must_use]
    pub const fn with_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    #[must_use]
    pub const fn with_y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    #[must_use]
    pub const fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }
}

/// When the entry animation starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// As soon as the element is rendered.
    Mount,
    /// When the element scrolls into view. With `once`, leaving and
    /// re-entering the viewport does not replay it.
    InView { once: bool },
}

/// Entry animation from `initial` to the resting pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub trigger: Trigger,
    pub initial: Pose,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Motion {
    #[must_use]
    pub const fn mount(initial: Pose, duration_ms: u32) -> Self {
        Self { trigger: Trigger::Mount, initial, duration_ms, delay_ms: 0 }
    }

    /// Viewport-triggered reveal that fires at most once.
    #[must_use]
    pub const fn reveal(initial: Pose, duration_ms: u32) -> Self {
        Self { trigger: Trigger::InView { once: true }, initial, duration_ms, delay_ms: 0 }
    }

    #[must_use]
    pub const fn with_delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// Value for the `data-motion` attribute.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self.trigger {
            Trigger::Mount => "mount",
            Trigger::InView { .. } => "reveal",
        }
    }

    /// Value for `data-motion-once`; only in-view triggers carry one.
    #[must_use]
    pub const fn once(&self) -> Option<&'static str> {
        match self.trigger {
            Trigger::Mount => None,
            Trigger::InView { once: true } => Some("true"),
            Trigger::InView { once: false } => Some("false"),
        }
    }

    /// CSS custom properties consumed by the stylesheet.
    #[must_use]
    pub fn style(&self) -> String {
        let pose = &self.initial;
        let mut out = String::new();
        let _ = write!(
            out,
            "--motion-opacity:{};--motion-x:{}px;--motion-y:{}px;--motion-scale:{};--motion-rotate:{}deg;\
             --motion-duration:{}ms;--motion-delay:{}ms;",
            pose.opacity, pose.x, pose.y, pose.scale, pose.rotate, self.duration_ms, self.delay_ms
        );
        out
    }
}

/// Transform applied while the pointer hovers the element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hover {
    pub scale: f64,
    /// Vertical offset in px; negative lifts the element.
    pub y: f64,
    /// Rotation in degrees.
    pub rotate: f64,
}

impl Hover {
    #[must_use]
    pub const fn lift(y: f64, scale: f64) -> Self {
        Self { scale, y, rotate: 0.0 }
    }

    #[must_use]
    pub const fn spin(rotate: f64, scale: f64) -> Self {
        Self { scale, y: 0.0, rotate }
    }

    #[must_use]
    pub fn style(&self) -> String {
        format!("--hover-scale:{};--hover-y:{}px;--hover-rotate:{}deg;", self.scale, self.y, self.rotate)
    }
}

/// Combined inline style for an element with optional entry and hover motion.
#[must_use]
pub fn motion_style(motion: Option<&Motion>, hover: Option<&Hover>) -> String {
    let mut style = motion.map(Motion::style).unwrap_or_default();
    if let Some(hover) = hover {
        style.push_str(&hover.style());
    }
    style
}

/// Delay for the `index`-th item of a staggered list.
#[must_use]
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// What to do with an observed element after an intersection change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// Add the revealed class; stop observing when `unobserve` is set.
    Reveal { unobserve: bool },
    /// Remove the revealed class so the next entry replays the animation.
    Conceal,
    /// Leave the element as it is.
    Keep,
}

/// Decide how an in-view element reacts to entering or leaving the viewport.
#[must_use]
pub const fn reveal_action(intersecting: bool, once: bool) -> RevealAction {
    match (intersecting, once) {
        (true, once) => RevealAction::Reveal { unobserve: once },
        (false, false) => RevealAction::Conceal,
        (false, true) => RevealAction::Keep,
    }
}
