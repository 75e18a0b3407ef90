//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, viewport
//! observation) and animation configuration from page and component logic.

pub mod clock;
pub mod motion;
pub mod reveal;
