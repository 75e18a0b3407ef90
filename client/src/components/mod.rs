//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are stateless render functions: each receives an owned slice of
//! portfolio content as props and returns markup plus motion configuration.
//! Nothing flows back to the parent.

pub mod contact_link;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod project_card;
pub mod section;
pub mod skill_card;
pub mod timeline;
