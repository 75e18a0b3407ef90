//! Portfolio content loading and validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page content is a YAML document compiled into the binary. It is parsed
//! once per process (or once per WASM instance) and shared as `&'static`
//! records, so SSR and hydration always see the same data.
//!
//! Project names and timeline companies double as rendering identity keys, so
//! loading rejects duplicates instead of letting identity become ambiguous.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod types;

use std::collections::HashSet;
use std::sync::LazyLock;

pub use types::{Contact, Content, IconName, Profile, Project, SkillGroup, TimelineEntry};

/// Raw content document embedded at compile time.
pub const EMBEDDED_SOURCE: &str = include_str!("../../content/portfolio.yaml");

static EMBEDDED: LazyLock<Result<Content, ContentError>> = LazyLock::new(|| load(EMBEDDED_SOURCE));

/// Errors produced while loading the content document.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The document is not valid YAML or does not match the content schema.
    #[error("content parse failed: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Two projects share a name.
    #[error("duplicate project name: {0}")]
    DuplicateProject(String),

    /// Two timeline entries share a company.
    #[error("duplicate timeline company: {0}")]
    DuplicateCompany(String),
}

/// Parse and validate a content document.
///
/// # Errors
///
/// Returns [`ContentError::Parse`] for malformed documents and a duplicate
/// error when a project name or timeline company repeats.
pub fn load(source: &str) -> Result<Content, ContentError> {
    let content: Content = serde_yaml::from_str(source)?;
    validate(&content)?;
    Ok(content)
}

/// The embedded content document, parsed on first access.
///
/// # Errors
///
/// Returns the cached load error if the embedded document is invalid.
pub fn embedded() -> Result<&'static Content, &'static ContentError> {
    EMBEDDED.as_ref()
}

fn validate(content: &Content) -> Result<(), ContentError> {
    if let Some(name) = first_duplicate(content.projects.iter().map(|p| p.name.as_str())) {
        return Err(ContentError::DuplicateProject(name.to_owned()));
    }
    if let Some(company) = first_duplicate(content.timeline.iter().map(|e| e.company.as_str())) {
        return Err(ContentError::DuplicateCompany(company.to_owned()));
    }
    Ok(())
}

fn first_duplicate<'a>(mut keys: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    keys.find(|key| !seen.insert(*key))
}
