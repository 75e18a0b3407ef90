//! Portfolio content records.
//!
//! DESIGN
//! ======
//! Plain immutable values deserialized once from the content document. Nothing
//! here is mutated after load; components receive clones of the slices they
//! render.

use serde::Deserialize;

/// Full page content: identity, skills, projects, and career history.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

impl Content {
    /// Split projects into `(featured, standard)`, keeping document order in
    /// each half.
    #[must_use]
    pub fn partition_projects(&self) -> (Vec<&Project>, Vec<&Project>) {
        self.projects.iter().partition(|project| project.featured)
    }
}

/// Identity block shown in the hero and footer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    /// Trailing footer text after the copyright owner.
    #[serde(default)]
    pub credit: String,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

/// One contact channel (`mailto:`, `tel:`, or an external profile URL).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub href: String,
    pub icon: IconName,
    pub label: String,
    /// External links open in a new browsing context.
    #[serde(default)]
    pub external: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub icon: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    /// Opaque outbound URL; never parsed or checked.
    pub link: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TimelineEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub desc: String,
}

/// Named vector icons available to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    Briefcase,
    Code,
    ExternalLink,
    Github,
    Globe,
    Mail,
    Phone,
}
