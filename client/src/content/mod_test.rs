use super::*;

const MINIMAL: &str = r#"
profile:
  name: Ada
  headline: Engineer
  summary: Builds things.
projects:
  - name: One
    description: first
    tech: [Rust, Leptos]
    link: "https://one.test"
    featured: true
  - name: Two
    description: second
    link: "https://two.test"
  - name: Three
    description: third
    link: "https://three.test"
    featured: true
  - name: Four
    description: fourth
    link: "https://four.test"
    featured: false
timeline:
  - role: Dev
    company: Acme
    period: "2020"
    desc: Did work.
"#;

fn names(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|p| p.name.clone()).collect()
}

#[test]
fn embedded_document_loads() {
    let content = embedded().expect("embedded content should be valid");
    assert_eq!(content.profile.name, "Michael Simire");
    assert_eq!(content.skills.len(), 3);
    assert_eq!(content.projects.len(), 5);
    assert_eq!(content.timeline.len(), 3);
}

#[test]
fn embedded_contacts_mark_only_profiles_external() {
    let content = embedded().expect("embedded content should be valid");
    let external: Vec<_> = content.profile.contacts.iter().map(|c| (c.icon, c.external)).collect();
    assert_eq!(
        external,
        vec![(IconName::Mail, false), (IconName::Phone, false), (IconName::Github, true)]
    );
}

#[test]
fn missing_optional_fields_use_defaults() {
    let content = load(MINIMAL).unwrap();
    assert!(content.skills.is_empty());
    assert!(content.profile.contacts.is_empty());
    assert_eq!(content.profile.credit, "");
    assert!(!content.projects[1].featured);
    assert!(content.projects[1].tech.is_empty());
}

#[test]
fn partition_keeps_document_order_in_both_halves() {
    let content = load(MINIMAL).unwrap();
    let (featured, standard) = content.partition_projects();
    assert_eq!(names(&featured), vec!["One", "Three"]);
    assert_eq!(names(&standard), vec!["Two", "Four"]);
    assert!(featured.iter().all(|p| p.featured));
    assert!(standard.iter().all(|p| !p.featured));
}

#[test]
fn partition_of_embedded_projects() {
    let content = embedded().unwrap();
    let (featured, standard) = content.partition_projects();
    assert_eq!(names(&featured), vec!["Residence Spotter", "ServixHub"]);
    assert_eq!(names(&standard), vec!["BetaDriver", "Araxel", "Amour Zanzibar"]);
}

#[test]
fn servixhub_record_matches_document() {
    let content = embedded().unwrap();
    let servix = content.projects.iter().find(|p| p.name == "ServixHub").unwrap();
    assert!(servix.featured);
    assert_eq!(servix.tech, vec!["React", "React Router v7", "Node.js"]);
    assert_eq!(servix.link, "https://www.servixhub.com");
}

#[test]
fn skill_items_keep_order_and_duplicates() {
    let source = r#"
profile: { name: A, headline: B, summary: C }
skills:
  - title: Lang
    icon: "x"
    items: [Rust, Go, Rust]
"#;
    let content = load(source).unwrap();
    assert_eq!(content.skills[0].items, vec!["Rust", "Go", "Rust"]);
}

#[test]
fn duplicate_project_name_is_rejected() {
    let source = r#"
profile: { name: A, headline: B, summary: C }
projects:
  - { name: Same, description: a, link: "https://a.test" }
  - { name: Other, description: b, link: "https://b.test" }
  - { name: Same, description: c, link: "https://c.test" }
"#;
    let err = load(source).unwrap_err();
    assert!(matches!(err, ContentError::DuplicateProject(ref name) if name == "Same"));
}

#[test]
fn duplicate_timeline_company_is_rejected() {
    let source = r#"
profile: { name: A, headline: B, summary: C }
timeline:
  - { role: a, company: Acme, period: "1", desc: x }
  - { role: b, company: Acme, period: "2", desc: y }
"#;
    let err = load(source).unwrap_err();
    assert!(matches!(err, ContentError::DuplicateCompany(ref company) if company == "Acme"));
    assert_eq!(err.to_string(), "duplicate timeline company: Acme");
}

#[test]
fn malformed_document_is_a_parse_error() {
    let err = load("profile: [not, a, profile]").unwrap_err();
    assert!(matches!(err, ContentError::Parse(_)));
}

#[test]
fn unknown_icon_name_is_a_parse_error() {
    let source = r#"
profile:
  name: A
  headline: B
  summary: C
  contacts:
    - { href: "x", icon: fax, label: Fax }
"#;
    assert!(matches!(load(source), Err(ContentError::Parse(_))));
}
