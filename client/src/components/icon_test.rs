use super::*;

const ALL: [IconName; 7] = [
    IconName::Briefcase,
    IconName::Code,
    IconName::ExternalLink,
    IconName::Github,
    IconName::Globe,
    IconName::Mail,
    IconName::Phone,
];

#[test]
fn every_icon_has_closed_svg_markup() {
    for name in ALL {
        let markup = icon_markup(name);
        assert!(markup.starts_with('<'), "{name:?}");
        assert!(markup.ends_with("/>"), "{name:?}");
    }
}

#[test]
fn icon_class_uses_kebab_slug() {
    assert_eq!(icon_class(IconName::ExternalLink), "icon icon--external-link");
    assert_eq!(icon_class(IconName::Mail), "icon icon--mail");
}
