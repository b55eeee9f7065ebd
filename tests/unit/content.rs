use super::*;

#[test]
fn nav_items_cover_every_section_in_order() {
    let sections: Vec<SectionId> = NAV_ITEMS.iter().map(|n| n.section).collect();
    assert_eq!(sections, SectionId::ALL.to_vec());
    assert_eq!(NAV_ITEMS[1].href(), "#menu");
}

#[test]
fn section_ids_parse_with_or_without_hash() {
    assert_eq!(SectionId::from_id("#photos"), Some(SectionId::Photos));
    assert_eq!(SectionId::from_id("about"), Some(SectionId::About));
    assert_eq!(SectionId::from_id("footer"), None);
}

#[test]
fn menu_names_are_unique() {
    let mut names: Vec<&str> = MENU.iter().map(|m| m.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), MENU.len());
}

#[test]
fn footer_mentions_brand_and_year() {
    assert_eq!(footer_text(2026), "© 2026 Joe's Pizza. All rights reserved.");
}
