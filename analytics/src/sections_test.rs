use super::*;

// =============================================================
// Visibility
// =============================================================

#[test]
fn half_visible_section_counts() {
    assert!(Visibility::new("about", true, 0.5).counts_as_viewed());
    assert!(Visibility::new("about", true, 1.0).counts_as_viewed());
}

#[test]
fn ratio_just_under_threshold_counts() {
    assert!(Visibility::new("about", true, 0.495).counts_as_viewed());
}

#[test]
fn small_intersection_does_not_count() {
    assert!(!Visibility::new("about", true, 0.1).counts_as_viewed());
}

#[test]
fn leaving_section_does_not_count() {
    assert!(!Visibility::new("about", false, 0.5).counts_as_viewed());
}

#[test]
fn unnamed_section_does_not_count() {
    assert!(!Visibility::new("", true, 1.0).counts_as_viewed());
}

// =============================================================
// SectionsViewed
// =============================================================

#[test]
fn insert_reports_first_sighting_only() {
    let mut viewed = SectionsViewed::new();
    assert!(viewed.insert("about"));
    assert!(!viewed.insert("about"));
    assert!(viewed.contains("about"));
    assert_eq!(viewed.len(), 1);
}

#[test]
fn keeps_first_seen_order() {
    let mut viewed = SectionsViewed::new();
    for id in ["work", "about", "work", "contact", "about"] {
        viewed.insert(id);
    }
    assert_eq!(viewed.to_vec(), vec!["work", "about", "contact"]);
    assert_eq!(viewed.iter().collect::<Vec<_>>(), vec!["work", "about", "contact"]);
}

#[test]
fn new_set_is_empty() {
    let viewed = SectionsViewed::new();
    assert!(viewed.is_empty());
    assert!(!viewed.contains("about"));
}
