// Host-side tests for navigation highlighting.

use folio_core::nav::{active_section, SectionBox};

fn sections() -> Vec<SectionBox> {
    vec![
        SectionBox::new("summary", 600.0, 900.0),
        SectionBox::new("principles", 1500.0, 1200.0),
        SectionBox::new("experience", 2700.0, 1500.0),
    ]
}

#[test]
fn activation_offset_leads_section_top() {
    let s = SectionBox::new("summary", 600.0, 900.0);
    assert_eq!(s.activation_offset(), 100.0);
}

#[test]
fn nothing_active_above_first_section() {
    assert_eq!(active_section(0.0, &sections()), None);
    assert_eq!(active_section(99.0, &sections()), None);
}

#[test]
fn last_reached_section_wins() {
    let s = sections();
    assert_eq!(active_section(100.0, &s), Some("summary"));
    assert_eq!(active_section(900.0, &s), Some("principles"));
    assert_eq!(active_section(2000.0, &s), Some("experience"));
    assert_eq!(active_section(1e6, &s), Some("experience"));
}

#[test]
fn empty_page_has_no_active_section() {
    assert_eq!(active_section(500.0, &[]), None);
}
