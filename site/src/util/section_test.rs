use std::cell::RefCell;

use super::*;

const SECTIONS: [Section; 3] = [Section::Features, Section::Contact, Section::About];

/// In-memory document listing which element ids exist.
struct FakeDocument {
    ids: Vec<&'static str>,
    scrolled: RefCell<Vec<String>>,
}

impl FakeDocument {
    fn with(ids: &[&'static str]) -> Self {
        Self { ids: ids.to_vec(), scrolled: RefCell::new(Vec::new()) }
    }
}

impl SectionHost for FakeDocument {
    type Element = String;

    fn find(&self, id: &str) -> Option<String> {
        self.ids.iter().find(|known| **known == id).map(|id| (*id).to_owned())
    }

    fn scroll_into_view(&self, element: &String) {
        self.scrolled.borrow_mut().push(element.clone());
    }
}

#[test]
fn section_ids_match_page_anchors() {
    assert_eq!(Section::Features.id(), "features");
    assert_eq!(Section::Contact.id(), "contact");
    assert_eq!(Section::About.id(), "about");
    assert_eq!(Section::About.href(), "#about");
}

#[test]
fn section_ids_are_distinct() {
    for (i, a) in SECTIONS.iter().enumerate() {
        for b in &SECTIONS[i + 1..] {
            assert_ne!(a.id(), b.id());
        }
    }
}

#[test]
fn existing_section_is_scrolled_into_view() {
    let doc = FakeDocument::with(&["features", "contact", "about"]);
    assert!(scroll_to_section(&doc, Section::Features));
    assert!(scroll_to_section(&doc, Section::Contact));
    assert_eq!(*doc.scrolled.borrow(), vec!["features".to_owned(), "contact".to_owned()]);
}

#[test]
fn missing_section_is_silently_ignored() {
    let doc = FakeDocument::with(&["about"]);
    assert!(!scroll_to_section(&doc, Section::Features));
    assert!(!scroll_to_section(&doc, Section::Contact));
    assert!(doc.scrolled.borrow().is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn scroll_to_is_noop_outside_browser() {
    for section in SECTIONS {
        scroll_to(section);
    }
}
