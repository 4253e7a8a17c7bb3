use uuid::Uuid;

use super::*;
use crate::registry::{definition, ComponentKind};

#[test]
fn default_is_empty() {
    assert!(Selection::default().current().is_none());
}

#[test]
fn select_replaces_previous() {
    let mut sel = Selection::default();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    sel.select(a);
    sel.select(b);
    assert_eq!(sel.current(), Some(b));
    assert!(!sel.is_selected(&a));
    assert!(sel.is_selected(&b));
}

#[test]
fn clear_empties_selection() {
    let mut sel = Selection::default();
    sel.select(Uuid::new_v4());
    sel.clear();
    assert!(sel.current().is_none());
}

#[test]
fn stale_id_is_accepted_but_does_not_resolve() {
    let doc = Document::new();
    let mut sel = Selection::default();
    let stale = Uuid::new_v4();
    sel.select(stale);
    assert_eq!(sel.current(), Some(stale));
    assert!(sel.resolve(&doc).is_none());
}

#[test]
fn resolve_returns_live_id() {
    let mut doc = Document::new();
    let id = doc.place(&definition(ComponentKind::Text)).id;
    let mut sel = Selection::default();
    sel.select(id);
    assert_eq!(sel.resolve(&doc), Some(id));
}

#[test]
fn forget_only_clears_matching_id() {
    let mut sel = Selection::default();
    let a = Uuid::new_v4();
    sel.select(a);
    assert!(!sel.forget(&Uuid::new_v4()));
    assert_eq!(sel.current(), Some(a));
    assert!(sel.forget(&a));
    assert!(sel.current().is_none());
}
