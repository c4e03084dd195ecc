use super::*;
use crate::kernel::services::ports::SearchConfig;
use crate::models::TextBuffer;
use std::cell::RefCell;
use std::rc::Rc;

fn controller(text: &str) -> SearchController {
    let buffer = Rc::new(RefCell::new(TextBuffer::from_text(text)));
    SearchController::new(buffer, SearchConfig::default())
}

#[test]
fn test_register_and_lookup() {
    let mut registry = ControllerRegistry::new();
    assert!(registry.is_empty());

    let a = registry.register("a.rs", controller("fn a() {}"));
    let b = registry.register("b.rs", controller("fn b() {}"));

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.find("a.rs"), Some(a));
    assert_eq!(registry.find("b.rs"), Some(b));
    assert_eq!(registry.find("c.rs"), None);
}

#[test]
fn test_controllers_are_independent() {
    let mut registry = ControllerRegistry::new();
    let a = registry.register("a.rs", controller("foo\nbar"));
    let b = registry.register("b.rs", controller("foo\nbar"));

    registry.get_mut(a).unwrap().set_term("foo");

    assert_eq!(registry.get(a).unwrap().target_text(), "foo");
    assert_eq!(registry.get(b).unwrap().target_text(), "");
}

#[test]
fn test_register_same_name_replaces() {
    let mut registry = ControllerRegistry::new();
    let old = registry.register("a.rs", controller("one"));
    let new = registry.register("a.rs", controller("two"));

    assert_eq!(registry.len(), 1);
    assert!(registry.get(old).is_none());
    assert_eq!(registry.find("a.rs"), Some(new));
}

#[test]
fn test_remove_unbinds_name() {
    let mut registry = ControllerRegistry::new();
    let id = registry.register("a.rs", controller("one"));

    assert!(registry.remove(id).is_some());
    assert!(registry.remove(id).is_none());
    assert_eq!(registry.find("a.rs"), None);
    assert!(registry.is_empty());
}
