use std::cell::RefCell;

use webstore_ui::storage::{MemoryStore, PreferenceStore};
use webstore_ui::theme::{Theme, ThemeManager, ThemeRoot, STORAGE_KEY};

/// Stand-in for `<html>` that records its class list.
#[derive(Default)]
struct FakeRoot {
    classes: RefCell<Vec<String>>,
}

impl FakeRoot {
    fn with_classes(classes: &[&str]) -> Self {
        Self {
            classes: RefCell::new(classes.iter().map(|c| c.to_string()).collect()),
        }
    }

    fn classes(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }

    fn theme_classes(&self) -> Vec<String> {
        self.classes()
            .into_iter()
            .filter(|c| c.ends_with("-theme"))
            .collect()
    }
}

impl ThemeRoot for &FakeRoot {
    fn add_class(&self, class: &str) {
        let mut classes = self.classes.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().retain(|c| c != class);
    }
}

#[test]
fn test_init_defaults_to_dark_when_nothing_saved() {
    let store = MemoryStore::new();
    let root = FakeRoot::default();
    let manager = ThemeManager::init(&store, &root);

    assert_eq!(manager.current(), Theme::Dark);
    assert_eq!(root.theme_classes(), vec!["dark-theme"]);
    assert_eq!(store.get(STORAGE_KEY), None, "init alone should not write a preference");
}

#[test]
fn test_selection_applies_exactly_one_class_and_persists() {
    for theme in Theme::ALL {
        let store = MemoryStore::new();
        let root = FakeRoot::default();
        let mut manager = ThemeManager::init(&store, &root);

        manager.select(theme.as_str());

        assert_eq!(root.theme_classes(), vec![theme.class_name()]);
        assert_eq!(store.get(STORAGE_KEY).as_deref(), Some(theme.as_str()));
        assert_eq!(manager.current(), theme);
    }
}

#[test]
fn test_reselecting_same_theme_is_idempotent() {
    let store = MemoryStore::new();
    let root = FakeRoot::default();
    let mut manager = ThemeManager::init(&store, &root);

    manager.select("light");
    let classes_once = root.classes();
    let stored_once = store.get(STORAGE_KEY);

    manager.select("light");
    assert_eq!(root.classes(), classes_once);
    assert_eq!(store.get(STORAGE_KEY), stored_once);
}

#[test]
fn test_light_survives_reload() {
    let store = MemoryStore::new();
    {
        let root = FakeRoot::default();
        let mut manager = ThemeManager::init(&store, &root);
        manager.select("light");
    }

    let reloaded = FakeRoot::default();
    let manager = ThemeManager::init(&store, &reloaded);
    assert_eq!(manager.current(), Theme::Light);
    assert_eq!(reloaded.theme_classes(), vec!["light-theme"]);
}

#[test]
fn test_stale_and_legacy_classes_are_removed_on_init() {
    let store = MemoryStore::new().with_entry(STORAGE_KEY, "light");
    let root = FakeRoot::with_classes(&["dark-theme", "default-theme", "page"]);
    ThemeManager::init(&store, &root);

    assert_eq!(root.classes(), vec!["page", "light-theme"]);
}

#[test]
fn test_legacy_default_preference_is_normalized() {
    let store = MemoryStore::new().with_entry(STORAGE_KEY, "default");
    let root = FakeRoot::default();
    let manager = ThemeManager::init(&store, &root);

    assert_eq!(manager.current(), Theme::Dark);
    assert_eq!(root.theme_classes(), vec!["dark-theme"]);
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn test_unknown_control_value_falls_back_to_dark() {
    let store = MemoryStore::new();
    let root = FakeRoot::default();
    let mut manager = ThemeManager::init(&store, &root);

    manager.select("light");
    assert_eq!(manager.select("sepia"), Theme::Dark);
    assert_eq!(root.theme_classes(), vec!["dark-theme"]);
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn test_unwritable_storage_still_switches_theme() {
    let store = MemoryStore::read_only();
    let root = FakeRoot::default();
    let mut manager = ThemeManager::init(&store, &root);

    manager.select("light");
    assert_eq!(manager.current(), Theme::Light);
    assert_eq!(root.theme_classes(), vec!["light-theme"]);
    assert_eq!(store.get(STORAGE_KEY), None);
}
