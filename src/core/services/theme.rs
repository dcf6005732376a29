use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::preferences::{PreferenceError, PreferenceStore};

pub const THEME_STORAGE_KEY: &str = "admin-theme";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Blue,
    Purple,
    Green,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Blue => "blue",
            Theme::Purple => "purple",
            Theme::Green => "green",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Blue => "Ocean",
            Theme::Purple => "Purple",
            Theme::Green => "Nature",
        }
    }

    pub fn all() -> Vec<Theme> {
        vec![
            Theme::Light,
            Theme::Dark,
            Theme::Blue,
            Theme::Purple,
            Theme::Green,
        ]
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::all()
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| ThemeParseError(s.to_string()))
    }
}

/// Reads and writes the theme preference under a fixed key.
#[derive(Debug, Clone)]
pub struct ThemeSettings<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> ThemeSettings<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, THEME_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored theme, or `Light` when nothing usable is stored.
    pub fn load(&self) -> Theme {
        match self.store.get(&self.key) {
            None => Theme::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e: ThemeParseError| {
                warn!(key = %self.key, "{}; falling back to light", e);
                Theme::default()
            }),
        }
    }

    pub fn save(&self, theme: Theme) -> Result<(), PreferenceError> {
        self.store.set(&self.key, theme.as_str())?;
        debug!(theme = %theme, "theme saved");
        Ok(())
    }
}

/// Class list changes that make `theme` the only theme class on an element.
///
/// Returns `(to_remove, to_add)`. The `dark` class doubles as the dark-mode
/// switch for the stylesheet, so it is only present for [`Theme::Dark`].
pub fn theme_classes(theme: Theme) -> (Vec<&'static str>, Vec<&'static str>) {
    let remove = Theme::all()
        .into_iter()
        .filter(|t| *t != theme)
        .map(|t| t.as_str())
        .collect();
    (remove, vec![theme.as_str()])
}

/// Applies the theme classes to `<html>` and `<body>`.
/// A mutable class list, e.g. an element's `classList`.
pub trait ClassList {
    fn add_class(&self, class: &str) -> Result<(), String>;
    fn remove_class(&self, class: &str) -> Result<(), String>;
}

impl ClassList for web_sys::DomTokenList {
    fn add_class(&self, class: &str) -> Result<(), String> {
        self.add_1(class).map_err(|e| format!("{:?}", e))
    }

    fn remove_class(&self, class: &str) -> Result<(), String> {
        self.remove_1(class).map_err(|e| format!("{:?}", e))
    }
}

/// Swaps `classes` over to `theme`. Returns how many class updates failed;
/// each failure is logged and the rest still run.
pub fn sync_theme_classes(classes: &impl ClassList, theme: Theme) -> usize {
    let (remove, add) = theme_classes(theme);
    let removed = remove.iter().map(|class| (class, classes.remove_class(class)));
    let added = add.iter().map(|class| (class, classes.add_class(class)));

    removed
        .chain(added)
        .filter_map(|(class, result)| result.err().map(|e| (class, e)))
        .inspect(|(class, e)| debug!(class = %class, "theme class update failed: {}", e))
        .count()
}

pub fn apply_theme(theme: Theme) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("no document available; theme not applied");
        return;
    };

    let targets = [
        document.document_element(),
        document.body().map(Into::into),
    ];

    for element in targets.into_iter().flatten() {
        sync_theme_classes(&element.class_list(), theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_class_only_for_dark_theme() {
        let (remove, add) = theme_classes(Theme::Dark);
        assert_eq!(add, vec!["dark"]);
        assert!(!remove.contains(&"dark"));

        let (remove, add) = theme_classes(Theme::Blue);
        assert_eq!(add, vec!["blue"]);
        assert!(remove.contains(&"dark"));
        assert!(remove.contains(&"light"));
    }

    #[derive(Default)]
    struct FakeClasses {
        classes: std::cell::RefCell<Vec<String>>,
        broken: Option<&'static str>,
    }

    impl ClassList for FakeClasses {
        fn add_class(&self, class: &str) -> Result<(), String> {
            if self.broken == Some(class) {
                return Err(format!("cannot add {class}"));
            }
            self.classes.borrow_mut().push(class.to_string());
            Ok(())
        }

        fn remove_class(&self, class: &str) -> Result<(), String> {
            if self.broken == Some(class) {
                return Err(format!("cannot remove {class}"));
            }
            self.classes.borrow_mut().retain(|c| c != class);
            Ok(())
        }
    }

    #[test]
    fn sync_replaces_previous_theme_class() {
        let list = FakeClasses::default();
        assert_eq!(sync_theme_classes(&list, Theme::Dark), 0);
        assert_eq!(sync_theme_classes(&list, Theme::Green), 0);
        assert_eq!(*list.classes.borrow(), vec!["green".to_string()]);
    }

    #[test]
    fn sync_counts_failures_and_keeps_going() {
        let list = FakeClasses {
            broken: Some("dark"),
            ..FakeClasses::default()
        };
        // Removing "dark" fails, adding "purple" still happens.
        assert_eq!(sync_theme_classes(&list, Theme::Purple), 1);
        assert_eq!(*list.classes.borrow(), vec!["purple".to_string()]);
    }

    #[test]
    fn parses_known_names_only() {
        assert_eq!("purple".parse::<Theme>(), Ok(Theme::Purple));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(ThemeParseError("sepia".to_string()))
        );
    }
}
