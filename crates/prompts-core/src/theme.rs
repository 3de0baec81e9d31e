//! Forced dark theme.
//!
//! The site has exactly one visual mode. A [`ThemeInitializer`] is mounted once
//! per view tree and marks the tree's [`DocumentRoot`] with the `dark` class.
//! There is no toggle and no teardown: the marker stays after the initializer
//! is gone.

use serde::Serialize;
use tracing::debug;

/// Class applied to the document root when the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Theme marker carried by a [`DocumentRoot`]. `Dark` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeState {
    #[default]
    Unthemed,
    Dark,
}

/// In-memory stand-in for the `<html>` element of a rendered view tree.
///
/// Only the class list is modelled; classes keep insertion order and are
/// never duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    classes: Vec<String>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut root = Self::new();
        for class in classes {
            root.add_class(class);
        }
        root
    }

    /// Adds `class` unless already present. Returns whether the list changed.
    pub fn add_class(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if class.is_empty() || self.has_class(&class) {
            return false;
        }
        self.classes.push(class);
        true
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Value for the `class` attribute of the root element.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// Theme marker currently carried by the root.
    pub fn theme(&self) -> ThemeState {
        if self.has_class(DARK_CLASS) {
            ThemeState::Dark
        } else {
            ThemeState::Unthemed
        }
    }
}

/// One-shot initializer that forces the dark theme on mount.
///
/// `mount` consumes the initializer, so each initializer marks exactly one
/// view tree and a mount always leaves that tree `Dark`.
#[derive(Debug, Default)]
pub struct ThemeInitializer {
    _private: (),
}

impl ThemeInitializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the dark marker to `root`. A root that is already dark is
    /// left unchanged.
    pub fn mount(self, root: &mut DocumentRoot) {
        let applied = root.add_class(DARK_CLASS);
        debug!(applied, "theme initializer mounted");
    }
}
