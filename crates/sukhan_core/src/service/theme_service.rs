//! Light/dark display preference use-cases.
//!
//! # Responsibility
//! - Read the persisted theme at startup.
//! - Flip and persist the theme on toggle.
//!
//! # Invariants
//! - The flag lives under [`DARK_MODE_KEY`] as `"true"` or `"false"`.
//! - Any stored value other than `"true"` reads as light.

use crate::repo::preference_repo::{PreferenceRepository, RepoResult};
use log::info;

/// Fixed preference key for the dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";
/// Class the host adds to the page body in dark mode.
pub const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle button face: the theme a click would switch to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    pub fn body_class(self) -> Option<&'static str> {
        self.is_dark().then_some(DARK_MODE_CLASS)
    }

    fn from_stored(value: Option<&str>) -> Self {
        if value == Some("true") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    fn stored_value(self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }
}

/// Theme preference service over a repository implementation.
pub struct ThemeService<R: PreferenceRepository> {
    repo: R,
}

impl<R: PreferenceRepository> ThemeService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Reads the persisted theme; unset means light.
    pub fn load_theme(&self) -> RepoResult<Theme> {
        let stored = self.repo.get(DARK_MODE_KEY)?;
        Ok(Theme::from_stored(stored.as_deref()))
    }

    pub fn set_theme(&self, theme: Theme) -> RepoResult<()> {
        self.repo.set(DARK_MODE_KEY, theme.stored_value())
    }

    /// Flips the persisted theme and returns the new value.
    pub fn toggle(&self) -> RepoResult<Theme> {
        let next = self.load_theme()?.toggled();
        self.set_theme(next)?;
        info!(
            "event=theme_toggle module=service status=ok theme={}",
            next.name()
        );
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn only_literal_true_reads_as_dark() {
        assert_eq!(Theme::from_stored(Some("true")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("TRUE")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("1")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn toggle_label_shows_opposite_theme() {
        assert_eq!(Theme::Dark.toggle_label(), "☀️");
        assert_eq!(Theme::Light.toggle_label(), "🌙");
        assert_eq!(Theme::Dark.body_class(), Some("dark-mode"));
        assert_eq!(Theme::Light.body_class(), None);
    }
}
