//! Light/dark theme support.
//!
//! One shared `ThemeContext` owns the active theme. Consumers read it through
//! the context; the toggle control is the only writer. The preference is
//! persisted in localStorage under a fixed key and survives reloads.

pub mod theme_toggle;

pub use theme_toggle::ThemeToggle;

use leptos::prelude::*;
use web_sys::window;

/// The two display modes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme name, used for CSS hooks and as the stored preference value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other mode. Applying this twice yields the original theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle control: advertises the mode a click switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark Mode",
            Theme::Dark => "☀️ Light Mode",
        }
    }

    /// Parse a stored value. Anything other than `"dark"` (unknown or
    /// corrupted entries included) resolves to the light default.
    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

const THEME_STORAGE_KEY: &str = "theme";

/// Resolve a raw stored value. `None` means no preference was saved yet.
fn resolve_stored(value: Option<&str>) -> Theme {
    match value {
        Some(s) => {
            let theme = Theme::from_str(s);
            if theme.as_str() != s {
                log::warn!("unrecognized stored theme {:?}, falling back to light", s);
            }
            theme
        }
        None => Theme::default(),
    }
}

/// Load the persisted preference. An unavailable storage degrades to the
/// in-memory default for the session.
fn load_theme_from_storage() -> Theme {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
    resolve_stored(stored.as_deref())
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Expose the active theme to CSS via the `data-theme` attribute on `<body>`.
fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Shared theme store: one signal, one writer path.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Current theme. Reactive when read inside a tracking scope; never
    /// fails, defaulting to light when no preference exists.
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    /// Flip light↔dark, persist the new value and update the document.
    /// Total over the two-element domain: there is no failure path.
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        save_theme_to_storage(next);
        apply_theme(next);
    }
}

/// Loads the stored preference once and provides the theme store to children.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial = load_theme_from_storage();
    let theme = RwSignal::new(initial);

    apply_theme(initial);
    provide_context(ThemeContext { theme });

    children()
}

/// Theme store accessor.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_its_own_inverse() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn toggle_count_parity_determines_theme() {
        // Starting from the default: even number of toggles lands on light,
        // odd on dark.
        let mut theme = Theme::default();
        for n in 1..=10 {
            theme = theme.toggled();
            if n % 2 == 0 {
                assert_eq!(theme, Theme::Light);
            } else {
                assert_eq!(theme, Theme::Dark);
            }
        }
    }

    #[test]
    fn stored_value_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_str(theme.as_str()), theme);
        }
    }

    #[test]
    fn missing_or_corrupted_preference_falls_back_to_light() {
        assert_eq!(resolve_stored(None), Theme::Light);
        assert_eq!(resolve_stored(Some("solarized")), Theme::Light);
        assert_eq!(resolve_stored(Some("")), Theme::Light);
        assert_eq!(resolve_stored(Some("dark")), Theme::Dark);
    }

    #[test]
    fn toggle_advertises_the_target_mode() {
        assert_eq!(Theme::Light.toggle_label(), "🌙 Dark Mode");
        assert_eq!(Theme::Dark.toggle_label(), "☀️ Light Mode");
    }
}
