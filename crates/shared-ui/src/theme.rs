use dioxus::prelude::*;

/// Colour scheme of the portal. Resolves to the `data-theme` attribute on
/// the document root, which the stylesheet keys its variables on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Label for the navbar toggle, naming the mode a click switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Dark Mode",
            ThemeMode::Dark => "Light Mode",
        }
    }
}

/// Shared theme state provided as context.
///
/// The navbar toggle and the settings preferences card both write the same
/// signal, so the two controls never disagree.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            is_dark: Signal::new(false),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(*self.is_dark.read())
    }

    pub fn set_dark(&mut self, dark: bool) {
        self.is_dark.set(dark);
        apply_theme(self.mode());
    }

    pub fn toggle(&mut self) {
        let dark = !*self.is_dark.read();
        self.set_dark(dark);
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the initial theme once the document is ready. Mount it once at
/// the root of the app.
#[component]
pub fn ThemeSeed() -> Element {
    let theme = use_context::<ThemeState>();
    use_effect(move || apply_theme(theme.mode()));

    rsx! {}
}

/// Writes the mode onto `<html data-theme>`. Nothing is persisted; a reload
/// starts in light mode.
pub fn apply_theme(mode: ThemeMode) {
    document::eval(&format!(
        "document.documentElement.setAttribute('data-theme', '{}');",
        mode.as_str()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert!(!ThemeMode::default().is_dark());
    }

    #[test]
    fn from_dark_maps_flag() {
        assert_eq!(ThemeMode::from_dark(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_dark(false), ThemeMode::Light);
    }

    #[test]
    fn attribute_values() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn toggle_label_names_the_other_mode() {
        assert_eq!(ThemeMode::Light.toggle_label(), "Dark Mode");
        assert_eq!(ThemeMode::Dark.toggle_label(), "Light Mode");
    }
}
