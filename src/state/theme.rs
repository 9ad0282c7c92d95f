//! Theme preference structure

/// Key of the persisted theme slot
pub const THEME_KEY: &str = "theme";

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    /// Value written to the persisted slot
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret a stored value. Anything other than "dark" reads as light.
    pub fn from_stored(value: &str) -> Self {
        Self::from_dark(value == "dark")
    }
}

/// Whether the theme was chosen by the user, and which one applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreference {
    pub explicit: bool,
    pub is_dark: bool,
}

impl ThemePreference {
    /// Preference following the system setting
    pub fn system(is_dark: bool) -> Self {
        Self { explicit: false, is_dark }
    }

    /// Preference chosen by the user
    pub fn explicit(is_dark: bool) -> Self {
        Self { explicit: true, is_dark }
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.is_dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_values() {
        assert_eq!(Theme::from_stored("dark"), Theme::Dark);
        assert_eq!(Theme::from_stored("light"), Theme::Light);
        assert_eq!(Theme::from_stored("sepia"), Theme::Light);
    }

    #[test]
    fn test_preference_theme() {
        assert_eq!(ThemePreference::system(true).theme(), Theme::Dark);
        assert!(!ThemePreference::system(true).explicit);
        assert!(ThemePreference::explicit(false).explicit);
        assert_eq!(Theme::Dark.as_str(), "dark");
    }
}
