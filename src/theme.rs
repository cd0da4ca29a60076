// src/theme.rs
//! Dark/light display preference. Not persisted; every visit starts dark.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayModePreference {
    pub dark_mode: bool,
}

impl Default for DisplayModePreference {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl DisplayModePreference {
    pub fn toggle(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Root class selecting the style variant in styles.css.
    pub fn theme_class(self) -> &'static str {
        if self.dark_mode {
            "theme-dark"
        } else {
            "theme-light"
        }
    }

    /// The toggle shows where it will take you.
    pub fn toggle_glyph(self) -> &'static str {
        if self.dark_mode {
            "☀️"
        } else {
            "🌙"
        }
    }

    pub fn toggle_label(self) -> &'static str {
        if self.dark_mode {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_to_dark() {
        let pref = DisplayModePreference::default();
        assert!(pref.dark_mode);
        assert_eq!(pref.theme_class(), "theme-dark");
        assert_eq!(pref.toggle_glyph(), "☀️");
    }

    #[test]
    fn toggle_flips_and_double_toggle_restores() {
        for start in [true, false] {
            let mut pref = DisplayModePreference { dark_mode: start };
            pref.toggle();
            assert_eq!(pref.dark_mode, !start);
            pref.toggle();
            assert_eq!(pref.dark_mode, start);
        }
    }

    #[test]
    fn light_variant() {
        let mut pref = DisplayModePreference::default();
        pref.toggle();
        assert_eq!(pref.theme_class(), "theme-light");
        assert_eq!(pref.toggle_glyph(), "🌙");
        assert_eq!(pref.toggle_label(), "Switch to dark mode");
    }
}
