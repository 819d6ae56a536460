//! Bilingual text support.
//!
//! Every user-facing string on the site is a [`Text`] pair, and the page
//! shell owns a single [`Lang`] signal that every section reads to pick the
//! half it renders.

/// The languages the site is written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    En,
    Es,
}

impl Lang {
    pub const ALL: [Self; 2] = [Self::En, Self::Es];

    /// BCP-47 code, used for the `lang` attribute.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Label shown on the floating switch.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Es => "ES",
        }
    }
}

/// A static string in both languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Text {
    pub en: &'static str,
    pub es: &'static str,
}

impl Text {
    #[must_use]
    pub const fn new(en: &'static str, es: &'static str) -> Self {
        Self { en, es }
    }

    /// A string that reads the same in every language (names, handles).
    #[must_use]
    pub const fn same(value: &'static str) -> Self {
        Self {
            en: value,
            es: value,
        }
    }

    #[must_use]
    pub const fn get(self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.en,
            Lang::Es => self.es,
        }
    }

    /// True when both halves carry text.
    #[must_use]
    pub fn is_complete(self) -> bool {
        !self.en.trim().is_empty() && !self.es.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_defaults_to_english() {
        assert_eq!(Lang::default(), Lang::En);
    }

    #[test]
    fn test_lang_codes_and_labels() {
        assert_eq!(Lang::En.code(), "en");
        assert_eq!(Lang::Es.code(), "es");
        assert_eq!(Lang::En.label(), "EN");
        assert_eq!(Lang::Es.label(), "ES");
    }

    #[test]
    fn test_text_selects_half() {
        let text = Text::new("Projects", "Proyectos");
        assert_eq!(text.get(Lang::En), "Projects");
        assert_eq!(text.get(Lang::Es), "Proyectos");
    }

    #[test]
    fn test_same_text_is_language_invariant() {
        let text = Text::same("GitHub");
        for lang in Lang::ALL {
            assert_eq!(text.get(lang), "GitHub");
        }
    }

    #[test]
    fn test_is_complete_rejects_blank_halves() {
        assert!(Text::new("a", "b").is_complete());
        assert!(!Text::new("a", "").is_complete());
        assert!(!Text::new("  ", "b").is_complete());
    }
}
