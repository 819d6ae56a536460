use crate::i18n::{Lang, Text};

#[cfg(feature = "ssr")]
use crate::form_client::FormClient;
#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use leptos::config::LeptosOptions;

/// Shared server state: the outbound form client, the Leptos options and the
/// public base URL used in the sitemap and robots file.
#[cfg(feature = "ssr")]
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub contact_form: std::sync::Arc<FormClient>,
    pub leptos_options: std::sync::Arc<LeptosOptions>,
    pub site_url: String,
}

#[cfg(feature = "ssr")]
impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.as_ref().clone()
    }
}

/// Primary classification of a project, used by the first filter row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    ComputationalPhysics,
    Simulation,
    ExperimentalResearch,
    EngineeringDesign,
    DataAnalysis,
    PlasmaPhysics,
}

impl Category {
    /// Order in which the filter buttons are laid out.
    pub const DISPLAY_ORDER: [Self; 6] = [
        Self::PlasmaPhysics,
        Self::ComputationalPhysics,
        Self::Simulation,
        Self::EngineeringDesign,
        Self::DataAnalysis,
        Self::ExperimentalResearch,
    ];

    #[must_use]
    pub const fn label(self) -> Text {
        match self {
            Self::ComputationalPhysics => {
                Text::new("Computational Physics", "Física Computacional")
            }
            Self::Simulation => Text::new("Simulation", "Simulación"),
            Self::ExperimentalResearch => {
                Text::new("Experimental Research", "Investigación Experimental")
            }
            Self::EngineeringDesign => Text::new("Engineering Design", "Diseño de Ingeniería"),
            Self::DataAnalysis => Text::new("Data Analysis", "Análisis de Datos"),
            Self::PlasmaPhysics => Text::new("Plasma Physics", "Física de plasmas"),
        }
    }
}

/// Secondary facet: what kind of artefact the project produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    Simulation,
    Experiment,
    Design,
    Paper,
}

impl ProjectKind {
    pub const DISPLAY_ORDER: [Self; 4] = [
        Self::Simulation,
        Self::Experiment,
        Self::Design,
        Self::Paper,
    ];

    #[must_use]
    pub const fn label(self) -> Text {
        match self {
            Self::Simulation => Text::new("Simulations", "Simulaciones"),
            Self::Experiment => Text::new("Experiments", "Experimentos"),
            Self::Design => Text::new("Designs", "Diseños"),
            Self::Paper => Text::new("Papers & Notes", "Artículos y Notas"),
        }
    }
}

/// A PDF reference: one document for everyone, or one per language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PdfLink {
    Single(&'static str),
    PerLang(Text),
}

impl PdfLink {
    #[must_use]
    pub const fn resolve(self, lang: Lang) -> &'static str {
        match self {
            Self::Single(url) => url,
            Self::PerLang(text) => text.get(lang),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectLinks {
    pub github: Option<&'static str>,
    pub pdf: Option<PdfLink>,
    pub website: Option<&'static str>,
}

impl ProjectLinks {
    pub const NONE: Self = Self {
        github: None,
        pdf: None,
        website: None,
    };

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.github.is_none() && self.pdf.is_none() && self.website.is_none()
    }
}

/// One portfolio item. Defined at build time and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: Text,
    pub category: Category,
    pub kind: ProjectKind,
    /// Card-level summary, one or two lines.
    pub short_description: Text,
    /// Modal-level summary; the modal falls back to `short_description`.
    pub overview: Option<Text>,
    pub image: &'static str,
    /// Larger visual for the modal; falls back to `image`.
    pub detail_image: Option<&'static str>,
    pub achievements: &'static [Text],
    pub technologies: &'static [&'static str],
    pub links: ProjectLinks,
}

impl Project {
    #[must_use]
    pub fn overview(&self) -> Text {
        self.overview.unwrap_or(self.short_description)
    }

    #[must_use]
    pub fn detail_image(&self) -> &'static str {
        self.detail_image.unwrap_or(self.image)
    }
}

/// True for absolute `http(s)://` URLs, regardless of scheme case.
#[must_use]
pub fn is_external_url(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod project_type_tests {
    use super::*;

    const BARE: Project = Project {
        id: "bare",
        title: Text::new("Bare", "Básico"),
        category: Category::Simulation,
        kind: ProjectKind::Simulation,
        short_description: Text::new("Short", "Corto"),
        overview: None,
        image: "/images/bare.png",
        detail_image: None,
        achievements: &[],
        technologies: &[],
        links: ProjectLinks::NONE,
    };

    #[test]
    fn test_overview_falls_back_to_short_description() {
        assert_eq!(BARE.overview(), Text::new("Short", "Corto"));

        let detailed = Project {
            overview: Some(Text::new("Long", "Largo")),
            ..BARE
        };
        assert_eq!(detailed.overview(), Text::new("Long", "Largo"));
    }

    #[test]
    fn test_detail_image_falls_back_to_card_image() {
        assert_eq!(BARE.detail_image(), "/images/bare.png");

        let detailed = Project {
            detail_image: Some("/images/bare-wide.png"),
            ..BARE
        };
        assert_eq!(detailed.detail_image(), "/images/bare-wide.png");
    }

    #[test]
    fn test_pdf_link_resolution() {
        let single = PdfLink::Single("/docs/report.pdf");
        assert_eq!(single.resolve(Lang::En), "/docs/report.pdf");
        assert_eq!(single.resolve(Lang::Es), "/docs/report.pdf");

        let per_lang = PdfLink::PerLang(Text::new("/docs/en.pdf", "/docs/es.pdf"));
        assert_eq!(per_lang.resolve(Lang::En), "/docs/en.pdf");
        assert_eq!(per_lang.resolve(Lang::Es), "/docs/es.pdf");
    }

    #[test]
    fn test_links_emptiness() {
        assert!(ProjectLinks::NONE.is_empty());
        assert!(ProjectLinks::default().is_empty());
        let links = ProjectLinks {
            website: Some("https://example.com"),
            ..ProjectLinks::NONE
        };
        assert!(!links.is_empty());
    }

    #[test]
    fn test_is_external_url() {
        assert!(is_external_url("https://drive.google.com/file/d/x"));
        assert!(is_external_url("http://example.com"));
        assert!(is_external_url("HTTPS://EXAMPLE.COM"));
        assert!(!is_external_url("/projects/report.pdf"));
        assert!(!is_external_url("mailto:someone@example.com"));
        assert!(!is_external_url("http"));
        assert!(!is_external_url(""));
    }

    #[test]
    fn test_display_orders_cover_every_variant() {
        assert_eq!(Category::DISPLAY_ORDER.len(), 6);
        assert_eq!(Category::DISPLAY_ORDER[0], Category::PlasmaPhysics);
        assert_eq!(ProjectKind::DISPLAY_ORDER.len(), 4);
    }

    #[test]
    fn test_labels_are_bilingual() {
        for category in Category::DISPLAY_ORDER {
            assert!(category.label().is_complete(), "{category:?}");
        }
        for kind in ProjectKind::DISPLAY_ORDER {
            assert!(kind.label().is_complete(), "{kind:?}");
        }
    }
}
