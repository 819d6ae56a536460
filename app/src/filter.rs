//! Category/type filtering for the projects grid.
//!
//! The first filter row picks a [`Category`]; the second row offers only the
//! [`ProjectKind`]s that occur within that category. Changing the category
//! drops a kind selection that would no longer match anything.

use crate::i18n::{Lang, Text};
use crate::types::{Category, Project, ProjectKind};

/// One filter slot: everything, or an exact value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facet<T> {
    All,
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Facet<T> {
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl Facet<Category> {
    #[must_use]
    pub const fn label(self) -> Text {
        match self {
            Self::All => Text::new("All Projects", "Todos"),
            Self::Only(category) => category.label(),
        }
    }
}

impl Facet<ProjectKind> {
    #[must_use]
    pub const fn label(self) -> Text {
        match self {
            Self::All => Text::new("All Types", "Todos los tipos"),
            Self::Only(kind) => kind.label(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub category: Facet<Category>,
    pub kind: Facet<ProjectKind>,
}

impl ProjectFilter {
    /// Switches the category, resetting the kind to `All` when the new
    /// category has no project of the selected kind.
    pub fn select_category(&mut self, category: Facet<Category>, projects: &[Project]) {
        self.category = category;
        if let Facet::Only(kind) = self.kind
            && !kind_options(projects, category).contains(&Facet::Only(kind))
        {
            self.kind = Facet::All;
        }
    }

    pub fn select_kind(&mut self, kind: Facet<ProjectKind>) {
        self.kind = kind;
    }

    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        self.category.matches(&project.category) && self.kind.matches(&project.kind)
    }

    /// The visible subset, in the original order.
    #[must_use]
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Category buttons: `All` followed by every category present in `projects`.
#[must_use]
pub fn category_options(projects: &[Project]) -> Vec<Facet<Category>> {
    core::iter::once(Facet::All)
        .chain(
            Category::DISPLAY_ORDER
                .into_iter()
                .filter(|category| projects.iter().any(|p| p.category == *category))
                .map(Facet::Only),
        )
        .collect()
}

/// Kind buttons for the given category: `All` followed by every kind that
/// occurs among that category's projects.
#[must_use]
pub fn kind_options(projects: &[Project], category: Facet<Category>) -> Vec<Facet<ProjectKind>> {
    core::iter::once(Facet::All)
        .chain(
            ProjectKind::DISPLAY_ORDER
                .into_iter()
                .filter(|kind| {
                    projects
                        .iter()
                        .any(|p| category.matches(&p.category) && p.kind == *kind)
                })
                .map(Facet::Only),
        )
        .collect()
}

pub const EMPTY_MESSAGE: Text = Text::new(
    "No projects found for this category.",
    "No hay proyectos para esta categoría.",
);

/// The message shown instead of the grid when `visible` is empty.
#[must_use]
pub fn empty_message(visible: &[&Project], lang: Lang) -> Option<&'static str> {
    visible.is_empty().then(|| EMPTY_MESSAGE.get(lang))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectLinks;

    const fn project(id: &'static str, category: Category, kind: ProjectKind) -> Project {
        Project {
            id,
            title: Text::same(id),
            category,
            kind,
            short_description: Text::same("summary"),
            overview: None,
            image: "/images/test.png",
            detail_image: None,
            achievements: &[],
            technologies: &[],
            links: ProjectLinks::NONE,
        }
    }

    const FIXTURE: &[Project] = &[
        project("plasma-sim", Category::PlasmaPhysics, ProjectKind::Simulation),
        project("plasma-paper", Category::PlasmaPhysics, ProjectKind::Paper),
        project("antenna", Category::EngineeringDesign, ProjectKind::Design),
        project("optics", Category::ExperimentalResearch, ProjectKind::Experiment),
        project("solver", Category::ComputationalPhysics, ProjectKind::Simulation),
    ];

    fn ids(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_filter_returns_everything() {
        let filter = ProjectFilter::default();
        assert_eq!(filter.apply(FIXTURE).len(), FIXTURE.len());
    }

    #[test]
    fn test_category_filter_is_exact_match() {
        let mut filter = ProjectFilter::default();
        filter.select_category(Facet::Only(Category::PlasmaPhysics), FIXTURE);
        assert_eq!(ids(&filter.apply(FIXTURE)), ["plasma-sim", "plasma-paper"]);
    }

    #[test]
    fn test_every_combination_equals_exact_subset() {
        for category in category_options(FIXTURE) {
            for kind in kind_options(FIXTURE, Facet::All) {
                let filter = ProjectFilter { category, kind };
                let expected: Vec<_> = FIXTURE
                    .iter()
                    .filter(|p| category.matches(&p.category) && kind.matches(&p.kind))
                    .map(|p| p.id)
                    .collect();
                assert_eq!(ids(&filter.apply(FIXTURE)), expected, "{category:?}/{kind:?}");
            }
        }
    }

    #[test]
    fn test_kind_resets_when_absent_from_new_category() {
        let mut filter = ProjectFilter::default();
        filter.select_kind(Facet::Only(ProjectKind::Paper));
        filter.select_category(Facet::Only(Category::EngineeringDesign), FIXTURE);
        assert_eq!(filter.kind, Facet::All);
        assert_eq!(ids(&filter.apply(FIXTURE)), ["antenna"]);
    }

    #[test]
    fn test_kind_survives_when_present_in_new_category() {
        let mut filter = ProjectFilter::default();
        filter.select_kind(Facet::Only(ProjectKind::Simulation));
        filter.select_category(Facet::Only(Category::ComputationalPhysics), FIXTURE);
        assert_eq!(filter.kind, Facet::Only(ProjectKind::Simulation));
        assert_eq!(ids(&filter.apply(FIXTURE)), ["solver"]);
    }

    #[test]
    fn test_category_options_follow_display_order_and_presence() {
        assert_eq!(
            category_options(FIXTURE),
            vec![
                Facet::All,
                Facet::Only(Category::PlasmaPhysics),
                Facet::Only(Category::ComputationalPhysics),
                Facet::Only(Category::EngineeringDesign),
                Facet::Only(Category::ExperimentalResearch),
            ]
        );
    }

    #[test]
    fn test_kind_options_are_scoped_to_category() {
        assert_eq!(
            kind_options(FIXTURE, Facet::Only(Category::PlasmaPhysics)),
            vec![
                Facet::All,
                Facet::Only(ProjectKind::Simulation),
                Facet::Only(ProjectKind::Paper),
            ]
        );
        assert_eq!(kind_options(FIXTURE, Facet::All).len(), 5);
    }

    #[test]
    fn test_empty_result_has_localized_message() {
        let filter = ProjectFilter {
            category: Facet::Only(Category::DataAnalysis),
            kind: Facet::All,
        };
        let visible = filter.apply(FIXTURE);
        assert!(visible.is_empty());
        assert_eq!(
            empty_message(&visible, Lang::Es),
            Some("No hay proyectos para esta categoría.")
        );

        let everything = ProjectFilter::default().apply(FIXTURE);
        assert_eq!(empty_message(&everything, Lang::En), None);
    }

    #[test]
    fn test_facet_labels() {
        assert_eq!(Facet::<Category>::All.label().get(Lang::En), "All Projects");
        assert_eq!(
            Facet::Only(Category::PlasmaPhysics).label().get(Lang::Es),
            "Física de plasmas"
        );
        assert_eq!(Facet::<ProjectKind>::All.label().get(Lang::Es), "Todos los tipos");
    }
}
