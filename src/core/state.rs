//! Transient selection state of the project showcase.
//!
//! Every change produces a new `ShowcaseState`; the view holds the current
//! snapshot in a single signal.

use super::catalog::{Catalog, Project};
use super::filter::CategoryFilter;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ShowcaseState {
    category: CategoryFilter,
    query: String,
    /// Position in the catalog of the project shown in the detail overlay
    selected: Option<usize>,
}

impl ShowcaseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The overlay is open exactly when a project is selected
    pub fn is_detail_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn with_category(&self, category: CategoryFilter) -> Self {
        Self {
            category,
            ..self.clone()
        }
    }

    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }

    /// Select the project at `index` for the detail overlay.
    ///
    /// Positions outside the catalog leave the state unchanged.
    pub fn open(&self, catalog: &Catalog, index: usize) -> Self {
        if catalog.get(index).is_none() {
            return self.clone();
        }
        Self {
            selected: Some(index),
            ..self.clone()
        }
    }

    pub fn close(&self) -> Self {
        Self {
            selected: None,
            ..self.clone()
        }
    }

    pub fn selected_project<'a>(&self, catalog: &'a Catalog) -> Option<&'a Project> {
        self.selected.and_then(|index| catalog.get(index))
    }

    /// Catalog positions currently visible, in catalog order
    pub fn visible_indices(&self, catalog: &Catalog) -> Vec<usize> {
        catalog.filter_indices(&self.category, &self.query)
    }

    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Project> {
        catalog.filter(&self.category, &self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Project::new("One", "first", "A"),
            Project::new("Two", "second", "B"),
        ])
        .unwrap()
    }

    #[test]
    fn test_default_state() {
        let state = ShowcaseState::new();

        assert_eq!(state.category(), &CategoryFilter::All);
        assert_eq!(state.query(), "");
        assert_eq!(state.selected(), None);
        assert!(!state.is_detail_open());
    }

    #[test]
    fn test_updates_return_new_snapshots() {
        let initial = ShowcaseState::new();
        let filtered = initial.with_category(CategoryFilter::named("B"));
        let searched = filtered.with_query("sec");

        assert_eq!(initial, ShowcaseState::new());
        assert_eq!(filtered.category(), &CategoryFilter::named("B"));
        assert_eq!(filtered.query(), "");
        assert_eq!(searched.category(), &CategoryFilter::named("B"));
        assert_eq!(searched.query(), "sec");
    }

    #[test]
    fn test_open_then_close_clears_selection() {
        let catalog = catalog();
        let opened = ShowcaseState::new().open(&catalog, 1);

        assert!(opened.is_detail_open());
        assert_eq!(opened.selected_project(&catalog).unwrap().title, "Two");

        let closed = opened.close();
        assert!(!closed.is_detail_open());
        assert!(closed.selected_project(&catalog).is_none());
    }

    #[test]
    fn test_open_out_of_range_is_ignored() {
        let catalog = catalog();
        let state = ShowcaseState::new().open(&catalog, 7);

        assert!(!state.is_detail_open());
    }

    #[test]
    fn test_filters_survive_open_and_close() {
        let catalog = catalog();
        let state = ShowcaseState::new()
            .with_category(CategoryFilter::named("A"))
            .with_query("fir")
            .open(&catalog, 0)
            .close();

        assert_eq!(state.category(), &CategoryFilter::named("A"));
        assert_eq!(state.query(), "fir");
        assert_eq!(state.visible_indices(&catalog), vec![0]);
    }

    #[test]
    fn test_visible_follows_state() {
        let catalog = catalog();
        let state = ShowcaseState::new().with_query("SECOND");

        let titles: Vec<_> = state.visible(&catalog).iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Two"]);
    }
}
