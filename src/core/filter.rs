//! Category and free-text filtering over the catalog

use std::fmt;

use super::catalog::{Catalog, Project};

/// Key of the "show everything" category
pub const ALL_CATEGORIES_KEY: &str = "all";

/// Label shown for the "show everything" category
pub const ALL_CATEGORIES_LABEL: &str = "Todos";

/// Selected category
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn named(category: impl Into<String>) -> Self {
        CategoryFilter::Named(category.into())
    }

    pub fn key(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_KEY,
            CategoryFilter::Named(name) => name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_LABEL,
            CategoryFilter::Named(name) => name,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => project.category == *name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-insensitive substring match on title or description.
///
/// An empty query matches every project.
pub fn matches_query(project: &Project, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    project.title.to_lowercase().contains(&needle)
        || project.description.to_lowercase().contains(&needle)
}

impl Catalog {
    /// Selectable categories: `All` first, then each distinct category in
    /// first-seen order.
    pub fn categories(&self) -> Vec<CategoryFilter> {
        let mut categories = vec![CategoryFilter::All];
        for project in self.projects() {
            if !categories
                .iter()
                .any(|c| matches!(c, CategoryFilter::Named(name) if *name == project.category))
            {
                categories.push(CategoryFilter::Named(project.category.clone()));
            }
        }
        categories
    }

    /// Positions of the projects passing both filters, in catalog order
    pub fn filter_indices(&self, category: &CategoryFilter, query: &str) -> Vec<usize> {
        self.projects()
            .iter()
            .enumerate()
            .filter(|(_, project)| category.matches(project) && matches_query(project, query))
            .map(|(index, _)| index)
            .collect()
    }

    /// Projects passing both filters, in catalog order
    pub fn filter(&self, category: &CategoryFilter, query: &str) -> Vec<&Project> {
        self.projects()
            .iter()
            .filter(|project| category.matches(project) && matches_query(project, query))
            .collect()
    }
}
