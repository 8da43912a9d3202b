//! Project catalog: the fixed, ordered list of case studies shown on the site.
//!
//! The catalog ships inside the binary (`data/projects.json`) and is parsed and
//! validated at most once per process. Nothing mutates it after that.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

const EMBEDDED_CATALOG: &str = include_str!("../../data/projects.json");

static EMBEDDED: LazyLock<Result<Catalog, CatalogError>> =
    LazyLock::new(|| Catalog::from_json(EMBEDDED_CATALOG));

/// A single case study
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Project {
    /// Unique within the catalog, also used as the rendering key
    pub title: String,
    pub description: String,
    /// Site-root relative path of the cover image
    pub image: String,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ProjectDetails>,
}

impl Project {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image: String::new(),
            category: category.into(),
            tags: Vec::new(),
            details: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_details(mut self, details: ProjectDetails) -> Self {
        self.details = Some(details);
        self
    }
}

/// Extended content shown in the detail overlay
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ProjectDetails {
    pub overview: String,
    pub features: Vec<String>,
    pub benefits: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<Metric>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<WorkflowExample>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrations: Option<Vec<String>>,
}

impl ProjectDetails {
    pub fn new(overview: impl Into<String>) -> Self {
        Self {
            overview: overview.into(),
            features: Vec::new(),
            benefits: Vec::new(),
            metrics: None,
            examples: None,
            integrations: None,
        }
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_benefits<I, S>(mut self, benefits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.benefits = benefits.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_metrics(mut self, metrics: Vec<Metric>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn with_examples(mut self, examples: Vec<WorkflowExample>) -> Self {
        self.examples = Some(examples);
        self
    }

    pub fn with_integrations<I, S>(mut self, integrations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.integrations = Some(integrations.into_iter().map(Into::into).collect());
        self
    }
}

/// Headline result, e.g. `ROI` / `+150%` / `aumento médio`
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub improvement: String,
}

impl Metric {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        improvement: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            improvement: improvement.into(),
        }
    }
}

/// A worked example of the agent's workflow
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct WorkflowExample {
    pub title: String,
    pub steps: Vec<String>,
}

impl WorkflowExample {
    pub fn new<I, S>(title: impl Into<String>, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }

    /// Steps paired with their 1-based display number
    pub fn numbered_steps(&self) -> impl Iterator<Item = (usize, &str)> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| (i + 1, step.as_str()))
    }
}

/// Catalog loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog data is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Project at position {index} has an empty title")]
    EmptyTitle { index: usize },

    #[error("Duplicate project title: {title}")]
    DuplicateTitle { title: String },
}

/// Validated, read-only sequence of projects
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or repeated titles.
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());

        for (index, project) in projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle { index });
            }
            if !seen.insert(project.title.as_str()) {
                return Err(CatalogError::DuplicateTitle {
                    title: project.title.clone(),
                });
            }
        }

        Ok(Self { projects })
    }

    /// Parse a JSON array of projects
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Self::new(projects)
    }

    /// The catalog compiled into the site
    pub fn embedded() -> Result<&'static Catalog, &'static CatalogError> {
        EMBEDDED.as_ref()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    /// Position of the project with the given title
    pub fn position(&self, title: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.title == title)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str) -> Project {
        Project::new(title, "desc", "Cat")
    }

    #[test]
    fn test_new_accepts_unique_titles() {
        let catalog = Catalog::new(vec![project("A"), project("B")]).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().title, "B");
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn test_new_rejects_duplicate_title() {
        let result = Catalog::new(vec![project("A"), project("B"), project("A")]);

        match result {
            Err(CatalogError::DuplicateTitle { title }) => assert_eq!(title, "A"),
            other => panic!("expected duplicate title error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_blank_title() {
        let result = Catalog::new(vec![project("A"), project("   ")]);

        assert!(matches!(result, Err(CatalogError::EmptyTitle { index: 1 })));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_from_json_optional_sections() {
        let json = r#"[
            {
                "title": "Bot",
                "description": "Atendimento",
                "image": "/bot.png",
                "category": "Assistente Virtual",
                "tags": [],
                "details": {
                    "overview": "Resumo",
                    "features": ["F1"],
                    "benefits": []
                }
            },
            {
                "title": "Plain",
                "description": "Sem detalhes",
                "image": "/plain.png",
                "category": "Outros",
                "tags": ["x"]
            }
        ]"#;

        let catalog = Catalog::from_json(json).unwrap();
        let details = catalog.get(0).unwrap().details.as_ref().unwrap();

        assert_eq!(details.features, vec!["F1".to_string()]);
        assert!(details.benefits.is_empty());
        assert!(details.metrics.is_none());
        assert!(details.examples.is_none());
        assert!(details.integrations.is_none());
        assert!(catalog.get(1).unwrap().details.is_none());
    }

    #[test]
    fn test_from_json_requires_tags() {
        let json = r#"[{"title": "A", "description": "d", "image": "/a.png", "category": "C"}]"#;

        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_from_json_requires_features_when_details_present() {
        let json = r#"[{
            "title": "A", "description": "d", "image": "/a.png", "category": "C", "tags": [],
            "details": { "overview": "o", "benefits": [] }
        }]"#;

        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("Catalog data is malformed"));
    }

    #[test]
    fn test_position_by_title() {
        let catalog = Catalog::new(vec![project("A"), project("B")]).unwrap();

        assert_eq!(catalog.position("B"), Some(1));
        assert_eq!(catalog.position("b"), None);
    }

    #[test]
    fn test_numbered_steps_start_at_one() {
        let example = WorkflowExample::new("Fluxo", ["primeiro", "segundo"]);
        let steps: Vec<_> = example.numbered_steps().collect();

        assert_eq!(steps, vec![(1, "primeiro"), (2, "segundo")]);
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().expect("embedded catalog should be valid");
        assert_eq!(catalog.len(), 5);
    }
}
