//! What the card and the detail overlay show for a project, independent of markup

use super::catalog::{Metric, ProjectDetails, WorkflowExample};

/// Tags displayed on a card before collapsing into "+N"
pub const MAX_CARD_TAGS: usize = 3;

/// Per-card stagger of the entrance animation, in seconds
const CARD_STAGGER_SECS: f64 = 0.1;

/// Tags shown on a card plus the count hidden behind the overflow indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSummary<'a> {
    pub shown: &'a [String],
    pub overflow: Option<usize>,
}

impl TagSummary<'_> {
    /// Overflow indicator text, e.g. `+2`
    pub fn overflow_label(&self) -> Option<String> {
        self.overflow.map(|n| format!("+{}", n))
    }
}

pub fn summarize_tags(tags: &[String]) -> TagSummary<'_> {
    let shown = &tags[..tags.len().min(MAX_CARD_TAGS)];
    let overflow = tags.len().checked_sub(MAX_CARD_TAGS).filter(|n| *n > 0);
    TagSummary { shown, overflow }
}

/// Entrance animation delay for the card at `position` in the visible grid
pub fn entrance_delay_secs(position: usize) -> f64 {
    position as f64 * CARD_STAGGER_SECS
}

/// One block of the detail overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailSection<'a> {
    Overview(&'a str),
    Metrics(&'a [Metric]),
    FeaturesAndBenefits {
        features: &'a [String],
        benefits: &'a [String],
    },
    Examples(&'a [WorkflowExample]),
    Integrations(&'a [String]),
}

impl DetailSection<'_> {
    pub fn heading(&self) -> &'static str {
        match self {
            DetailSection::Overview(_) => "Visão Geral",
            DetailSection::Metrics(_) => "Resultados Comprovados",
            DetailSection::FeaturesAndBenefits { .. } => "Funcionalidades",
            DetailSection::Examples(_) => "Exemplo de Fluxo de Trabalho",
            DetailSection::Integrations(_) => "Integrações",
        }
    }
}

/// Sections in display order; absent optional blocks are left out.
pub fn detail_sections(details: &ProjectDetails) -> Vec<DetailSection<'_>> {
    let mut sections = vec![DetailSection::Overview(&details.overview)];

    if let Some(metrics) = &details.metrics {
        sections.push(DetailSection::Metrics(metrics));
    }

    sections.push(DetailSection::FeaturesAndBenefits {
        features: &details.features,
        benefits: &details.benefits,
    });

    if let Some(examples) = &details.examples {
        sections.push(DetailSection::Examples(examples));
    }
    if let Some(integrations) = &details.integrations {
        sections.push(DetailSection::Integrations(integrations));
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("tag{}", i)).collect()
    }

    #[test]
    fn test_summarize_tags_without_overflow() {
        for n in 0..=3 {
            let tags = tags(n);
            let summary = summarize_tags(&tags);

            assert_eq!(summary.shown.len(), n);
            assert_eq!(summary.overflow, None);
            assert_eq!(summary.overflow_label(), None);
        }
    }

    #[test]
    fn test_summarize_tags_with_overflow() {
        let tags = tags(5);
        let summary = summarize_tags(&tags);

        assert_eq!(summary.shown, &tags[..3]);
        assert_eq!(summary.overflow, Some(2));
        assert_eq!(summary.overflow_label().as_deref(), Some("+2"));
    }

    #[test]
    fn test_entrance_delay_staggers_by_position() {
        assert_eq!(entrance_delay_secs(0), 0.0);
        assert!((entrance_delay_secs(3) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_full_details_section_order() {
        let details = ProjectDetails::new("overview")
            .with_features(["f"])
            .with_benefits(["b"])
            .with_metrics(vec![Metric::new("ROI", "+150%", "aumento")])
            .with_examples(vec![WorkflowExample::new("Fluxo", ["s1", "s2"])])
            .with_integrations(["CRM"]);

        let headings: Vec<_> = detail_sections(&details).iter().map(|s| s.heading()).collect();

        assert_eq!(
            headings,
            vec![
                "Visão Geral",
                "Resultados Comprovados",
                "Funcionalidades",
                "Exemplo de Fluxo de Trabalho",
                "Integrações",
            ]
        );
    }

    #[test]
    fn test_minimal_details_keep_required_sections() {
        let details = ProjectDetails::new("only overview");
        let sections = detail_sections(&details);

        assert_eq!(
            sections,
            vec![
                DetailSection::Overview("only overview"),
                DetailSection::FeaturesAndBenefits {
                    features: &[],
                    benefits: &[],
                },
            ]
        );
    }

    #[test]
    fn test_empty_integrations_list_is_still_a_section() {
        let details = ProjectDetails::new("o").with_integrations(Vec::<String>::new());
        let sections = detail_sections(&details);

        assert!(matches!(sections.last(), Some(DetailSection::Integrations(list)) if list.is_empty()));
    }
}
