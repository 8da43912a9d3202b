//! Detail view rendered inside the project overlay

use leptos::prelude::*;

use crate::core::{DetailSection, Metric, Project, WorkflowExample, detail_sections};

#[component]
pub fn ProjectDetails(project: &'static Project) -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div class="relative h-[300px] rounded-xl overflow-hidden">
                <img
                    src=project.image.as_str()
                    alt=project.title.as_str()
                    class="absolute inset-0 w-full h-full object-cover"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-dark-900/90 via-dark-900/50 to-transparent"></div>
                <div class="absolute bottom-4 left-4 right-4">
                    <div class="flex flex-wrap gap-2">
                        {project
                            .tags
                            .iter()
                            .map(|tag| view! {
                                <span class="px-3 py-1 bg-primary-500/20 border border-primary-500/30 rounded-full text-xs font-medium text-primary-400">
                                    {tag.as_str()}
                                </span>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            {project.details.as_ref().map(|details| {
                detail_sections(details)
                    .into_iter()
                    .map(|section| view! { <Section section=section/> })
                    .collect_view()
            })}
        </div>
    }
}

#[component]
fn Section(section: DetailSection<'static>) -> impl IntoView {
    let heading = section.heading();

    match section {
        DetailSection::Overview(overview) => view! {
            <div>
                <h4 class="text-lg font-semibold mb-3">{heading}</h4>
                <p class="text-white/80 leading-relaxed">{overview}</p>
            </div>
        }
        .into_any(),
        DetailSection::Metrics(metrics) => view! {
            <div>
                <h4 class="text-lg font-semibold mb-4">{heading}</h4>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {metrics.iter().map(|metric| view! { <MetricTile metric=metric/> }).collect_view()}
                </div>
            </div>
        }
        .into_any(),
        DetailSection::FeaturesAndBenefits { features, benefits } => view! {
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                <BulletList heading=heading items=features accent=BulletAccent::Primary/>
                <BulletList heading="Benefícios" items=benefits accent=BulletAccent::Accent/>
            </div>
        }
        .into_any(),
        DetailSection::Examples(examples) => view! {
            <div>
                <h4 class="text-lg font-semibold mb-4">{heading}</h4>
                <div class="space-y-4">
                    {examples.iter().map(|example| view! { <ExampleFlow example=example/> }).collect_view()}
                </div>
            </div>
        }
        .into_any(),
        DetailSection::Integrations(integrations) => view! {
            <div>
                <h4 class="text-lg font-semibold mb-4">{heading}</h4>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {integrations
                        .iter()
                        .map(|integration| view! {
                            <div class="bg-dark-800/50 rounded-lg p-3 text-center text-white/80 border border-dark-700/50 hover:border-primary-500/30 transition-colors">
                                {integration.as_str()}
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn MetricTile(metric: &'static Metric) -> impl IntoView {
    view! {
        <div class="bg-dark-800/50 rounded-xl p-4 border border-dark-700/50 text-center">
            <div class="text-2xl font-bold text-primary-400 mb-1">{metric.value.as_str()}</div>
            <div class="text-sm font-medium mb-1">{metric.label.as_str()}</div>
            <div class="text-xs text-white/60">{metric.improvement.as_str()}</div>
        </div>
    }
}

#[derive(Clone, Copy)]
enum BulletAccent {
    Primary,
    Accent,
}

impl BulletAccent {
    fn ring_class(self) -> &'static str {
        match self {
            BulletAccent::Primary => "flex-shrink-0 w-6 h-6 rounded-full bg-primary-500/20 flex items-center justify-center mt-0.5",
            BulletAccent::Accent => "flex-shrink-0 w-6 h-6 rounded-full bg-accent-500/20 flex items-center justify-center mt-0.5",
        }
    }

    fn dot_class(self) -> &'static str {
        match self {
            BulletAccent::Primary => "w-2 h-2 rounded-full bg-primary-400",
            BulletAccent::Accent => "w-2 h-2 rounded-full bg-accent-400",
        }
    }
}

#[component]
fn BulletList(
    heading: &'static str,
    items: &'static [String],
    accent: BulletAccent,
) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-lg font-semibold mb-4">{heading}</h4>
            <div class="space-y-3">
                {items
                    .iter()
                    .map(|item| view! {
                        <div class="flex items-start gap-3">
                            <div class=accent.ring_class()>
                                <div class=accent.dot_class()></div>
                            </div>
                            <p class="text-white/80">{item.as_str()}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ExampleFlow(example: &'static WorkflowExample) -> impl IntoView {
    view! {
        <div class="bg-dark-800/50 rounded-xl p-6 border border-dark-700/50">
            <h5 class="text-lg font-medium mb-4">{example.title.as_str()}</h5>
            <ol class="space-y-4">
                {example
                    .numbered_steps()
                    .map(|(number, step)| view! {
                        <li class="flex items-start gap-3">
                            <div class="flex-shrink-0 w-8 h-8 rounded-full bg-gradient-to-r from-primary-500 to-accent-500 flex items-center justify-center text-sm font-bold">
                                {number}
                            </div>
                            <p class="text-white/80 pt-1">{step}</p>
                        </li>
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProjectDetails as Details;

    fn render(project: Project) -> String {
        let project: &'static Project = Box::leak(Box::new(project));
        let owner = Owner::new();
        owner.with(|| view! { <ProjectDetails project=project/> }.to_html())
    }

    #[test]
    fn test_without_details_only_image_and_tags() {
        let html = render(Project::new("Bot", "Atendimento", "Assistente Virtual").with_tags(["Voz"]));

        assert!(html.contains("<img"));
        assert!(html.contains("Voz"));
        assert!(!html.contains("<h4"));
    }

    #[test]
    fn test_header_shows_every_tag() {
        let html = render(
            Project::new("Bot", "Atendimento", "Assistente Virtual")
                .with_tags(["alpha", "beta", "gamma", "delta", "epsilon"]),
        );

        for tag in ["alpha", "beta", "gamma", "delta", "epsilon"] {
            assert!(html.contains(tag), "{tag} missing from details header");
        }
        assert!(!html.contains("+2"));
    }

    #[test]
    fn test_missing_integrations_omits_section() {
        let details = Details::new("Resumo do agente")
            .with_features(["Agendamento"])
            .with_benefits(["Disponibilidade"]);
        let html = render(Project::new("Bot", "Atendimento", "Assistente Virtual").with_details(details));

        assert!(html.contains("Visão Geral"));
        assert!(html.contains("Resumo do agente"));
        assert!(html.contains("Funcionalidades"));
        assert!(html.contains("Benefícios"));
        assert!(!html.contains("Integrações"));
        assert!(!html.contains("Resultados Comprovados"));
    }

    #[test]
    fn test_workflow_steps_are_numbered_in_order() {
        let details = Details::new("o")
            .with_examples(vec![WorkflowExample::new("Fluxo", ["primeiro passo", "segundo passo"])]);
        let html = render(Project::new("Bot", "d", "c").with_details(details));

        let first = html.find("primeiro passo").unwrap();
        let second = html.find("segundo passo").unwrap();
        assert!(first < second);
        assert!(html.contains("Exemplo de Fluxo de Trabalho"));
    }
}
