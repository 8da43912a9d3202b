//! Case-study card shown in the showcase grid

use leptos::prelude::*;

use crate::core::{Project, entrance_delay_secs, summarize_tags};
use crate::ui::icon::{Icon, icons};

/// Card for a single project; clicking it asks the parent to open the details
#[component]
pub fn ProjectCard(
    project: &'static Project,
    /// Position in the visible grid, drives the entrance stagger
    index: usize,
    on_click: Callback<()>,
) -> impl IntoView {
    let tags = summarize_tags(&project.tags);
    let delay = format!("animation-delay: {:.1}s", entrance_delay_secs(index));

    view! {
        <article
            class="showcase-card-enter group relative cursor-pointer"
            style=delay
            on:click=move |_| on_click.run(())
        >
            <div class="absolute inset-0 bg-gradient-to-b from-primary-500/20 to-accent-500/20 rounded-2xl blur-xl opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>
            <div class="relative h-full bg-dark-800/50 backdrop-blur-sm rounded-2xl overflow-hidden border border-dark-700/50 hover:border-primary-500/30 transition-all duration-300 hover:shadow-xl hover:shadow-primary-500/10">
                <div class="relative h-[400px] lg:h-[450px] overflow-hidden">
                    <img
                        src=project.image.as_str()
                        alt=project.title.as_str()
                        class="absolute inset-0 w-full h-full object-cover transform group-hover:scale-110 transition-transform duration-500"
                        loading="lazy"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-dark-900/90 via-dark-900/50 to-transparent opacity-60 group-hover:opacity-40 transition-opacity duration-300"></div>

                    // Category badge
                    <div class="absolute top-4 left-4">
                        <span class="px-3 py-1 bg-primary-500/20 border border-primary-500/30 rounded-full text-xs font-medium text-primary-400 backdrop-blur-sm">
                            {project.category.as_str()}
                        </span>
                    </div>

                    <div class="absolute bottom-4 left-4 right-4">
                        <div class="flex flex-wrap gap-2 mb-3">
                            {tags
                                .shown
                                .iter()
                                .map(|tag| view! {
                                    <span class="px-2 py-1 bg-dark-800/70 border border-dark-600/50 rounded-full text-xs text-white/80 backdrop-blur-sm">
                                        {tag.as_str()}
                                    </span>
                                })
                                .collect_view()}
                            {tags.overflow_label().map(|label| view! {
                                <span class="px-2 py-1 bg-dark-800/70 border border-dark-600/50 rounded-full text-xs text-white/60 backdrop-blur-sm">
                                    {label}
                                </span>
                            })}
                        </div>
                    </div>
                </div>

                <div class="p-6">
                    <h3 class="text-xl font-bold mb-2 group-hover:text-primary-400 transition-colors">
                        {project.title.as_str()}
                    </h3>
                    <p class="text-white/70 mb-4 line-clamp-2">{project.description.as_str()}</p>
                    // Focusable trigger; its click bubbles to the card handler
                    <button
                        type="button"
                        class="inline-flex items-center gap-2 text-primary-400 group-hover:text-accent-400 focus:outline-none focus-visible:underline transition-colors"
                        aria-label=format!("Ver detalhes de {}", project.title)
                    >
                        "Ver detalhes"
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4 group-hover:translate-x-1 transition-transform"/>
                    </button>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leak(project: Project) -> &'static Project {
        Box::leak(Box::new(project))
    }

    fn render(project: &'static Project) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let on_click = Callback::new(|_: ()| {});
            view! { <ProjectCard project=project index=0 on_click=on_click/> }.to_html()
        })
    }

    #[test]
    fn test_card_has_keyboard_focusable_trigger() {
        let html = render(leak(Project::new("Bot", "Atendimento", "Assistente Virtual")));

        assert!(html.contains("<button"));
        assert!(html.contains("type=\"button\""));
        assert!(html.contains("Ver detalhes"));
    }

    #[test]
    fn test_card_truncates_tags_with_overflow_indicator() {
        let project = Project::new("Bot", "Atendimento", "Assistente Virtual")
            .with_tags(["alpha", "beta", "gamma", "delta", "epsilon"]);
        let html = render(leak(project));

        for shown in ["alpha", "beta", "gamma"] {
            assert!(html.contains(shown), "{shown} should be on the card");
        }
        assert!(!html.contains("delta"));
        assert!(!html.contains("epsilon"));
        assert!(html.contains("+2"));
    }

    #[test]
    fn test_card_without_hidden_tags_has_no_indicator() {
        let project = Project::new("Bot", "Atendimento", "Assistente Virtual")
            .with_tags(["alpha", "beta", "gamma"]);
        let html = render(leak(project));

        assert!(html.contains("gamma"));
        assert!(!html.contains('+'));
    }
}
