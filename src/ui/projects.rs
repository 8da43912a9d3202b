//! Project showcase section: category filter, search box, card grid and the
//! detail overlay.
//!
//! All interaction state lives in one `RwSignal<ShowcaseState>`; each handler
//! replaces the snapshot and the grid is derived from it. Cards are keyed by
//! catalog index, so filtering only adds and removes the cards that changed.

use leptos::prelude::*;

use crate::core::{Catalog, CategoryFilter, ShowcaseState};
use crate::ui::catalog_context::use_catalog_context;
use crate::ui::common::{Container, GradientText, Modal};
use crate::ui::icon::{Icon, icons};
use crate::ui::project_card::ProjectCard;
use crate::ui::project_details::ProjectDetails;

const CATEGORY_ACTIVE: &str = "px-4 py-2 rounded-full text-sm font-medium transition-all duration-300 bg-gradient-to-r from-primary-500 to-accent-500 text-white";
const CATEGORY_INACTIVE: &str = "px-4 py-2 rounded-full text-sm font-medium transition-all duration-300 bg-dark-800/50 text-white/70 hover:text-white border border-dark-700/50 hover:border-primary-500/30";

/// Showcase section backed by the embedded catalog
#[component]
pub fn ProjectsSection() -> impl IntoView {
    let ctx = use_catalog_context();

    view! {
        <section id="projetos" class="py-20 md:py-32 relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-dark-900 to-dark-950 -z-10"></div>
            <div class="absolute top-1/2 left-1/4 w-1/2 h-1/2 bg-primary-500/20 rounded-full blur-[96px] -z-10 animate-pulse"></div>
            <div class="absolute bottom-0 right-1/4 w-1/2 h-1/2 bg-accent-500/20 rounded-full blur-[96px] -z-10 animate-pulse" style="animation-delay: 2s"></div>

            <Container>
                <SectionHeader/>
                {match ctx.catalog {
                    Ok(catalog) => view! { <Showcase catalog=catalog/> }.into_any(),
                    Err(_) => view! {
                        <p class="text-center text-white/60">
                            "Nossos projetos estão temporariamente indisponíveis."
                        </p>
                    }
                    .into_any(),
                }}
            </Container>
        </section>
    }
}

#[component]
fn SectionHeader() -> impl IntoView {
    view! {
        <div class="showcase-reveal text-center mb-16">
            <div class="inline-flex items-center gap-2 px-6 py-3 rounded-full bg-gradient-to-r from-primary-500/10 to-accent-500/10 border border-primary-500/20 mb-8 backdrop-blur-sm">
                <span class="text-sm font-medium bg-gradient-to-r from-primary-400 to-accent-400 bg-clip-text text-transparent">
                    "Nossos Projetos"
                </span>
            </div>
            <h2 class="text-4xl md:text-5xl lg:text-6xl font-display font-bold mb-8">
                "Transformando negócios com " <GradientText>"IA sob medida"</GradientText>
            </h2>
            <p class="text-xl md:text-2xl text-white/80 max-w-4xl mx-auto leading-relaxed">
                "Conheça alguns dos nossos casos de sucesso em diferentes segmentos e como
                estamos revolucionando o mercado com soluções de IA personalizadas."
            </p>
        </div>
    }
}

#[component]
fn Showcase(catalog: &'static Catalog) -> impl IntoView {
    let state = RwSignal::new(ShowcaseState::new());
    let visible = Memo::new(move |_| state.with(|s| s.visible_indices(catalog)));

    let is_open = Signal::derive(move || state.with(|s| s.is_detail_open()));
    let title = Signal::derive(move || {
        state.with(|s| {
            s.selected_project(catalog)
                .map(|p| p.title.clone())
                .unwrap_or_default()
        })
    });
    let on_close = Callback::new(move |_| state.update(|s| *s = s.close()));

    view! {
        <div class="showcase-reveal flex flex-col md:flex-row gap-4 mb-12 justify-center items-center">
            <CategoryButtons catalog=catalog state=state/>
            <SearchBox state=state/>
        </div>

        <Show
            when=move || visible.with(|indices| !indices.is_empty())
            fallback=|| view! {
                <div class="flex flex-col items-center gap-3 py-16 text-white/60">
                    <Icon name=icons::SEARCH class="w-8 h-8"/>
                    <p>"Nenhum projeto encontrado"</p>
                </div>
            }
        >
            // Keyed by catalog index so cards that stay visible keep their DOM
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                <For
                    each=move || visible.get().into_iter().enumerate()
                    key=|(_, index)| *index
                    children=move |(position, index)| {
                        catalog.get(index).map(|project| {
                            let open = Callback::new(move |_| {
                                state.update(|s| *s = s.open(catalog, index))
                            });
                            view! { <ProjectCard project=project index=position on_click=open/> }
                        })
                    }
                />
            </div>
        </Show>

        <Modal title=title is_open=is_open on_close=on_close>
            {move || {
                state
                    .with(|s| s.selected_project(catalog))
                    .map(|project| view! { <ProjectDetails project=project/> })
            }}
        </Modal>
    }
}

#[component]
fn CategoryButtons(catalog: &'static Catalog, state: RwSignal<ShowcaseState>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap justify-center gap-2" role="group" aria-label="Filtrar por categoria">
            {catalog
                .categories()
                .into_iter()
                .map(|category| {
                    let label = category.label().to_string();
                    let active = {
                        let category = category.clone();
                        Signal::derive(move || state.with(|s| *s.category() == category))
                    };
                    view! {
                        <button
                            class=move || if active.get() { CATEGORY_ACTIVE } else { CATEGORY_INACTIVE }
                            aria-pressed=move || active.get().to_string()
                            on:click=move |_| select_category(state, category.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn select_category(state: RwSignal<ShowcaseState>, category: CategoryFilter) {
    state.update(|s| *s = s.with_category(category));
}

#[component]
fn SearchBox(state: RwSignal<ShowcaseState>) -> impl IntoView {
    view! {
        <div class="relative">
            <Icon name=icons::SEARCH class="absolute left-3 top-1/2 -translate-y-1/2 w-4 h-4"/>
            <input
                type="search"
                placeholder="Buscar projetos..."
                aria-label="Buscar projetos"
                class="pl-10 pr-4 py-2 bg-dark-800/50 border border-dark-700/50 rounded-full text-white placeholder:text-white/50 focus:outline-none focus:border-primary-500/50 transition-colors"
                prop:value=move || state.with(|s| s.query().to_string())
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    state.update(|s| *s = s.with_query(query));
                }
            />
        </div>
    }
}
