//! Not found page component
//!
//! A 404 page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::footer::BRAND_NAME;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Página não encontrada - Tellcon Systems"/>

        <div class="min-h-screen bg-dark-950 text-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-dark-800 rounded-full flex items-center justify-center">
                    <Icon name=icons::COMPASS class="w-12 h-12"/>
                </div>

                <h1 class="text-6xl font-bold mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold mb-2">"Página não encontrada"</h2>

                <p class="text-white/70 mb-8 max-w-md mx-auto">
                    "A página que você procura não existe ou foi movida."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-gradient-to-r from-primary-500 to-accent-500 text-white font-medium rounded-full transition-opacity hover:opacity-90"
                >
                    "Ver projetos"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-white/50">{BRAND_NAME}</p>
            </div>
        </div>
    }
}
