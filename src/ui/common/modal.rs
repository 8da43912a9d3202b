use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Class marking the overlay backdrop; clicks landing on it close the modal
const BACKDROP_CLASS: &str = "modal-backdrop";

/// Overlay dialog used for project details
#[component]
pub fn Modal(
    /// Header title
    title: Signal<String>,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class
    #[prop(default = "max-w-4xl")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    // Keep the page behind the overlay from scrolling
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            let open = is_open.get();
            if let Some(body) = leptos::web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                let classes = body.class_list();
                let toggled = if open {
                    classes.add_1("overflow-hidden")
                } else {
                    classes.remove_1("overflow-hidden")
                };
                if let Err(err) = toggled {
                    leptos::logging::warn!("Failed to toggle page scroll lock: {:?}", err);
                }
            }
        });
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    format!("{BACKDROP_CLASS} fixed inset-0 z-50 flex items-center justify-center p-4 bg-dark-950/80 backdrop-blur-sm transition-all duration-300")
                } else {
                    format!("{BACKDROP_CLASS} fixed inset-0 z-50 flex items-center justify-center p-4 bg-dark-950/80 backdrop-blur-sm opacity-0 pointer-events-none transition-all duration-300")
                }
            }
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    if let Some(target) = e.target() {
                        if let Some(element) = target.dyn_ref::<leptos::web_sys::Element>() {
                            if element.class_list().contains(BACKDROP_CLASS) {
                                on_close.run(());
                            }
                        }
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = e;
                }
            }
        >
            <div class=move || {
                let motion = if is_open.get() { "modal-panel-open" } else { "modal-panel-closed" };
                format!("modal-panel {} w-full {} max-h-[90vh] overflow-y-auto bg-dark-900 border border-dark-700/50 rounded-2xl shadow-2xl", motion, max_width)
            }>
                // Header
                <div class="sticky top-0 z-10 flex items-center justify-between gap-4 px-6 py-4 bg-dark-900/95 border-b border-dark-800/50 backdrop-blur-sm">
                    <h3 class="text-2xl font-display font-bold">{move || title.get()}</h3>
                    <button
                        class="p-2 rounded-full hover:bg-dark-800 transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Fechar"
                        aria-label="Fechar detalhes"
                    >
                        <Icon name=icons::X class="w-5 h-5"/>
                    </button>
                </div>

                // Content
                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}
