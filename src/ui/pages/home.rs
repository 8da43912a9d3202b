//! Home page
//!
//! Composes the case-study showcase and the footer, plus the entrance
//! animations used by both.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::footer::Footer;
use crate::ui::projects::ProjectsSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Tellcon Systems - Agentes de IA sob medida"/>
        <Meta
            name="description"
            content="Casos de sucesso da Tellcon Systems: agentes de IA para clínicas, marketing, atendimento e vendas."
        />

        <ShowcaseStyles/>

        <div class="min-h-screen bg-dark-950 text-white overflow-x-hidden">
            <ProjectsSection/>
            <Footer/>
        </div>

        <ScrollRevealScript/>
    }
}

/// CSS for the card stagger, section reveal and overlay transitions
#[component]
fn ShowcaseStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            @keyframes showcase-fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(50px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            /* Cards: delay is set inline per grid position */
            .showcase-card-enter {
                opacity: 0;
                animation: showcase-fade-in-up 0.6s ease-out forwards;
            }

            /* Section blocks revealed once scrolled into view */
            .showcase-reveal {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.8s ease-out, transform 0.8s ease-out;
            }

            .showcase-reveal.visible {
                opacity: 1;
                transform: translateY(0);
            }

            /* Detail overlay */
            .modal-panel {
                transition: opacity 0.3s ease-out, transform 0.3s ease-out;
            }

            .modal-panel-closed {
                opacity: 0;
                transform: scale(0.95) translateY(20px);
            }

            .modal-panel-open {
                opacity: 1;
                transform: scale(1) translateY(0);
            }

            @media (prefers-reduced-motion: reduce) {
                .showcase-card-enter,
                .showcase-reveal,
                .modal-panel {
                    animation: none;
                    transition: none;
                    opacity: 1;
                    transform: none;
                }
            }
            "#
        </style>
    }
}

/// Reveals `.showcase-reveal` blocks once via IntersectionObserver
#[component]
fn ScrollRevealScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollReveal() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -100px 0px'
                    });

                    document.querySelectorAll('.showcase-reveal').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollReveal);
                } else {
                    initScrollReveal();
                }
            })();
            "#
        </script>
    }
}
