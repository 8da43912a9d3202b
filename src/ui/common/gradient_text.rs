use leptos::prelude::*;

/// Inline text filled with the brand gradient
#[component]
pub fn GradientText(
    children: Children,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!(
            "bg-gradient-to-r from-primary-400 to-accent-400 bg-clip-text text-transparent {}",
            class
        )>
            {children()}
        </span>
    }
}
