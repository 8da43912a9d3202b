use leptos::prelude::*;

/// Centered, padded page column
#[component]
pub fn Container(
    children: Children,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("container mx-auto px-4 md:px-6 {}", class)>
            {children()}
        </div>
    }
}
