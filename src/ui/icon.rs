use leptos::prelude::*;

/// Static SVG icon served from `/icons`
#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const SEARCH: &str = "search";
    pub const X: &str = "x";
    pub const COMPASS: &str = "compass";
}
