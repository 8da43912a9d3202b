//! Site footer with brand and legal lines

use chrono::Datelike;
use leptos::prelude::*;

use crate::ui::common::{Container, GradientText};

pub const BRAND_NAME: &str = "TELLCON Systems";
pub const TAGLINE: &str = "O futuro dos negócios começa aqui !";
pub const COMPANY_REGISTRATION: &str = "CNPJ: 04.918.985/0001-90";
pub const RIGHTS_NOTICE: &str = "Todos os direitos reservados.";

/// Copyright line for the given year
pub fn copyright_line(year: i32) -> String {
    format!(
        "© {} Tellcon Systems é uma divisão da Tellcon Business Network Ltda.",
        year
    )
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="bg-dark-950 border-t border-dark-800/50 py-16">
            <Container>
                <div class="text-center">
                    <div class="text-2xl font-display font-bold mb-4">
                        <GradientText>{BRAND_NAME}</GradientText>
                    </div>
                    <p class="text-white/70 max-w-sm mx-auto">{TAGLINE}</p>
                </div>

                <div class="border-t border-dark-800/50 mt-10 pt-10 text-white text-sm text-center">
                    <p>{copyright_line(year)}</p>
                    <p>{COMPANY_REGISTRATION}</p>
                    <p>{RIGHTS_NOTICE}</p>
                </div>
            </Container>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line_includes_year() {
        let line = copyright_line(2026);

        assert!(line.starts_with("© 2026 "));
        assert!(line.contains("Tellcon Business Network Ltda."));
    }

    #[test]
    fn test_footer_uses_utc_year() {
        let year = chrono::Utc::now().year();
        let owner = Owner::new();
        let html = owner.with(|| view! { <Footer/> }.to_html());

        assert!(html.contains(&format!("© {year} ")));
        assert!(html.contains(COMPANY_REGISTRATION));
    }
}
