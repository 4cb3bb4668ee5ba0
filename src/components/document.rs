use crate::components::PageShell;
use crate::i18n::Locale;
use maud::{html, Markup, DOCTYPE};

/// Wrap a composed page shell in a complete HTML document.
pub fn document(locale: Locale, title: &str, shell: &PageShell) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(locale.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            (shell)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{compose_page_layout, PageLayoutProps};
    use crate::i18n::StaticCatalog;

    #[tokio::test]
    async fn test_document_sets_lang_and_title() {
        let shell = compose_page_layout(
            &StaticCatalog,
            PageLayoutProps::new(Locale::Portuguese, html! { p { "olá" } }),
        )
        .await
        .unwrap();

        let html = document(Locale::Portuguese, "Biblioteca & mais", &shell).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="pt">"#));
        assert!(html.contains("<title>Biblioteca &amp; mais</title>"));
        assert!(html.contains("<p>olá</p>"));
    }
}
