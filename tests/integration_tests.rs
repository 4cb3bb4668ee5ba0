//! Integration tests for the page shell
//!
//! These tests drive the public API end to end: translation providers, the
//! URL builder and the layout rendered to HTML.

use maud::html;
use proptest::prelude::*;
use sni_shell::components::{LocaleToggle, MAIN_BASE_CLASS};
use sni_shell::i18n::{JsonCatalog, StaticCatalog};
use sni_shell::urls::{generate_locale_toggle_links, urls};
use sni_shell::{compose_page_layout, page_layout, I18nError, Locale, PageLayoutProps};
use tempfile::TempDir;

// ==================== Test Helpers ====================

/// Write a complete Spanish catalog that differs from the embedded strings
fn write_spanish_catalog(dir: &TempDir) {
    let body = serde_json::json!({
        "The Complete Satoshi": "Todo Satoshi",
        "Library": "Biblioteca SNI",
        "Mempool": "Mempool",
        "Satoshi Nakamoto Institute": "Instituto Satoshi Nakamoto",
        "Language": "Idioma",
        "About": "Acerca de",
    });
    std::fs::write(dir.path().join("es.json"), body.to_string()).expect("Failed to write catalog");
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("Failed to build runtime")
}

// ==================== Rendering Tests ====================

#[tokio::test]
async fn test_full_page_from_json_catalog() {
    let dir = TempDir::new().unwrap();
    write_spanish_catalog(&dir);

    let props = PageLayoutProps::new(Locale::Spanish, html! { article { "Hola" } })
        .with_class_name("prose")
        .with_generate_href(|l| urls(l).library.doc("bitcoin"));
    let html = page_layout(&JsonCatalog::new(dir.path()), props)
        .await
        .unwrap()
        .into_string();

    assert!(html.contains(r#"<a href="/es/satoshi">Todo Satoshi</a>"#));
    assert!(html.contains(r#"<a href="/es/library">Biblioteca SNI</a>"#));
    assert!(html.contains(r#"<a href="/es/mempool">Mempool</a>"#));
    assert!(html.contains(&format!(r#"<main class="{} prose">"#, MAIN_BASE_CLASS)));
    assert!(html.contains("<article>Hola</article>"));
    assert!(html.contains(r#"href="/library/bitcoin""#));
    assert!(html.contains(r#"href="/ja/library/bitcoin""#));
    assert!(html.contains(r#"<footer class="border-t border-gray-200 py-6" lang="es">"#));
}

#[tokio::test]
async fn test_canonical_page_without_catalog_files() {
    let dir = TempDir::new().unwrap();

    let html = page_layout(
        &JsonCatalog::new(dir.path()),
        PageLayoutProps::new(Locale::English, html! { p { "Hello" } }),
    )
    .await
    .unwrap()
    .into_string();

    assert!(html.contains(r#"<a href="/satoshi">The Complete Satoshi</a>"#));
    assert!(!html.contains("locale-toggle"));
}

#[tokio::test]
async fn test_missing_catalog_fails_whole_render() {
    let dir = TempDir::new().unwrap();

    let result = page_layout(
        &JsonCatalog::new(dir.path()),
        PageLayoutProps::new(Locale::German, html! { p { "Hallo" } }),
    )
    .await;

    assert!(matches!(result, Err(I18nError::MissingCatalog { .. })));
}

#[tokio::test]
async fn test_toggle_props_match_url_builder() {
    for locale in Locale::ALL {
        let props = PageLayoutProps::new(locale, html! {})
            .with_generate_href(|l| urls(l).satoshi.emails);
        let shell = compose_page_layout(&StaticCatalog, props).await.unwrap();

        assert_eq!(
            shell.navbar.toggle,
            LocaleToggle::Links(generate_locale_toggle_links(locale, |l| urls(l).satoshi.emails))
        );
    }
}

#[test]
fn test_unknown_locale_code_is_rejected() {
    let err = Locale::from_code("klingon").unwrap_err();
    assert!(matches!(err, I18nError::UnknownLocale(_)));
}

// ==================== Property Tests ====================

proptest! {
    #[test]
    fn prop_shell_invariants_hold_for_any_locale_and_class(
        index in 0..Locale::ALL.len(),
        class_name in prop::option::of("[a-z][a-z0-9-]{0,10}( [a-z][a-z0-9-]{0,10}){0,3}"),
    ) {
        let locale = Locale::ALL[index];
        let mut props = PageLayoutProps::new(locale, html! { span id="x" {} });
        if let Some(class_name) = &class_name {
            props = props.with_class_name(class_name.clone());
        }

        let shell = runtime()
            .block_on(compose_page_layout(&StaticCatalog, props))
            .unwrap();

        let hrefs: Vec<String> = shell.navbar.nav_links.iter().map(|l| l.href.clone()).collect();
        let routes = urls(locale);
        prop_assert_eq!(
            hrefs,
            vec![routes.satoshi.index, routes.library.index, routes.mempool.index]
        );
        prop_assert!(shell.main_class.starts_with(MAIN_BASE_CLASS));
        if let Some(class_name) = &class_name {
            prop_assert!(shell.main_class.ends_with(class_name.as_str()));
        }
        prop_assert!(shell.navbar.toggle.is_none());
        prop_assert_eq!(shell.footer.locale, locale);

        let html = maud::Render::render(&shell).into_string();
        prop_assert_eq!(html.matches(r#"<span id="x"></span>"#).count(), 1);
    }
}
