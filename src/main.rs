//! Preview binary - renders one page shell to stdout
//!
//! Usage:
//!   cargo run                       # English shell with placeholder content
//!   SITE_LOCALE=es cargo run        # Spanish shell
//!
//! Optional environment variables:
//! - SITE_LOCALE (defaults to en)
//! - SITE_MAIN_CLASS
//! - SITE_CONTENT_FILE (HTML fragment, defaults to a placeholder paragraph)
//! - SITE_LOCALES_DIR (JSON catalogs; embedded strings when unset)

use anyhow::{Context, Result};
use maud::{html, Markup, PreEscaped};
use sni_shell::components::document;
use sni_shell::config::Config;
use sni_shell::i18n::ShellStrings;
use sni_shell::urls::urls;
use sni_shell::{compose_page_layout, PageLayoutProps};
use std::io::Write;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the document
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sni_shell=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!("Rendering page shell for {}", config.locale.code());

    let children = load_content(&config).await?;
    let catalog = config.catalog();

    let mut props = PageLayoutProps::new(config.locale, children)
        .with_generate_href(|locale| urls(locale).home);
    if let Some(class_name) = &config.main_class {
        props = props.with_class_name(class_name.as_str());
    }

    let shell = compose_page_layout(&catalog, props)
        .await
        .context("Failed to compose page shell")?;

    let title = ShellStrings::for_locale(config.locale).institute_name;
    let page = document(config.locale, title, &shell);

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(page.into_string().as_bytes())
        .context("Failed to write document to stdout")?;
    stdout.write_all(b"\n")?;

    info!("✓ Page shell rendered");
    Ok(())
}

async fn load_content(config: &Config) -> Result<Markup> {
    match &config.content_file {
        Some(path) => {
            let fragment = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read content file {}", path.display()))?;
            Ok(PreEscaped(fragment))
        }
        None => Ok(html! {
            p { "Page content goes here." }
        }),
    }
}
