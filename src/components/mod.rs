//! Page shell components rendered with `maud`.
//!
//! - `page_layout`: composes the shell around page content
//! - `navbar` / `footer`: presentation-only regions fed by the layout
//! - `classes`: CSS class merging
//! - `document`: full HTML document wrapper

mod classes;
mod document;
mod footer;
mod navbar;
mod page_layout;

pub use classes::class_names;
pub use document::document;
pub use footer::Footer;
pub use navbar::{LocaleToggle, NavLink, Navbar};
pub use page_layout::{
    compose_page_layout, page_layout, PageLayoutProps, PageShell, BODY_CLASS, MAIN_BASE_CLASS,
};
