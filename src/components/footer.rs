use crate::i18n::{Locale, ShellStrings};
use crate::urls::urls;
use maud::{html, Markup, Render};

/// Site footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub locale: Locale,
}

impl Render for Footer {
    fn render(&self) -> Markup {
        let strings = ShellStrings::for_locale(self.locale);
        let routes = urls(self.locale);

        html! {
            footer class="border-t border-gray-200 py-6" lang=(self.locale.code()) {
                div class="twbs-container flex justify-between" {
                    a href=(routes.home) { (strings.institute_name) }
                    a href=(routes.about) { (strings.about) }
                }
            }
        }
    }
}
