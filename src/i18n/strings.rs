use crate::i18n::Locale;

/// Source (English) keys for the strings the page shell looks up.
pub const THE_COMPLETE_SATOSHI: &str = "The Complete Satoshi";
pub const LIBRARY: &str = "Library";
pub const MEMPOOL: &str = "Mempool";
pub const INSTITUTE_NAME: &str = "Satoshi Nakamoto Institute";
pub const LANGUAGE: &str = "Language";
pub const ABOUT: &str = "About";

/// Every key a complete shell catalog must contain.
pub const SHELL_KEYS: [&str; 6] = [
    THE_COMPLETE_SATOSHI,
    LIBRARY,
    MEMPOOL,
    INSTITUTE_NAME,
    LANGUAGE,
    ABOUT,
];

/// All localized strings used by the page shell for one locale
#[derive(Debug, Clone)]
pub struct ShellStrings {
    // ==================== Navigation ====================
    /// Label for the Satoshi archive index
    pub the_complete_satoshi: &'static str,

    /// Label for the library index
    pub library: &'static str,

    /// Label for the Mempool blog index
    pub mempool: &'static str,

    // ==================== Chrome ====================
    /// Institute name shown in the footer
    pub institute_name: &'static str,

    /// Label of the language switch menu
    pub language: &'static str,

    /// Label of the footer "about" link
    pub about: &'static str,
}

impl ShellStrings {
    /// The strings for a locale.
    pub fn for_locale(locale: Locale) -> &'static ShellStrings {
        match locale {
            Locale::English => &ENGLISH_STRINGS,
            Locale::Spanish => &SPANISH_STRINGS,
            Locale::German => &GERMAN_STRINGS,
            Locale::French => &FRENCH_STRINGS,
            Locale::Italian => &ITALIAN_STRINGS,
            Locale::Portuguese => &PORTUGUESE_STRINGS,
            Locale::Russian => &RUSSIAN_STRINGS,
            Locale::Chinese => &CHINESE_STRINGS,
            Locale::Japanese => &JAPANESE_STRINGS,
        }
    }

    /// (source key, localized text) pairs, in `SHELL_KEYS` order.
    pub fn entries(&self) -> [(&'static str, &'static str); 6] {
        [
            (THE_COMPLETE_SATOSHI, self.the_complete_satoshi),
            (LIBRARY, self.library),
            (MEMPOOL, self.mempool),
            (INSTITUTE_NAME, self.institute_name),
            (LANGUAGE, self.language),
            (ABOUT, self.about),
        ]
    }
}

// ==================== Tables ====================

/// English strings (canonical): identical to the source keys
pub const ENGLISH_STRINGS: ShellStrings = ShellStrings {
    the_complete_satoshi: THE_COMPLETE_SATOSHI,
    library: LIBRARY,
    mempool: MEMPOOL,
    institute_name: INSTITUTE_NAME,
    language: LANGUAGE,
    about: ABOUT,
};

pub const SPANISH_STRINGS: ShellStrings = ShellStrings {
    the_complete_satoshi: "El Satoshi Completo",
    library: "Biblioteca",
    mempool: "Mempool",
    institute_name: "Instituto Satoshi Nakamoto",
    language: "Idioma",
    about: "Acerca de",
};

pub const GERMAN_STRINGS: ShellStrings = ShellStrings {
    the_complete_satoshi: "Der komplette Satoshi",
    library: "Bibliothek",
    mempool: "Mempool",
    institute_name: "Satoshi Nakamoto Institut",
    language: "Sprache",
    about: "Über uns",
};

pub const FRENCH_STRINGS: ShellStrings = ShellStrings {
    the_complete_satoshi: "Le Satoshi complet",
    library: "Bibliothèque",
    mempool: "Mempool",
    institute_name: "Institut Satoshi Nakamoto",
    language: "Langue",
    about: "À propos",
};

pub const ITALIAN_STRINGS: ShellStrings = ShellStrings {
    the_complete_satoshi: "Il Satoshi completo",
    library: "Biblioteca",
    mempool: "Mempool",
    institute_name: "Istituto Satoshi Nakamoto",
    language: "Lingua",
    about: "Chi siamo",
};

pub const PORTUGUESE_STRINGS: ShellStrings = ShellStrings {
    the_complete_satoshi: "O Satoshi Completo",
    library: "Biblioteca",
    mempool: "Mempool",
    institute_name: "Instituto Satoshi Nakamoto",
    language: "Idioma",
    about: "Sobre",
};

pub const RUSSIAN_STRINGS: ShellStrings = ShellStrings {
    the_complete_satoshi: "Полный Сатоши",
    library: "Библиотека",
    mempool: "Мемпул",
    institute_name: "Институт Сатоши Накамото",
    language: "Язык",
    about: "О нас",
};

pub const CHINESE_STRINGS: ShellStrings = ShellStrings {
    the_complete_satoshi: "中本聪全集",
    library: "图书馆",
    mempool: "内存池",
    institute_name: "中本聪研究所",
    language: "语言",
    about: "关于",
};

pub const JAPANESE_STRINGS: ShellStrings = ShellStrings {
    the_complete_satoshi: "サトシ全集",
    library: "ライブラリー",
    mempool: "メモリプール",
    institute_name: "サトシ・ナカモト研究所",
    language: "言語",
    about: "概要",
};
