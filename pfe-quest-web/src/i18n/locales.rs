use serde_json::Value;

/// Language used when nothing else is saved or requested.
pub const DEFAULT_LANG: &str = "fr";

/// A shipped language: its code, native name and translation source.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    source: &'static str,
}

const SHIPPED: [LocaleMeta; 2] = [
    LocaleMeta {
        code: "fr",
        name: "Français",
        source: include_str!("../../i18n/fr.json"),
    },
    LocaleMeta {
        code: "en",
        name: "English",
        source: include_str!("../../i18n/en.json"),
    },
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    &SHIPPED
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    SHIPPED.iter().any(|meta| meta.code == lang)
}

/// Parsed translation table for `lang`; unknown codes get the default table.
pub fn load_translations(lang: &str) -> Option<Value> {
    let meta = SHIPPED
        .iter()
        .find(|meta| meta.code == lang)
        .unwrap_or(&SHIPPED[0]);
    match serde_json::from_str(meta.source) {
        Ok(table) => Some(table),
        Err(err) => {
            log::error!("translation table {} is malformed: {err}", meta.code);
            None
        }
    }
}
