use crate::i18n::locales::{DEFAULT_LANG, is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;

#[cfg(target_arch = "wasm32")]
const LOCALE_KEY: &str = "pfe-quest.locale";

/// Translation tables for the active language, backed by the French table.
pub struct Catalog {
    lang: String,
    active: Value,
    french: Value,
}

impl Catalog {
    fn open(lang: &str) -> Option<Self> {
        if !is_supported(lang) {
            return None;
        }
        Some(Self {
            lang: lang.to_owned(),
            active: load_translations(lang)?,
            french: load_translations(DEFAULT_LANG)?,
        })
    }

    fn blank() -> Self {
        Self {
            lang: DEFAULT_LANG.to_owned(),
            active: Value::Null,
            french: Value::Null,
        }
    }

    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Raw template for a dotted key, active table first.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        [&self.active, &self.french]
            .into_iter()
            .find_map(|table| walk(table, key))
    }
}

fn walk<'a>(table: &'a Value, key: &str) -> Option<&'a str> {
    let mut node = table;
    for segment in key.split('.') {
        node = node.as_object()?.get(segment)?;
    }
    node.as_str()
}

#[cfg(all(not(test), target_arch = "wasm32"))]
fn stored_lang() -> Option<String> {
    use gloo::storage::{LocalStorage, Storage};
    LocalStorage::raw().get_item(LOCALE_KEY).ok().flatten()
}

#[cfg(any(test, not(target_arch = "wasm32")))]
fn stored_lang() -> Option<String> {
    None
}

thread_local! {
    static ACTIVE: RefCell<Catalog> = RefCell::new(
        stored_lang()
            .and_then(|lang| Catalog::open(&lang))
            .or_else(|| Catalog::open(DEFAULT_LANG))
            .unwrap_or_else(Catalog::blank),
    );
}

pub(super) fn with_catalog<R>(f: impl FnOnce(&Catalog) -> R) -> R {
    ACTIVE.with(|cell| f(&cell.borrow()))
}

#[cfg(target_arch = "wasm32")]
fn remember(lang: &str) {
    use gloo::storage::{LocalStorage, Storage};
    if let Some(root) = gloo::utils::document().document_element() {
        let _ = root.set_attribute("lang", lang);
    }
    if let Err(err) = LocalStorage::raw().set_item(LOCALE_KEY, lang) {
        log::warn!(
            "could not persist language: {}",
            crate::dom::js_error_message(&err)
        );
    }
}

/// Switch the active language.
///
/// Unsupported codes are ignored. In the browser the choice is written to
/// `<html lang>` and persisted in localStorage.
pub fn set_lang(lang: &str) {
    match Catalog::open(lang) {
        Some(catalog) => {
            ACTIVE.with(|cell| *cell.borrow_mut() = catalog);
            #[cfg(target_arch = "wasm32")]
            remember(lang);
        }
        None => log::warn!("unsupported language {lang:?}"),
    }
}

/// Two-letter code of the active language.
#[must_use]
pub fn current_lang() -> String {
    with_catalog(|catalog| catalog.lang().to_owned())
}
