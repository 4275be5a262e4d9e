use crate::i18n::{locales, set_lang, t};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_lang: AttrValue,
    pub on_lang_change: Callback<String>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                set_lang(&sel.value());
                cb.emit(sel.value());
            }
        })
    };
    html! {
        <header role="banner" class="app-header">
            <a href="#main" class="sr-only">{ t("nav.skip") }</a>
            <span class="brand">{ t("home.title") }</span>
            <nav aria-label={t("nav.language")}>
                <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                <select id="lang-select" onchange={on_change}>
                    { for locales().iter().map(|meta| html! {
                        <option
                            value={meta.code}
                            selected={p.current_lang.as_str() == meta.code}
                        >
                            { meta.name }
                        </option>
                    }) }
                </select>
            </nav>
        </header>
    }
}
