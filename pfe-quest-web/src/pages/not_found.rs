use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

/// Anything outside the known routes, including hand-typed level URLs.
#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let on_click = props.on_go_home.reform(|_: MouseEvent| ());

    html! {
        <section class="panel not-found" aria-labelledby="not-found-title">
            <p class="error-code" aria-hidden="true">{ "404" }</p>
            <h1 id="not-found-title">{ t("not_found.title") }</h1>
            <p class="muted">{ t("not_found.message") }</p>
            <button type="button" class="btn btn-primary" onclick={on_click}>
                { t("not_found.back") }
            </button>
        </section>
    }
}
