use crate::host::LocalProgress;
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NextLevelPageProps {
    pub on_go_home: Callback<()>,
}

/// Landing page for `/niveau-5` until that level exists.
#[function_component(NextLevelPage)]
pub fn next_level_page(props: &NextLevelPageProps) -> Html {
    let total = use_state(|| LocalProgress.load_or_default().total_score());
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <section class="panel next-level" aria-live="polite">
            <h1>{ t("next_level.title") }</h1>
            <p>{ t("next_level.message") }</p>
            <p class="score-total" data-score={total.to_string()}>{ format!("{} pts", *total) }</p>
            <button type="button" class="btn" onclick={go_home}>
                { t("next_level.back") }
            </button>
        </section>
    }
}
