use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_start: Callback<()>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let start = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <section class="panel home" aria-labelledby="home-title">
            <h1 id="home-title">{ t("home.title") }</h1>
            <p class="muted">{ t("home.subtitle") }</p>
            <button id="home-start" class="btn btn-primary btn-lg" onclick={start}>
                { t("home.start") }
            </button>
        </section>
    }
}
