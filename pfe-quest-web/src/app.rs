use crate::components::header::Header;
use crate::components::toast::ToastHost;
use crate::pages::home::HomePage;
use crate::pages::level4::InterviewPage;
use crate::pages::next_level::NextLevelPage;
use crate::pages::not_found::NotFound;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppShell />
        </BrowserRouter>
    }
}

/// Header, toast host and the routed page.
#[function_component(AppShell)]
pub fn app_shell() -> Html {
    let current_language = use_state(crate::i18n::current_lang);
    let on_lang_change = {
        let current_language = current_language.clone();
        Callback::from(move |lang: String| current_language.set(lang))
    };
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let go = |target: Route| {
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if let Some(nav) = &navigator {
                nav.push(&target);
            }
        })
    };

    html! {
        <ToastHost>
            <Header current_lang={(*current_language).clone()} {on_lang_change} />
            <main id="main" role="main" lang={(*current_language).clone()}>
                { switch(route, &go(Route::Home), &go(Route::Level4)) }
            </main>
        </ToastHost>
    }
}

fn switch(route: Route, go_home: &Callback<()>, start: &Callback<()>) -> Html {
    match route {
        Route::Home => html! { <HomePage on_start={start.clone()} /> },
        Route::Level4 => html! { <InterviewPage /> },
        Route::Level5 => html! { <NextLevelPage on_go_home={go_home.clone()} /> },
        Route::NotFound => html! { <NotFound on_go_home={go_home.clone()} /> },
    }
}
