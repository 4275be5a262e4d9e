use pfe_quest_game::{History, Notice};
use yew::prelude::*;

/// `window.history` and `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn current_location(&self) -> String {
        let location = gloo::utils::window().location();
        let path = location.pathname().unwrap_or_else(|_| "/".to_string());
        let search = location.search().unwrap_or_default();
        format!("{path}{search}")
    }

    fn push(&self, location: &str) {
        let pushed = gloo::utils::window().history().and_then(|history| {
            history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(location))
        });
        if let Err(err) = pushed {
            log::warn!(
                "history push failed: {}",
                crate::dom::js_error_message(&err)
            );
        }
    }
}

/// Keep the player on the current page while the component is mounted.
///
/// Installs a [`pfe_quest_game::BackGuard`] and feeds it every `popstate`;
/// unmounting drops the listener and the guard together.
#[hook]
pub fn use_back_guard(notify: Callback<Notice>) {
    #[cfg(target_arch = "wasm32")]
    {
        use crate::host::CallbackNotifier;
        use gloo::events::EventListener;
        use pfe_quest_game::BackGuard;

        use_effect_with((), move |()| {
            let guard = BackGuard::install(BrowserHistory, CallbackNotifier::new(notify));
            let listener = EventListener::new(&gloo::utils::window(), "popstate", move |_| {
                guard.on_back();
            });
            move || drop(listener)
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = notify;
    }
}
