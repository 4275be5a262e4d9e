use crate::i18n::t;
use yew::prelude::*;

/// `mm:ss`, with minutes growing past two digits if needed.
#[must_use]
pub fn format_elapsed(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Seconds since mount, ticking once per second until unmount.
#[function_component(GameTimer)]
pub fn game_timer() -> Html {
    let elapsed = use_state(|| 0_u32);

    #[cfg(target_arch = "wasm32")]
    {
        let elapsed = elapsed.setter();
        use_effect_with((), move |()| {
            let started = js_sys::Date::now();
            let interval = gloo::timers::callback::Interval::new(1_000, move || {
                let secs = ((js_sys::Date::now() - started) / 1_000.0).max(0.0);
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                elapsed.set(secs as u32);
            });
            move || drop(interval)
        });
    }

    html! {
        <div class="game-timer" role="timer" aria-label={t("level.timer")}>
            <span aria-hidden="true">{"⏱ "}</span>
            <time>{ format_elapsed(*elapsed) }</time>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(75), "01:15");
        assert_eq!(format_elapsed(3_600), "60:00");
    }

    #[test]
    fn starts_at_zero() {
        let html = block_on(LocalServerRenderer::<GameTimer>::new().render());
        assert!(html.contains("00:00"));
    }
}
