use gloo::timers::callback::Timeout;
use pfe_quest_game::Scheduler;
use std::time::Duration;
use yew::Callback;

/// One-shot tasks on `setTimeout`.
///
/// The handle is the gloo [`Timeout`], which clears the browser timer when
/// dropped. `after_fire` runs after each task so the page can re-render.
#[derive(Clone, PartialEq)]
pub struct TimeoutScheduler {
    after_fire: Callback<()>,
}

impl TimeoutScheduler {
    #[must_use]
    pub const fn new(after_fire: Callback<()>) -> Self {
        Self { after_fire }
    }
}

#[must_use]
pub fn delay_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        let after_fire = self.after_fire.clone();
        Timeout::new(delay_millis(delay), move || {
            task();
            after_fire.emit(());
        })
    }
}
