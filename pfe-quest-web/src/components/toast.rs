//! Transient notice stack.
//!
//! [`ToastHost`] owns the stack and provides a [`Toasts`] context; anything
//! below it can raise a [`Notice`] through [`use_toasts`].

use crate::i18n::{notice_text, t};
use pfe_quest_game::{Notice, Severity};
use std::rc::Rc;
use yew::prelude::*;

/// How long a toast stays up.
pub const TOAST_TTL_MS: u32 = 4_000;
/// Older toasts are dropped beyond this many.
pub const MAX_TOASTS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastItem {
    pub id: u32,
    pub severity: Severity,
    pub text: AttrValue,
}

pub enum ToastAction {
    Push(Notice),
    Dismiss(u32),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastStack {
    next_id: u32,
    items: Vec<ToastItem>,
}

impl ToastStack {
    #[must_use]
    pub fn items(&self) -> &[ToastItem] {
        &self.items
    }

    /// Id the next pushed toast will get.
    #[must_use]
    pub const fn next_id(&self) -> u32 {
        self.next_id
    }

    fn apply(&self, action: ToastAction) -> Self {
        let mut next = self.clone();
        match action {
            ToastAction::Push(notice) => {
                next.items.push(ToastItem {
                    id: next.next_id,
                    severity: notice.severity(),
                    text: notice_text(&notice).into(),
                });
                next.next_id = next.next_id.wrapping_add(1);
                if next.items.len() > MAX_TOASTS {
                    let overflow = next.items.len() - MAX_TOASTS;
                    next.items.drain(..overflow);
                }
            }
            ToastAction::Dismiss(id) => next.items.retain(|item| item.id != id),
        }
        next
    }
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Context handle for raising notices.
#[derive(Clone, PartialEq)]
pub struct Toasts {
    pub notify: Callback<Notice>,
}

/// The nearest [`ToastHost`]'s notice callback, or a no-op without one.
#[hook]
pub fn use_toasts() -> Callback<Notice> {
    use_context::<Toasts>().map_or_else(Callback::noop, |toasts| toasts.notify)
}

#[must_use]
pub const fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "alert-success",
        Severity::Error => "alert-error",
        Severity::Warning => "alert-warning",
        Severity::Info => "alert-info",
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let stack = use_reducer(ToastStack::default);

    let notify = {
        let dispatcher = stack.dispatcher();
        Callback::from(move |notice: Notice| dispatcher.dispatch(ToastAction::Push(notice)))
    };
    let on_dismiss = {
        let dispatcher = stack.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    #[cfg(target_arch = "wasm32")]
    {
        let dispatcher = stack.dispatcher();
        use_effect_with(stack.next_id(), move |next_id| {
            if let Some(id) = next_id.checked_sub(1) {
                gloo::timers::callback::Timeout::new(TOAST_TTL_MS, move || {
                    dispatcher.dispatch(ToastAction::Dismiss(id));
                })
                .forget();
            }
        });
    }

    html! {
        <ContextProvider<Toasts> context={Toasts { notify }}>
            { props.children.clone() }
            <ToastList toasts={stack.items().to_vec()} {on_dismiss} />
        </ContextProvider<Toasts>>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastListProps {
    pub toasts: Vec<ToastItem>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastList)]
pub fn toast_list(props: &ToastListProps) -> Html {
    html! {
        <div class="toast toast-end toast-top" role="status" aria-live="polite">
            { for props.toasts.iter().map(|toast| {
                let on_click = {
                    let cb = props.on_dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_| cb.emit(id))
                };
                html! {
                    <div key={toast.id} class={classes!("alert", severity_class(toast.severity))}>
                        <span>{ toast.text.clone() }</span>
                        <button class="btn btn-ghost btn-xs" aria-label={t("toast.dismiss")} onclick={on_click}>{"✕"}</button>
                    </div>
                }
            }) }
        </div>
    }
}
