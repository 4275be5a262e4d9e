use crate::i18n::tr;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressBarProps {
    pub current: u8,
    pub total: u8,
    #[prop_or_default]
    pub completed: Vec<u8>,
}

/// CSS state for one campaign step.
#[must_use]
pub fn step_state(level: u8, current: u8, completed: &[u8]) -> &'static str {
    if completed.contains(&level) {
        "done"
    } else if level == current {
        "current"
    } else {
        "todo"
    }
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let current = props.current.to_string();
    let total = props.total.to_string();
    let mut args = BTreeMap::new();
    args.insert("current", current.as_str());
    args.insert("total", total.as_str());
    let label = tr("level.progress", Some(&args));

    html! {
        <nav class="campaign-progress" aria-label={label.clone()}>
            <ol class="steps">
                { for (1..=props.total).map(|level| html! {
                    <li
                        key={level}
                        class={classes!("step", step_state(level, props.current, &props.completed))}
                        aria-current={(level == props.current).then_some("step")}
                    >
                        { level }
                    </li>
                }) }
            </ol>
            <span class="sr-only">{ label }</span>
        </nav>
    }
}
