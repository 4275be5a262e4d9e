use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LevelHeaderProps {
    pub level: u8,
    pub title: AttrValue,
    pub objective: AttrValue,
}

#[function_component(LevelHeader)]
pub fn level_header(props: &LevelHeaderProps) -> Html {
    let level = props.level.to_string();
    let mut args = BTreeMap::new();
    args.insert("level", level.as_str());
    html! {
        <header class="level-header" aria-labelledby="level-title">
            <span class="badge badge-primary level-number">{ tr("level.number", Some(&args)) }</span>
            <h1 id="level-title">{ props.title.clone() }</h1>
            <p class="level-objective">
                <strong>{ t("level.objective_label") }{ " : " }</strong>
                { props.objective.clone() }
            </p>
        </header>
    }
}
