use crate::i18n::t;
use pfe_quest_game::PitchBlock;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PitchAnswerProps {
    pub canonical: Vec<PitchBlock>,
}

/// Canonical pitch, numbered 1..n.
#[function_component(PitchAnswer)]
pub fn pitch_answer(props: &PitchAnswerProps) -> Html {
    html! {
        <div class="answer-reveal pitch-answer" aria-live="polite">
            <p class="muted">{ t("level4.pitch.answer_label") }</p>
            <ol class="answer-list">
                { for props.canonical.iter().enumerate().map(|(i, block)| html! {
                    <li key={block.id}>
                        <span class="answer-index">{ format!("{}.", i + 1) }</span>
                        { " " }
                        { block.content.clone() }
                    </li>
                }) }
            </ol>
        </div>
    }
}
