use crate::i18n::t;
use pfe_quest_game::{Direction, PitchBlock};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BlockRowProps {
    pub index: usize,
    pub len: usize,
    pub block: PitchBlock,
    pub verdict: Option<bool>,
    pub on_move: Callback<(usize, Direction)>,
}

#[must_use]
pub const fn row_state(verdict: Option<bool>) -> &'static str {
    match verdict {
        Some(true) => "border-success",
        Some(false) => "border-destructive",
        None => "border-default",
    }
}

#[function_component(BlockRow)]
pub fn block_row(props: &BlockRowProps) -> Html {
    let mover = |direction: Direction| {
        let on_move = props.on_move.clone();
        let index = props.index;
        Callback::from(move |_| on_move.emit((index, direction)))
    };
    let first = props.index == 0;
    let last = props.index + 1 >= props.len;

    html! {
        <li class={classes!("pitch-block", row_state(props.verdict))} data-block={props.block.id}>
            <span class="pitch-position" aria-hidden="true">{ props.index + 1 }</span>
            <p class="pitch-content">{ props.block.content.clone() }</p>
            if props.verdict.is_none() {
                <div class="pitch-moves">
                    <button
                        type="button"
                        class="move-up"
                        aria-label={t("level4.pitch.move_up")}
                        disabled={first}
                        onclick={mover(Direction::Up)}
                    >{"▲"}</button>
                    <button
                        type="button"
                        class="move-down"
                        aria-label={t("level4.pitch.move_down")}
                        disabled={last}
                        onclick={mover(Direction::Down)}
                    >{"▼"}</button>
                </div>
            }
        </li>
    }
}
