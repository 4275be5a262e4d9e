mod actions;
mod answer;
mod block_row;

pub use actions::{PitchActions, PitchActionsProps};
pub use answer::{PitchAnswer, PitchAnswerProps};
pub use block_row::{BlockRow, BlockRowProps, row_state};

use crate::i18n::t;
use crate::paths::avatar_image;
use pfe_quest_game::{AvatarOption, Direction, PitchBlock};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PitchStepProps {
    #[prop_or_default]
    pub avatar: Option<AvatarOption>,
    pub blocks: Vec<PitchBlock>,
    pub canonical: Vec<PitchBlock>,
    #[prop_or_default]
    pub verdict: Option<bool>,
    #[prop_or_default]
    pub playing: bool,
    pub on_move: Callback<(usize, Direction)>,
    pub on_validate: Callback<()>,
    pub on_play: Callback<()>,
    pub on_continue: Callback<()>,
}

/// Step 2: order the pitch with the arrow buttons, then validate.
#[function_component(PitchStep)]
pub fn pitch_step(props: &PitchStepProps) -> Html {
    let len = props.blocks.len();

    html! {
        <section class="level-step pitch-step" aria-labelledby="pitch-heading">
            <div class="pitch-intro">
                if let Some(avatar) = props.avatar {
                    <img
                        src={avatar_image(avatar.image)}
                        alt={t("level4.pitch.avatar_alt")}
                        class="avatar-chosen"
                    />
                }
                <div>
                    <h2 id="pitch-heading">{ t("level4.pitch.heading") }</h2>
                    <p class="muted">{ t("level4.pitch.hint") }</p>
                </div>
            </div>
            <ol class="pitch-board">
                { for props.blocks.iter().enumerate().map(|(index, block)| html! {
                    <BlockRow
                        key={block.id}
                        {index}
                        {len}
                        block={block.clone()}
                        verdict={props.verdict}
                        on_move={props.on_move.clone()}
                    />
                }) }
            </ol>
            if props.verdict.is_some() {
                <PitchAnswer canonical={props.canonical.clone()} />
            }
            <PitchActions
                verdict={props.verdict}
                playing={props.playing}
                on_validate={props.on_validate.clone()}
                on_play={props.on_play.clone()}
                on_continue={props.on_continue.clone()}
            />
        </section>
    }
}
