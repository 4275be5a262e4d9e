mod reveal;
mod tile;

pub use reveal::AvatarReveal;
pub use tile::{AvatarTile, AvatarTileProps, tile_classes};

use crate::i18n::t;
use pfe_quest_game::avatars;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AvatarStepProps {
    #[prop_or_default]
    pub selected: Option<AttrValue>,
    #[prop_or_default]
    pub verdict: Option<bool>,
    pub on_select: Callback<AttrValue>,
    pub on_confirm: Callback<()>,
}

/// Step 1: pick an outfit, confirm it, see the expected answer.
#[function_component(AvatarStep)]
pub fn avatar_step(props: &AvatarStepProps) -> Html {
    let on_confirm = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="level-step avatar-step" aria-labelledby="avatar-heading">
            <h2 id="avatar-heading">{ t("level4.avatar.heading") }</h2>
            <div class="avatar-grid" role="radiogroup" aria-labelledby="avatar-heading">
                { for avatars().iter().map(|avatar| html! {
                    <AvatarTile
                        key={avatar.id}
                        avatar={*avatar}
                        selected={props.selected.as_deref() == Some(avatar.id)}
                        verdict={props.verdict}
                        on_select={props.on_select.clone()}
                    />
                }) }
            </div>
            if props.verdict.is_none() {
                <div class="controls">
                    <button
                        id="avatar-confirm"
                        class="btn btn-primary btn-lg"
                        disabled={props.selected.is_none()}
                        onclick={on_confirm}
                    >
                        { t("level4.avatar.confirm") }
                    </button>
                </div>
            } else {
                <AvatarReveal />
            }
        </section>
    }
}
