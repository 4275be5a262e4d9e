use crate::paths::avatar_image;
use pfe_quest_game::AvatarOption;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AvatarTileProps {
    pub avatar: AvatarOption,
    pub selected: bool,
    /// `Some(correct)` once the choice is locked.
    pub verdict: Option<bool>,
    pub on_select: Callback<AttrValue>,
}

#[must_use]
pub fn tile_classes(selected: bool, verdict: Option<bool>) -> Classes {
    let state = match (selected, verdict) {
        (true, None) => Some("selected"),
        (true, Some(true)) => Some("border-success"),
        (true, Some(false)) => Some("border-destructive"),
        (false, _) => None,
    };
    classes!("game-card", "avatar-tile", state, verdict.map(|_| "locked"))
}

#[function_component(AvatarTile)]
pub fn avatar_tile(props: &AvatarTileProps) -> Html {
    let on_click = {
        let on_select = props.on_select.clone();
        let id = AttrValue::from(props.avatar.id);
        Callback::from(move |_| on_select.emit(id.clone()))
    };
    let locked = props.verdict.is_some();

    html! {
        <button
            type="button"
            role="radio"
            class={tile_classes(props.selected, props.verdict)}
            aria-checked={props.selected.to_string()}
            data-avatar={props.avatar.id}
            disabled={locked}
            onclick={on_click}
        >
            <img src={avatar_image(props.avatar.image)} alt={props.avatar.label} class="avatar-portrait" />
            <span class="avatar-label">{ props.avatar.label }</span>
        </button>
    }
}
