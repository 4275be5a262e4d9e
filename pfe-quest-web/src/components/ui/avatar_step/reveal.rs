use crate::i18n::t;
use crate::paths::avatar_image;
use pfe_quest_game::correct_avatar;
use yew::prelude::*;

/// The expected outfit, shown once the choice is locked.
#[function_component(AvatarReveal)]
pub fn avatar_reveal() -> Html {
    html! {
        <div class="answer-reveal" aria-live="polite">
            <p class="muted">{ t("level4.avatar.answer_label") }</p>
            <div class="answer-row">
                <img
                    src={avatar_image(correct_avatar().image)}
                    alt={t("level4.avatar.answer_alt")}
                    class="avatar-thumb"
                />
                <span>{ t("level4.avatar.answer") }</span>
            </div>
        </div>
    }
}
