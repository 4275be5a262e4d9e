use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PitchActionsProps {
    pub verdict: Option<bool>,
    pub playing: bool,
    pub on_validate: Callback<()>,
    pub on_play: Callback<()>,
    pub on_continue: Callback<()>,
}

fn relay(cb: &Callback<()>) -> Callback<MouseEvent> {
    let cb = cb.clone();
    Callback::from(move |_| cb.emit(()))
}

/// Validate before the verdict; afterwards, continue (plus listen when correct).
#[function_component(PitchActions)]
pub fn pitch_actions(props: &PitchActionsProps) -> Html {
    let listen_label = if props.playing {
        t("level4.pitch.playing")
    } else {
        t("level4.pitch.listen")
    };

    match props.verdict {
        None => html! {
            <div class="controls">
                <button id="pitch-validate" class="btn btn-primary btn-lg" onclick={relay(&props.on_validate)}>
                    { t("level4.pitch.validate") }
                </button>
            </div>
        },
        Some(correct) => html! {
            <div class="controls">
                if correct {
                    <button
                        id="pitch-listen"
                        class="btn btn-outline btn-lg"
                        aria-busy={props.playing.to_string()}
                        onclick={relay(&props.on_play)}
                    >
                        <span aria-hidden="true">{"🔊 "}</span>
                        { listen_label }
                    </button>
                }
                <button
                    id="level-continue"
                    class={classes!("btn", "btn-lg", if correct { "btn-success" } else { "btn-primary" })}
                    onclick={relay(&props.on_continue)}
                >
                    { t("level4.pitch.continue") }
                </button>
            </div>
        },
    }
}
