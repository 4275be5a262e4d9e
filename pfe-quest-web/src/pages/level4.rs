use crate::components::game_timer::GameTimer;
use crate::components::level_header::LevelHeader;
use crate::components::progress_bar::ProgressBar;
use crate::components::toast::use_toasts;
use crate::components::ui::avatar_step::AvatarStep;
use crate::components::ui::pitch_step::PitchStep;
use crate::config::{CAMPAIGN_LEVELS, level_config};
use crate::host::{
    BrowserSpeech, CallbackNotifier, LocalProgress, RouterNavigator, TimeoutScheduler,
    use_back_guard,
};
use crate::i18n::t;
use pfe_quest_game::{Collaborators, Direction, LevelSession, Step};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

pub type WebSession =
    LevelSession<LocalProgress, RouterNavigator, CallbackNotifier, TimeoutScheduler, BrowserSpeech>;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct InterviewPageProps {
    /// Fixed shuffle seed; a fresh one is drawn when unset.
    #[prop_or_default]
    pub seed: Option<u64>,
}

fn fresh_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::entropy_seed()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0x5EED
    }
}

/// Run a session action, then re-render.
fn action<A: 'static>(
    session: &Rc<RefCell<WebSession>>,
    refresh: &UseForceUpdateHandle,
    run: impl Fn(&mut WebSession, A) + 'static,
) -> Callback<A> {
    let session = session.clone();
    let refresh = refresh.clone();
    Callback::from(move |arg: A| {
        run(&mut session.borrow_mut(), arg);
        refresh.force_update();
    })
}

/// Level 4, "L'Entretien".
#[function_component(InterviewPage)]
pub fn interview_page(props: &InterviewPageProps) -> Html {
    let notify = use_toasts();
    let navigator = use_navigator();
    let refresh = use_force_update();

    let session = {
        let seed = props.seed;
        let notify = notify.clone();
        let rerender = {
            let refresh = refresh.clone();
            Callback::from(move |()| refresh.force_update())
        };
        use_mut_ref(move || {
            let collaborators = Collaborators {
                progress: LocalProgress,
                navigator: RouterNavigator::new(navigator),
                notifier: CallbackNotifier::new(notify),
                scheduler: TimeoutScheduler::new(rerender.clone()),
                speech: BrowserSpeech::new(rerender),
            };
            WebSession::new(level_config(), collaborators, seed.unwrap_or_else(fresh_seed))
        })
    };
    let completed = use_state(|| LocalProgress.load_or_default().completed_levels());

    use_back_guard(notify);

    #[cfg(target_arch = "wasm32")]
    {
        let session = session.clone();
        let refresh = refresh.clone();
        use_effect_with((), move |()| {
            crate::dom::set_title(&format!("PFE Quest · {}", t("level4.title")));
            // Student info may be edited from another tab.
            let listener = gloo::events::EventListener::new(
                &gloo::utils::window(),
                "storage",
                move |_| {
                    if session.borrow_mut().sync_student() {
                        refresh.force_update();
                    }
                },
            );
            move || drop(listener)
        });
    }

    let on_select = action(&session, &refresh, |s, id: AttrValue| {
        s.select_avatar(&id);
    });
    let on_confirm = action(&session, &refresh, |s, ()| {
        // Rejections are surfaced as notices by the session.
        let _ = s.confirm_avatar();
    });
    let on_move = action(&session, &refresh, |s, (index, direction): (usize, Direction)| {
        s.move_block(index, direction);
    });
    let on_validate = action(&session, &refresh, |s, ()| {
        if let Err(err) = s.validate_pitch() {
            log::warn!("validation ignored: {err}");
        }
    });
    let on_play = action(&session, &refresh, |s, ()| {
        if let Err(err) = s.play_audio() {
            log::warn!("playback ignored: {err}");
        }
    });
    let on_continue = action(&session, &refresh, |s, ()| {
        if let Err(err) = s.continue_level() {
            log::warn!("continue ignored: {err}");
        }
    });

    let view = session.borrow().snapshot();
    let level = view.config().level;

    html! {
        <div class="level-page">
            <div class="level-topbar">
                <ProgressBar current={level} total={CAMPAIGN_LEVELS} completed={(*completed).clone()} />
                <GameTimer />
            </div>
            <LevelHeader
                {level}
                title={t("level4.title")}
                objective={t("level4.objective")}
            />
            {
                match view.step() {
                    Step::Avatar => html! {
                        <AvatarStep
                            selected={view.selected_avatar().map(|a| AttrValue::from(a.id))}
                            verdict={view.avatar_verdict()}
                            {on_select}
                            {on_confirm}
                        />
                    },
                    Step::Pitch => html! {
                        <PitchStep
                            avatar={view.selected_avatar().copied()}
                            blocks={view.blocks().to_vec()}
                            canonical={view.canonical_blocks().to_vec()}
                            verdict={view.pitch_verdict()}
                            playing={view.is_playing()}
                            {on_move}
                            {on_validate}
                            {on_play}
                            {on_continue}
                        />
                    },
                }
            }
        </div>
    }
}
