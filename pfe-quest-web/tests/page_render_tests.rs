use futures::executor::block_on;
use pfe_quest_game::{Notice, Severity, StudentInfo, canonical_blocks, find_avatar};
use pfe_quest_web::components::level_header::{LevelHeader, LevelHeaderProps};
use pfe_quest_web::components::progress_bar::{ProgressBar, ProgressBarProps};
use pfe_quest_web::components::toast::{ToastItem, ToastList, ToastListProps};
use pfe_quest_web::components::ui::pitch_step::{PitchStep, PitchStepProps};
use pfe_quest_web::i18n::notice_text;
use pfe_quest_web::pages::{
    home::{HomePage, HomePageProps},
    level4::{InterviewPage, InterviewPageProps},
    next_level::{NextLevelPage, NextLevelPageProps},
    not_found::{NotFound, Props as NotFoundProps},
};
use yew::{Callback, LocalServerRenderer};

#[test]
fn home_page_offers_level_four() {
    pfe_quest_web::i18n::set_lang("fr");
    let props = HomePageProps {
        on_start: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains("PFE Quest"));
    assert!(html.contains("Commencer le niveau 4"));
    assert!(html.contains("id=\"home-start\""));
}

#[test]
fn interview_page_renders_in_english() {
    pfe_quest_web::i18n::set_lang("en");
    let html = block_on(
        LocalServerRenderer::<InterviewPage>::with_props(InterviewPageProps { seed: Some(1) })
            .render(),
    );
    assert!(html.contains("The Interview"));
    assert!(html.contains("Level 4"));
    assert!(html.contains("Choose your avatar for the interview"));
    assert_eq!(html.matches("data-avatar=").count(), 4);
    assert!(html.contains("/static/img/avatars/avatar-casual.webp"));
}

#[test]
fn interview_page_is_stable_for_a_seed() {
    pfe_quest_web::i18n::set_lang("fr");
    let render = || {
        block_on(
            LocalServerRenderer::<InterviewPage>::with_props(InterviewPageProps {
                seed: Some(77),
            })
            .render(),
        )
    };
    assert_eq!(render(), render());
}

#[test]
fn progress_bar_marks_current_and_done_levels() {
    pfe_quest_web::i18n::set_lang("fr");
    let props = ProgressBarProps {
        current: 4,
        total: 6,
        completed: vec![1, 2, 3],
    };
    let html = block_on(LocalServerRenderer::<ProgressBar>::with_props(props).render());
    assert!(html.contains("Niveau 4 sur 6"));
    assert_eq!(html.matches("done").count(), 3);
    assert!(html.contains("current"));
}

#[test]
fn level_header_shows_objective() {
    pfe_quest_web::i18n::set_lang("fr");
    let props = LevelHeaderProps {
        level: 4,
        title: "L'Entretien".into(),
        objective: "Adopter une posture professionnelle".into(),
    };
    let html = block_on(LocalServerRenderer::<LevelHeader>::with_props(props).render());
    assert!(html.contains("Niveau 4"));
    assert!(html.contains("Objectif"));
    assert!(html.contains("Adopter une posture professionnelle"));
}

#[test]
fn pitch_step_uses_student_identity() {
    pfe_quest_web::i18n::set_lang("fr");
    let identity = StudentInfo::new("Amine", "Trabelsi", "Génie Logiciel").identity();
    let canonical = canonical_blocks(&identity);
    let props = PitchStepProps {
        avatar: find_avatar("sportif").copied(),
        blocks: canonical.iter().rev().cloned().collect(),
        canonical,
        verdict: Some(false),
        playing: false,
        on_move: Callback::noop(),
        on_validate: Callback::noop(),
        on_play: Callback::noop(),
        on_continue: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<PitchStep>::with_props(props).render());
    assert!(html.contains("Je m'appelle Amine Trabelsi"));
    assert!(html.contains("Génie Logiciel"));
    assert!(html.contains("avatar-sportif.jpg"));
    assert!(html.contains("1."));
    assert!(!html.contains("Écouter mon pitch"));
}

#[test]
fn toast_list_shows_localized_notice() {
    pfe_quest_web::i18n::set_lang("en");
    let notice = Notice::LevelSummary {
        level: 4,
        score: 20,
        max: 20,
    };
    let props = ToastListProps {
        toasts: vec![ToastItem {
            id: 3,
            severity: notice.severity(),
            text: notice_text(&notice).into(),
        }],
        on_dismiss: Callback::noop(),
    };
    assert_eq!(notice.severity(), Severity::Success);
    let html = block_on(LocalServerRenderer::<ToastList>::with_props(props).render());
    assert!(html.contains("20/20"));
    assert!(html.contains("alert-success"));
}

#[test]
fn next_level_and_not_found_link_home() {
    pfe_quest_web::i18n::set_lang("fr");
    let html = block_on(
        LocalServerRenderer::<NextLevelPage>::with_props(NextLevelPageProps {
            on_go_home: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Niveau 5"));
    assert!(html.contains("data-score=\"0\""));
    assert!(html.contains("Retour à l'accueil"));

    let html = block_on(
        LocalServerRenderer::<NotFound>::with_props(NotFoundProps {
            on_go_home: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Page introuvable"));
}
