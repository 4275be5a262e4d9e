use pfe_quest_game::memory::{
    ManualScheduler, MemoryProgress, RecordingNavigator, RecordingNotifier, ScriptedSpeech,
};
use pfe_quest_game::{
    CANONICAL_IDS, Collaborators, Direction, LevelConfig, LevelError, LevelSession, Notice,
    Severity, Step, StudentInfo,
};
use std::time::Duration;

type Session = LevelSession<
    MemoryProgress,
    RecordingNavigator,
    RecordingNotifier,
    ManualScheduler,
    ScriptedSpeech,
>;

struct Harness {
    session: Session,
    progress: MemoryProgress,
    navigator: RecordingNavigator,
    notifier: RecordingNotifier,
    scheduler: ManualScheduler,
    speech: ScriptedSpeech,
}

fn harness_with(seed: u64, speech: ScriptedSpeech) -> Harness {
    let progress = MemoryProgress::with_student(StudentInfo::new("Amine", "Trabelsi", "Génie Logiciel"));
    let navigator = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let scheduler = ManualScheduler::default();
    let session = LevelSession::new(
        LevelConfig::default(),
        Collaborators {
            progress: progress.clone(),
            navigator: navigator.clone(),
            notifier: notifier.clone(),
            scheduler: scheduler.clone(),
            speech: speech.clone(),
        },
        seed,
    );
    Harness {
        session,
        progress,
        navigator,
        notifier,
        scheduler,
        speech,
    }
}

fn harness(seed: u64) -> Harness {
    harness_with(seed, ScriptedSpeech::available())
}

fn pass_avatar_step(h: &mut Harness, avatar: &str) {
    assert!(h.session.select_avatar(avatar));
    h.session.confirm_avatar().unwrap();
    h.scheduler.advance(Duration::from_millis(1500));
    assert_eq!(h.session.level().step(), Step::Pitch);
}

fn sort_pitch(h: &mut Harness) {
    for (target, id) in CANONICAL_IDS.iter().enumerate() {
        let mut pos = h
            .session
            .level()
            .blocks()
            .iter()
            .position(|b| b.id == *id)
            .unwrap();
        while pos > target {
            assert!(h.session.move_block(pos, Direction::Up));
            pos -= 1;
        }
    }
}

#[test]
fn perfect_run_scores_twenty_and_moves_on() {
    let mut h = harness(2024);
    pass_avatar_step(&mut h, "soigne");
    sort_pitch(&mut h);
    assert_eq!(h.session.validate_pitch(), Ok(true));

    let report = h.session.continue_level().unwrap();
    assert_eq!(report.total, 20);
    assert!(report.is_perfect());
    assert_eq!(h.progress.completed(), vec![(4, 20)]);
    assert_eq!(h.navigator.paths(), vec!["/niveau-5".to_string()]);

    let summary = h.notifier.last().unwrap();
    assert_eq!(summary.severity(), Severity::Success);
    assert!(summary.default_text().contains("20/20"));
    assert_eq!(
        h.notifier.notices(),
        vec![
            Notice::AvatarCorrect,
            Notice::PitchCorrect,
            Notice::LevelSummary {
                level: 4,
                score: 20,
                max: 20
            },
        ]
    );
}

#[test]
fn wrong_avatar_with_right_pitch_scores_ten() {
    let mut h = harness(31);
    pass_avatar_step(&mut h, "casual");
    assert_eq!(h.notifier.notices()[0], Notice::AvatarIncorrect);
    sort_pitch(&mut h);
    h.session.validate_pitch().unwrap();

    let report = h.session.continue_level().unwrap();
    assert_eq!(report.total, 10);
    assert_eq!(h.progress.scores().get(&4), Some(&10));
    assert_eq!(h.notifier.last().unwrap().severity(), Severity::Warning);
}

#[test]
fn both_wrong_scores_zero() {
    let mut h = harness(5);
    pass_avatar_step(&mut h, "sportif");
    sort_pitch(&mut h);
    assert!(h.session.move_block(2, Direction::Down));
    assert_eq!(h.session.validate_pitch(), Ok(false));
    assert_eq!(h.session.continue_level().unwrap().total, 0);
}

#[test]
fn confirm_without_avatar_records_nothing() {
    let mut h = harness(8);
    assert_eq!(h.session.confirm_avatar(), Err(LevelError::NoAvatarSelected));
    assert_eq!(h.notifier.notices(), vec![Notice::AvatarMissing]);
    assert_eq!(Notice::AvatarMissing.severity(), Severity::Error);
    h.scheduler.advance(Duration::from_secs(3));
    assert_eq!(h.session.level().step(), Step::Avatar);
    assert!(h.progress.completed().is_empty());
    assert!(h.navigator.paths().is_empty());
}

#[test]
fn audio_is_locked_after_incorrect_pitch() {
    let mut h = harness(12);
    pass_avatar_step(&mut h, "soigne");
    sort_pitch(&mut h);
    h.session.move_block(0, Direction::Down);
    assert_eq!(h.session.validate_pitch(), Ok(false));
    assert_eq!(h.session.play_audio(), Err(LevelError::PlaybackLocked));
    assert!(h.speech.spoken().is_empty());
}

#[test]
fn audio_before_validation_is_locked() {
    let mut h = harness(12);
    pass_avatar_step(&mut h, "soigne");
    assert_eq!(h.session.play_audio(), Err(LevelError::PlaybackLocked));
}

#[test]
fn audio_plays_once_until_settled() {
    let mut h = harness(19);
    pass_avatar_step(&mut h, "soigne");
    sort_pitch(&mut h);
    h.session.validate_pitch().unwrap();

    assert_eq!(h.session.play_audio(), Ok(true));
    assert!(h.session.level().is_playing());
    assert_eq!(h.session.play_audio(), Err(LevelError::AlreadyPlaying));
    assert_eq!(h.speech.spoken().len(), 1);

    let utterance = &h.speech.spoken()[0];
    assert_eq!(utterance.lang, "fr-FR");
    assert!(utterance.text.contains("Je m'appelle Amine Trabelsi"));
    assert!(utterance.text.ends_with("projets concrets."));

    h.speech.settle_all();
    assert!(!h.session.level().is_playing());
    assert_eq!(h.session.play_audio(), Ok(true));
    assert_eq!(h.speech.spoken().len(), 2);
}

#[test]
fn missing_speech_engine_is_informational() {
    let mut h = harness_with(19, ScriptedSpeech::unavailable());
    pass_avatar_step(&mut h, "soigne");
    sort_pitch(&mut h);
    h.session.validate_pitch().unwrap();

    assert_eq!(h.session.play_audio(), Ok(false));
    let notice = h.notifier.last().unwrap();
    assert_eq!(notice, Notice::SpeechUnsupported);
    assert_eq!(notice.severity(), Severity::Info);
    assert!(!h.session.level().is_playing());
}

#[test]
fn teardown_before_advance_cancels_transition() {
    let mut h = harness(3);
    h.session.select_avatar("soigne");
    h.session.confirm_avatar().unwrap();
    h.scheduler.advance(Duration::from_millis(700));
    let Harness {
        session, scheduler, ..
    } = h;
    drop(session);
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.advance(Duration::from_secs(2)), 0);
}

#[test]
fn continue_is_recorded_once() {
    let mut h = harness(44);
    pass_avatar_step(&mut h, "soigne");
    h.session.validate_pitch().unwrap();
    let first = h.session.continue_level().unwrap();
    let second = h.session.continue_level().unwrap();
    assert_eq!(first, second);
    assert_eq!(h.progress.completed().len(), 1);
    assert_eq!(h.navigator.paths().len(), 1);
}

#[test]
fn validating_twice_notifies_once() {
    let mut h = harness(44);
    pass_avatar_step(&mut h, "soigne");
    let first = h.session.validate_pitch().unwrap();
    assert_eq!(h.session.validate_pitch(), Ok(first));
    let verdicts = h
        .notifier
        .notices()
        .into_iter()
        .filter(|n| matches!(n, Notice::PitchCorrect | Notice::PitchIncorrect))
        .count();
    assert_eq!(verdicts, 1);
}

#[test]
fn student_change_reshuffles_content_before_validation() {
    let mut h = harness(60);
    h.progress
        .set_student(StudentInfo::new("Sarra", "Ben Ali", "Télécoms"));
    assert!(h.session.sync_student());
    assert!(!h.session.sync_student());
    let level = h.session.level();
    let mut ids: Vec<&str> = level.blocks().iter().map(|b| b.id).collect();
    ids.sort_unstable();
    let mut expected = CANONICAL_IDS.to_vec();
    expected.sort_unstable();
    assert_eq!(ids, expected);
    assert!(
        level
            .blocks()
            .iter()
            .any(|b| b.content.contains("Sarra Ben Ali"))
    );
}

#[test]
fn missing_student_fields_use_defaults() {
    let progress = MemoryProgress::default();
    let session = LevelSession::new(
        LevelConfig::default(),
        Collaborators {
            progress,
            navigator: RecordingNavigator::default(),
            notifier: RecordingNotifier::default(),
            scheduler: ManualScheduler::default(),
            speech: ScriptedSpeech::available(),
        },
        1,
    );
    assert!(
        session
            .level()
            .canonical_blocks()
            .iter()
            .any(|b| b.content == "Je m'appelle Prénom Nom, étudiant(e) en 3ème année Informatique.")
    );
}
