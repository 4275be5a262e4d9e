//! In-memory collaborators for headless drivers and tests.
//!
//! Every type is a cheap `Clone` over shared state, so a caller can hand one
//! copy to a session and keep another to inspect what happened.

use crate::error::SpeechError;
use crate::guard::History;
use crate::notice::Notice;
use crate::schedule::Scheduler;
use crate::speech::{SpeechSynth, Utterance};
use crate::student::StudentInfo;
use crate::{Navigator, Notifier, ProgressTracker};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Default)]
struct ProgressLog {
    student: StudentInfo,
    completed: Vec<(u8, u32)>,
}

/// Progress store holding student info and every `complete_level` call.
#[derive(Debug, Clone, Default)]
pub struct MemoryProgress {
    inner: Rc<RefCell<ProgressLog>>,
}

impl MemoryProgress {
    #[must_use]
    pub fn with_student(student: StudentInfo) -> Self {
        let progress = Self::default();
        progress.set_student(student);
        progress
    }

    pub fn set_student(&self, student: StudentInfo) {
        self.inner.borrow_mut().student = student;
    }

    /// `(level, score)` pairs in call order.
    #[must_use]
    pub fn completed(&self) -> Vec<(u8, u32)> {
        self.inner.borrow().completed.clone()
    }

    /// Latest score per level.
    #[must_use]
    pub fn scores(&self) -> BTreeMap<u8, u32> {
        self.inner.borrow().completed.iter().copied().collect()
    }
}

impl ProgressTracker for MemoryProgress {
    fn student_info(&self) -> StudentInfo {
        self.inner.borrow().student.clone()
    }

    fn complete_level(&self, level: u8, score: u32) {
        self.inner.borrow_mut().completed.push((level, score));
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    paths: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.paths.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_string());
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

struct ManualSlot {
    due: Duration,
    task: Option<Box<dyn FnOnce()>>,
    cancelled: Rc<Cell<bool>>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    slots: Vec<ManualSlot>,
}

/// Scheduler driven by an explicit virtual clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

/// Cancels its task when dropped.
pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Tasks neither fired nor cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.clock
            .borrow()
            .slots
            .iter()
            .filter(|s| s.task.is_some() && !s.cancelled.get())
            .count()
    }

    /// Move the clock forward and run every live task that came due, in due order.
    /// Returns how many ran.
    pub fn advance(&self, by: Duration) -> usize {
        let due_tasks = {
            let mut clock = self.clock.borrow_mut();
            clock.now += by;
            let now = clock.now;
            let mut due: Vec<(Duration, Box<dyn FnOnce()>)> = clock
                .slots
                .iter_mut()
                .filter(|s| s.due <= now && !s.cancelled.get())
                .filter_map(|s| s.task.take().map(|t| (s.due, t)))
                .collect();
            clock.slots.retain(|s| s.task.is_some() && !s.cancelled.get());
            due.sort_by_key(|(at, _)| *at);
            due
        };
        let count = due_tasks.len();
        for (_, task) in due_tasks {
            task();
        }
        count
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        let cancelled = Rc::new(Cell::new(false));
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + delay;
        clock.slots.push(ManualSlot {
            due,
            task: Some(task),
            cancelled: cancelled.clone(),
        });
        ManualHandle { cancelled }
    }
}

#[derive(Default)]
struct SpeechLog {
    spoken: Vec<Utterance>,
    in_flight: Vec<Box<dyn FnOnce()>>,
}

/// Speech engine that records utterances and settles them on demand.
#[derive(Clone)]
pub struct ScriptedSpeech {
    available: bool,
    log: Rc<RefCell<SpeechLog>>,
}

impl ScriptedSpeech {
    #[must_use]
    pub fn available() -> Self {
        Self {
            available: true,
            log: Rc::default(),
        }
    }

    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            available: false,
            log: Rc::default(),
        }
    }

    #[must_use]
    pub fn spoken(&self) -> Vec<Utterance> {
        self.log.borrow().spoken.clone()
    }

    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.log.borrow().in_flight.len()
    }

    /// Fire the completion callback of every utterance still playing.
    pub fn settle_all(&self) {
        let callbacks = std::mem::take(&mut self.log.borrow_mut().in_flight);
        for settle in callbacks {
            settle();
        }
    }
}

impl SpeechSynth for ScriptedSpeech {
    fn is_available(&self) -> bool {
        self.available
    }

    fn speak(
        &self,
        utterance: Utterance,
        on_settled: Box<dyn FnOnce()>,
    ) -> Result<(), SpeechError> {
        if !self.available {
            return Err(SpeechError::Unsupported);
        }
        let mut log = self.log.borrow_mut();
        log.spoken.push(utterance);
        log.in_flight.push(on_settled);
        Ok(())
    }
}

#[derive(Debug, Default)]
struct HistoryStack {
    entries: Vec<String>,
    pushes: Vec<String>,
}

/// A history stack where `go_back` pops an entry the way a browser would.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    stack: Rc<RefCell<HistoryStack>>,
}

impl MemoryHistory {
    #[must_use]
    pub fn at(location: &str) -> Self {
        let history = Self::default();
        history.stack.borrow_mut().entries.push(location.to_string());
        history
    }

    /// Every location passed to `push`, in order.
    #[must_use]
    pub fn pushes(&self) -> Vec<String> {
        self.stack.borrow().pushes.clone()
    }

    pub fn go_back(&self) {
        let mut stack = self.stack.borrow_mut();
        if stack.entries.len() > 1 {
            stack.entries.pop();
        }
    }
}

impl History for MemoryHistory {
    fn current_location(&self) -> String {
        self.stack.borrow().entries.last().cloned().unwrap_or_default()
    }

    fn push(&self, location: &str) {
        let mut stack = self.stack.borrow_mut();
        stack.entries.push(location.to_string());
        stack.pushes.push(location.to_string());
    }
}
