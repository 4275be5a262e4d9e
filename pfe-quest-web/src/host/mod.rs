//! Browser implementations of the level's collaborator traits.

pub mod history;
pub mod navigator;
pub mod notifier;
pub mod progress;
pub mod scheduler;
pub mod speech;

pub use history::{BrowserHistory, use_back_guard};
pub use navigator::RouterNavigator;
pub use notifier::CallbackNotifier;
pub use progress::{LocalProgress, ProgressRecord, StorageError};
pub use scheduler::TimeoutScheduler;
pub use speech::BrowserSpeech;
