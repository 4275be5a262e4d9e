//! Back-navigation deterrent.
//!
//! While installed, every "back" attempt re-pushes the location captured at
//! install time and raises a warning. Best effort only: nothing stops a user
//! from editing the address bar.

use crate::Notifier;
use crate::notice::Notice;

/// The slice of a session history the guard needs.
pub trait History {
    fn current_location(&self) -> String;
    fn push(&self, location: &str);
}

pub struct BackGuard<H: History, T: Notifier> {
    history: H,
    notifier: T,
    location: String,
    installed: bool,
}

impl<H: History, T: Notifier> BackGuard<H, T> {
    /// Push a history entry for the current location and start guarding it.
    pub fn install(history: H, notifier: T) -> Self {
        let location = history.current_location();
        history.push(&location);
        log::debug!("back guard installed at {location}");
        Self {
            history,
            notifier,
            location,
            installed: true,
        }
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub const fn is_installed(&self) -> bool {
        self.installed
    }

    /// Handle a back navigation. Returns `false` once uninstalled.
    pub fn on_back(&self) -> bool {
        if !self.installed {
            return false;
        }
        self.history.push(&self.location);
        self.notifier.notify(Notice::BackBlocked);
        true
    }

    pub fn uninstall(&mut self) {
        if self.installed {
            log::debug!("back guard removed from {}", self.location);
        }
        self.installed = false;
    }
}

impl<H: History, T: Notifier> Drop for BackGuard<H, T> {
    fn drop(&mut self) {
        self.uninstall();
    }
}
