//! Recording state and operation options.

use crate::events::SubscriptionId;
use crate::paths::ResolvedPath;

/// Whether a session is being tracked for autosave.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecordingState {
    /// No session tracked and no subscription registered.
    #[default]
    Idle,
    /// Trigger events re-save the session at `path`.
    Recording {
        /// The tracked session path.
        path: ResolvedPath,
        /// The registered trigger-event subscription.
        subscription: SubscriptionId,
    },
}

impl RecordingState {
    /// True while recording.
    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording { .. })
    }

    /// The tracked path while recording.
    pub fn path(&self) -> Option<&ResolvedPath> {
        match self {
            Self::Recording { path, .. } => Some(path),
            Self::Idle => None,
        }
    }

    /// The active subscription while recording.
    pub fn subscription(&self) -> Option<SubscriptionId> {
        match self {
            Self::Recording { subscription, .. } => Some(*subscription),
            Self::Idle => None,
        }
    }
}

/// Options for [`save`](super::AutosaveController::save).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOptions {
    /// Keep re-saving on trigger events after this save.
    pub autosave: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self { autosave: true }
    }
}

/// Options for [`load`](super::AutosaveController::load).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Start recording at the loaded path.
    pub autosave: bool,
    /// Do not notify the user when the session file is missing.
    pub silent: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            autosave: true,
            silent: false,
        }
    }
}

/// Options for [`stop_autosave`](super::AutosaveController::stop_autosave).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopOptions {
    /// Write the session one last time before stopping.
    pub save: bool,
}

impl Default for StopOptions {
    fn default() -> Self {
        Self { save: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_has_no_path_or_subscription() {
        let state = RecordingState::default();
        assert!(!state.is_recording());
        assert!(state.path().is_none());
        assert!(state.subscription().is_none());
    }

    #[test]
    fn option_defaults() {
        assert!(SaveOptions::default().autosave);
        assert_eq!(
            LoadOptions::default(),
            LoadOptions {
                autosave: true,
                silent: false
            }
        );
        assert!(StopOptions::default().save);
    }
}
