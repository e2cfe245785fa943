//! Page-scoped state containers.
//!
//! State lives for one page's lifetime and is passed to child views
//! explicitly, never stored in module-level globals. Signals are `Copy`,
//! so the containers move freely into event handlers.

use leptos::prelude::*;
use web_sys::File;

use crate::transfer::AbortHandle;
use crate::types::{Message, TransferStatus};

/// Chat page state: the append-only message log plus UI flags.
#[derive(Clone, Copy)]
pub struct ChatState {
    pub messages: RwSignal<Vec<Message>>,
    pub is_loading: RwSignal<bool>,
    pub show_upload: RwSignal<bool>,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(vec![Message::welcome()]),
            is_loading: RwSignal::new(false),
            show_upload: RwSignal::new(false),
        }
    }

    pub fn push(&self, message: Message) {
        self.messages.update(|log| log.push(message));
    }

    /// True while only the pre-seeded welcome message is in the log.
    pub fn only_welcome(&self) -> bool {
        self.messages.with(|log| log.len() == 1)
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

/// Status banner under the upload form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub tone: BannerTone,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerTone {
    Success,
    Error,
}

/// Upload form state for one transfer at a time.
///
/// Invariant: the abort handle is present exactly while a transfer is in
/// flight. File and handle are JS values, so they live in local signals.
#[derive(Clone, Copy)]
pub struct TransferState {
    pub file: RwSignal<Option<File>, LocalStorage>,
    pub progress: RwSignal<u8>,
    pub status: RwSignal<TransferStatus>,
    pub banner: RwSignal<Option<Banner>>,
    pub abort: RwSignal<Option<AbortHandle>, LocalStorage>,
}

impl TransferState {
    pub fn new() -> Self {
        Self {
            file: RwSignal::new_local(None),
            progress: RwSignal::new(0),
            status: RwSignal::new(TransferStatus::Idle),
            banner: RwSignal::new(None),
            abort: RwSignal::new_local(None),
        }
    }

    pub fn in_flight(&self) -> bool {
        self.status.get() == TransferStatus::Uploading
    }

    /// Mark a transfer as started and store its abort handle.
    pub fn begin(&self, handle: AbortHandle) {
        self.progress.set(0);
        self.banner.set(None);
        self.status.set(TransferStatus::Uploading);
        self.abort.set(Some(handle));
    }

    pub fn finish_success(&self, message: String) {
        self.abort.set(None);
        self.progress.set(100);
        self.status.set(TransferStatus::Success);
        self.banner.set(Some(Banner {
            tone: BannerTone::Success,
            message,
        }));
    }

    pub fn finish_error(&self, message: String) {
        self.abort.set(None);
        self.status.set(TransferStatus::Error);
        self.banner.set(Some(Banner {
            tone: BannerTone::Error,
            message,
        }));
    }

    /// Abort the in-flight transfer, if any. The canceled status is
    /// terminal: the aborted future's result is discarded by the caller.
    pub fn cancel(&self) {
        if let Some(handle) = self.abort.get_untracked() {
            handle.abort();
        }
        self.abort.set(None);
        self.status.set(TransferStatus::Canceled);
        self.banner.set(Some(Banner {
            tone: BannerTone::Error,
            message: "Upload canceled.".to_string(),
        }));
    }

    pub fn reset(&self) {
        self.file.set(None);
        self.progress.set(0);
        self.status.set(TransferStatus::Idle);
        self.banner.set(None);
        self.abort.set(None);
    }
}

impl Default for TransferState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_transfer_ends_at_full_progress() {
        let state = TransferState::new();
        state.status.set(TransferStatus::Uploading);
        state.progress.set(40);

        state.finish_success("done".to_string());

        assert_eq!(state.progress.get_untracked(), 100);
        assert_eq!(state.status.get_untracked(), TransferStatus::Success);
        let banner = state.banner.get_untracked().unwrap();
        assert_eq!(banner.tone, BannerTone::Success);
        assert!(state.abort.with_untracked(|handle| handle.is_none()));
    }

    #[test]
    fn failed_transfer_keeps_the_error_banner() {
        let state = TransferState::new();
        state.status.set(TransferStatus::Uploading);

        state.finish_error("Upload failed (500): boom".to_string());

        assert_eq!(state.status.get_untracked(), TransferStatus::Error);
        let banner = state.banner.get_untracked().unwrap();
        assert_eq!(banner.tone, BannerTone::Error);
        assert_eq!(banner.message, "Upload failed (500): boom");
    }

    #[test]
    fn cancel_is_terminal() {
        let state = TransferState::new();
        state.status.set(TransferStatus::Uploading);

        state.cancel();

        // the canceled transfer's late result is discarded by the caller,
        // so this is the last transition the form sees
        assert_eq!(state.status.get_untracked(), TransferStatus::Canceled);
        assert!(state.abort.with_untracked(|handle| handle.is_none()));
        assert_eq!(
            state.banner.get_untracked().unwrap().message,
            "Upload canceled."
        );
    }

    #[test]
    fn reset_returns_to_idle() {
        let state = TransferState::new();
        state.status.set(TransferStatus::Uploading);
        state.progress.set(60);

        state.reset();

        assert_eq!(state.status.get_untracked(), TransferStatus::Idle);
        assert_eq!(state.progress.get_untracked(), 0);
        assert!(state.banner.get_untracked().is_none());
    }
}
