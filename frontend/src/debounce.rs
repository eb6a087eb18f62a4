//! Debounced commit of free-text input.
//!
//! The search box updates its visible value on every keystroke but only
//! commits into the URL after the input has been quiet for
//! [`SEARCH_DEBOUNCE_MS`]. `Debouncer` is the timer-free state machine
//! (one pending slot, last write wins, explicit `flush`/`cancel` so
//! tests never sleep); [`use_debounced_input`] binds it to a real
//! browser timeout.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Quiescence window for search boxes, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u32 = 750;

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingCommit {
    value: String,
    deadline_ms: u64,
}

/// Single-slot cancellable commit window. A new `input` replaces any
/// pending value and restarts the window, so at most one commit is
/// outstanding and only the last value of a burst ever fires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Debouncer {
    window_ms: u64,
    pending: Option<PendingCommit>,
}

impl Debouncer {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms: u64::from(window_ms),
            pending: None,
        }
    }

    /// Records a keystroke at `now_ms`, superseding any pending commit.
    pub fn input(&mut self, value: impl Into<String>, now_ms: u64) {
        self.pending = Some(PendingCommit {
            value: value.into(),
            deadline_ms: now_ms + self.window_ms,
        });
    }

    /// Fires the pending commit if the window has elapsed by `now_ms`.
    /// Fires at most once per window; afterwards the slot is empty.
    pub fn poll(&mut self, now_ms: u64) -> Option<String> {
        match &self.pending {
            Some(pending) if now_ms >= pending.deadline_ms => {
                self.pending.take().map(|p| p.value)
            }
            _ => None,
        }
    }

    /// Commits the pending value immediately, if any.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.value)
    }

    /// Drops the pending value without committing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// The value waiting to commit, if any.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.value.as_str())
    }
}

/// Debounced text input binding.
///
/// The returned state handle tracks the draft value synchronously; the
/// input callback reschedules a single browser timeout so `on_commit`
/// fires once per quiescence window with the latest value. Dropping the
/// component (unmount) drops the timeout, which cancels it.
#[hook]
pub fn use_debounced_input(
    initial: String,
    delay_ms: u32,
    on_commit: Callback<String>,
) -> (UseStateHandle<String>, Callback<String>) {
    let draft = use_state(|| initial);
    let timer = use_mut_ref(|| None::<Timeout>);

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |next: String| {
            draft.set(next.clone());

            // one pending commit at a time: reschedule, never stack
            if let Some(handle) = timer.borrow_mut().take() {
                handle.cancel();
            }
            let on_commit = on_commit.clone();
            timer.borrow_mut().replace(Timeout::new(delay_ms, move || {
                on_commit.emit(next);
            }));
        })
    };

    (draft, on_input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_commits_once_with_last_value() {
        let mut debouncer = Debouncer::new(SEARCH_DEBOUNCE_MS);
        debouncer.input("r", 0);
        debouncer.input("re", 100);
        debouncer.input("red", 200);

        // nothing fires while the window is still open
        assert_eq!(debouncer.poll(300), None);
        assert_eq!(debouncer.poll(949), None);

        // exactly one commit, 750ms after the last keystroke
        assert_eq!(debouncer.poll(950), Some("red".to_string()));
        assert_eq!(debouncer.poll(2000), None);
    }

    #[test]
    fn test_new_input_restarts_the_window() {
        let mut debouncer = Debouncer::new(750);
        debouncer.input("a", 0);
        // would have fired at 750, but a new keystroke supersedes it
        debouncer.input("ab", 700);
        assert_eq!(debouncer.poll(750), None);
        assert_eq!(debouncer.poll(1450), Some("ab".to_string()));
    }

    #[test]
    fn test_flush_commits_immediately() {
        let mut debouncer = Debouncer::new(750);
        debouncer.input("draft", 0);
        assert_eq!(debouncer.flush(), Some("draft".to_string()));
        assert_eq!(debouncer.flush(), None);
        assert_eq!(debouncer.poll(10_000), None);
    }

    #[test]
    fn test_cancel_discards_pending_value() {
        let mut debouncer = Debouncer::new(750);
        debouncer.input("typo", 0);
        debouncer.cancel();
        assert_eq!(debouncer.pending(), None);
        assert_eq!(debouncer.poll(10_000), None);
    }

    #[test]
    fn test_pending_exposes_latest_value() {
        let mut debouncer = Debouncer::new(750);
        assert_eq!(debouncer.pending(), None);
        debouncer.input("r", 0);
        debouncer.input("re", 1);
        assert_eq!(debouncer.pending(), Some("re"));
    }

    #[test]
    fn test_idle_debouncer_never_fires() {
        let mut debouncer = Debouncer::new(750);
        assert_eq!(debouncer.poll(u64::MAX), None);
    }

    #[test]
    fn test_empty_value_still_commits() {
        // clearing the search box must commit the removal
        let mut debouncer = Debouncer::new(750);
        debouncer.input("red", 0);
        debouncer.input("", 100);
        assert_eq!(debouncer.poll(850), Some(String::new()));
    }
}
