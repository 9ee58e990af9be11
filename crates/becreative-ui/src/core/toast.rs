//! Notification queue shown by the toast host.

use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;

use yew::Reducible;

use crate::core::config::DEFAULT_TOAST_LIMIT;

/// Visual tone of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Completed action.
    Success,
    /// Failed action.
    Error,
}

impl ToastKind {
    /// CSS modifier class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// One visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic id, unique for the page lifetime.
    pub id: u64,
    /// Tone.
    pub kind: ToastKind,
    /// Bold first line.
    pub title: String,
    /// Detail line.
    pub message: String,
}

/// Updates accepted by [`ToastQueue`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastAction {
    /// Append a toast, dropping the oldest beyond the limit.
    Push {
        /// Tone.
        kind: ToastKind,
        /// Bold first line.
        title: String,
        /// Detail line.
        message: String,
    },
    /// Remove a toast by id. Unknown ids are ignored.
    Dismiss(u64),
}

impl ToastAction {
    /// Shorthand for a success push.
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Push {
            kind: ToastKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Shorthand for an error push.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Push {
            kind: ToastKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Bounded FIFO of visible toasts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastQueue {
    items: VecDeque<Toast>,
    next_id: u64,
    limit: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_limit(DEFAULT_TOAST_LIMIT)
    }
}

impl ToastQueue {
    /// Empty queue keeping at most `limit` toasts (at least one).
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            items: VecDeque::new(),
            next_id: 0,
            limit: limit.max(1),
        }
    }

    /// Visible toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    /// Visible toasts as an owned list for props.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Toast> {
        self.items.iter().cloned().collect()
    }

    /// Next state after `action`.
    #[must_use]
    pub fn apply(&self, action: ToastAction) -> Self {
        let mut next = self.clone();
        match action {
            ToastAction::Push {
                kind,
                title,
                message,
            } => {
                next.next_id += 1;
                next.items.push_back(Toast {
                    id: next.next_id,
                    kind,
                    title,
                    message,
                });
                while next.items.len() > next.limit {
                    next.items.pop_front();
                }
            }
            ToastAction::Dismiss(id) => next.items.retain(|toast| toast.id != id),
        }
        next
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Timer bookkeeping for the toast host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimerPlan {
    /// Visible toasts that have no timer yet, oldest first.
    pub start: Vec<u64>,
    /// Scheduled timers whose toast is gone.
    pub cancel: Vec<u64>,
}

/// Compare the ids that already own a timer with the visible toasts.
///
/// A toast keeps the timer it got when it first appeared, so pushes and
/// dismissals never extend the lifetime of the toasts still on screen.
pub fn plan_timers(scheduled: impl IntoIterator<Item = u64>, visible: &[Toast]) -> TimerPlan {
    let scheduled: BTreeSet<u64> = scheduled.into_iter().collect();
    let shown: BTreeSet<u64> = visible.iter().map(|toast| toast.id).collect();
    TimerPlan {
        start: visible
            .iter()
            .map(|toast| toast.id)
            .filter(|id| !scheduled.contains(id))
            .collect(),
        cancel: scheduled.difference(&shown).copied().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: &ToastQueue, title: &str) -> ToastQueue {
        queue.apply(ToastAction::success(title, "ok"))
    }

    #[test]
    fn oldest_toast_is_dropped_past_the_limit() {
        let mut queue = ToastQueue::with_limit(4);
        for title in ["a", "b", "c", "d", "e"] {
            queue = push(&queue, title);
        }
        let titles: Vec<_> = queue.iter().map(|toast| toast.title.as_str()).collect();
        assert_eq!(titles, ["b", "c", "d", "e"]);
    }

    #[test]
    fn ids_stay_unique_after_dismissal() {
        let queue = push(&push(&ToastQueue::default(), "a"), "b");
        let first = queue.iter().next().map(|toast| toast.id);
        let queue = queue.apply(ToastAction::Dismiss(first.unwrap_or_default()));
        let queue = push(&queue, "c");
        let ids: Vec<_> = queue.iter().map(|toast| toast.id).collect();
        assert_eq!(ids, [2, 3]);
    }

    #[test]
    fn unknown_dismissals_are_ignored() {
        let queue = push(&ToastQueue::default(), "a");
        assert_eq!(queue.apply(ToastAction::Dismiss(99)), queue);
    }

    #[test]
    fn zero_limit_still_shows_latest() {
        let queue = push(&push(&ToastQueue::with_limit(0), "a"), "b");
        assert_eq!(queue.iter().count(), 1);
        assert_eq!(queue.to_vec()[0].title, "b");
    }

    #[test]
    fn error_shorthand_sets_kind() {
        let queue = ToastQueue::default().apply(ToastAction::error("Erro", "falhou"));
        assert_eq!(queue.to_vec()[0].kind.class(), "error");
    }

    #[test]
    fn existing_toasts_keep_their_timers_when_another_arrives() {
        let first = push(&ToastQueue::default(), "a");
        let plan = plan_timers([], &first.to_vec());
        assert_eq!(plan.start, [1]);
        assert!(plan.cancel.is_empty());

        let second = push(&first, "b");
        let plan = plan_timers([1], &second.to_vec());
        assert_eq!(plan.start, [2]);
        assert!(plan.cancel.is_empty());
    }

    #[test]
    fn dismissed_and_evicted_toasts_cancel_their_timers() {
        let mut queue = ToastQueue::with_limit(2);
        for title in ["a", "b", "c"] {
            queue = push(&queue, title);
        }
        let queue = queue.apply(ToastAction::Dismiss(3));
        let plan = plan_timers([1, 2, 3], &queue.to_vec());
        assert!(plan.start.is_empty());
        assert_eq!(plan.cancel, [1, 3]);
    }

    #[test]
    fn unchanged_queue_needs_no_timer_work() {
        let queue = push(&push(&ToastQueue::default(), "a"), "b");
        assert_eq!(plan_timers([1, 2], &queue.to_vec()), TimerPlan::default());
    }
}
