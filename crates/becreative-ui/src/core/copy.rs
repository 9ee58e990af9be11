//! Copy-to-clipboard service with a transient "copied" indicator.
//!
//! # Design
//! - Clipboard access sits behind [`ClipboardWriter`] so the flow tests natively.
//! - The indicator is keyed by label and stamped with a ticket; an expiry only
//!   clears the indicator it was scheduled for, so a stale timer never hides a
//!   newer copy.

use std::rc::Rc;

use async_trait::async_trait;
use thiserror::Error;
use yew::Reducible;

use crate::core::toast::ToastAction;

/// Clipboard write failures.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// The page has no clipboard API (insecure context or old browser).
    #[error("clipboard API is unavailable")]
    Unavailable,
    /// The browser refused the write.
    #[error("clipboard write was rejected: {0}")]
    Rejected(String),
}

/// Async text sink for the system clipboard.
#[async_trait(?Send)]
pub trait ClipboardWriter {
    /// Replace the clipboard contents with `text`.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Result of one copy attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The text reached the clipboard.
    Copied {
        /// Indicator label for the copied item.
        label: String,
    },
    /// The write failed; no indicator is set.
    Failed(ClipboardError),
}

impl CopyOutcome {
    /// Toast reporting this outcome.
    #[must_use]
    pub fn toast(&self) -> ToastAction {
        match self {
            Self::Copied { label } => ToastAction::success(
                "Copiado!",
                format!("{label} copiado para a área de transferência."),
            ),
            Self::Failed(_) => {
                ToastAction::error("Erro ao copiar", "Não foi possível copiar o conteúdo.")
            }
        }
    }

    /// Indicator update for this outcome, stamped with `ticket`.
    #[must_use]
    pub fn indicator(&self, ticket: u64) -> Option<CopyAction> {
        match self {
            Self::Copied { label } => Some(CopyAction::Mark {
                label: label.clone(),
                ticket,
            }),
            Self::Failed(_) => None,
        }
    }
}

/// Write `text` once and report the outcome. No retries.
pub async fn copy_text<W>(writer: &W, text: &str, label: &str) -> CopyOutcome
where
    W: ClipboardWriter + ?Sized,
{
    match writer.write_text(text).await {
        Ok(()) => CopyOutcome::Copied {
            label: label.to_owned(),
        },
        Err(err) => CopyOutcome::Failed(err),
    }
}

/// Label of the most recently copied item, if still fresh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopyIndicator {
    label: Option<String>,
    ticket: u64,
}

/// Updates accepted by [`CopyIndicator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyAction {
    /// Show `label` as copied.
    Mark {
        /// Copied item label.
        label: String,
        /// Stamp identifying this copy.
        ticket: u64,
    },
    /// Clear the indicator if it still carries `ticket`.
    Expire {
        /// Stamp of the copy whose timer fired.
        ticket: u64,
    },
}

impl CopyIndicator {
    /// Whether `label` is the fresh copied item.
    #[must_use]
    pub fn is_copied(&self, label: &str) -> bool {
        self.label.as_deref() == Some(label)
    }

    /// Next state after `action`.
    #[must_use]
    pub fn apply(&self, action: CopyAction) -> Self {
        match action {
            CopyAction::Mark { label, ticket } => Self {
                label: Some(label),
                ticket,
            },
            CopyAction::Expire { ticket } if ticket == self.ticket => Self {
                label: None,
                ticket,
            },
            CopyAction::Expire { .. } => self.clone(),
        }
    }
}

impl Reducible for CopyIndicator {
    type Action = CopyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CopyAction::Expire { ticket } if ticket != self.ticket => self,
            action => Rc::new(self.apply(action)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use becreative_catalog::colors::find_token;
    use becreative_catalog::components::COMPONENTS;
    use becreative_catalog::documentation::code_samples;
    use becreative_catalog::forms::FORM_PATTERNS;
    use becreative_catalog::grid::{GRID_PATTERNS, SPACING_SCALE};
    use becreative_catalog::icons::ICONS;
    use becreative_catalog::naming::{LAYER_NAMING_RULES, TOKEN_CONVENTIONS};
    use becreative_catalog::navigation::NAVIGATION_VARIANTS;
    use becreative_catalog::shadows::SHADOWS;
    use becreative_catalog::typography::TYPE_SCALE;

    use super::*;
    use crate::core::toast::{ToastKind, ToastQueue};
    use crate::core::ui::{SwatchVariant, swatch_label};

    #[derive(Default)]
    struct FakeClipboard {
        writes: RefCell<Vec<String>>,
        reject: Option<ClipboardError>,
    }

    impl FakeClipboard {
        fn rejecting(err: ClipboardError) -> Self {
            Self {
                writes: RefCell::default(),
                reject: Some(err),
            }
        }
    }

    #[async_trait(?Send)]
    impl ClipboardWriter for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if let Some(err) = &self.reject {
                return Err(err.clone());
            }
            self.writes.borrow_mut().push(text.to_owned());
            Ok(())
        }
    }

    #[tokio::test]
    async fn primary_light_value_lands_on_clipboard() {
        let clipboard = FakeClipboard::default();
        let token = find_token("bc-primary-500").expect("token");
        let label = swatch_label(token.name, SwatchVariant::Light);

        let outcome = copy_text(&clipboard, token.light, &label).await;

        assert_eq!(clipboard.writes.borrow().as_slice(), ["#a855f7"]);
        let mark = outcome.indicator(1).expect("indicator");
        let indicator = CopyIndicator::default().apply(mark);
        assert!(indicator.is_copied("bc-primary-500-light"));
        let cleared = indicator.apply(CopyAction::Expire { ticket: 1 });
        assert!(!cleared.is_copied("bc-primary-500-light"));
    }

    /// Every `(label, text)` pair a panel offers to copy.
    fn catalog_copy_targets() -> Vec<(String, String)> {
        let mut targets: Vec<(String, String)> = code_samples()
            .map(|sample| (sample.id.to_owned(), sample.clipboard_text().to_owned()))
            .collect();
        targets.extend(GRID_PATTERNS.iter().map(|p| (p.name.to_owned(), p.code.to_owned())));
        targets.extend(SPACING_SCALE.iter().map(|s| (s.name.to_owned(), s.class.to_owned())));
        targets.extend(
            NAVIGATION_VARIANTS
                .iter()
                .map(|v| (v.name.to_owned(), v.code.to_owned())),
        );
        targets.extend(COMPONENTS.iter().map(|c| (c.name.to_owned(), c.code.to_owned())));
        targets.extend(FORM_PATTERNS.iter().map(|f| (f.name.to_owned(), f.code.to_owned())));
        targets.extend(TYPE_SCALE.iter().map(|step| (step.name.to_owned(), step.css())));
        targets.extend(SHADOWS.iter().map(|shadow| (shadow.name.to_owned(), shadow.css())));
        targets.extend(ICONS.iter().map(|icon| (icon.name.to_owned(), icon.snippet())));
        for rule in LAYER_NAMING_RULES {
            targets.extend(
                rule.examples
                    .iter()
                    .map(|name| ((*name).to_owned(), (*name).to_owned())),
            );
        }
        for convention in TOKEN_CONVENTIONS {
            targets.extend(
                convention
                    .examples
                    .iter()
                    .map(|token| (token.name.to_owned(), token.name.to_owned())),
            );
        }
        targets
    }

    #[tokio::test]
    async fn every_catalog_snippet_is_copied_verbatim() {
        let clipboard = FakeClipboard::default();
        let targets = catalog_copy_targets();
        for (label, text) in &targets {
            assert!(!text.is_empty(), "{label} has nothing to copy");
            let outcome = copy_text(&clipboard, text, label).await;
            assert_eq!(outcome, CopyOutcome::Copied { label: label.clone() });
        }
        let expected: Vec<_> = targets.into_iter().map(|(_, text)| text).collect();
        assert_eq!(*clipboard.writes.borrow(), expected);
    }

    #[tokio::test]
    async fn rejected_write_reports_once_without_indicator() {
        let clipboard = FakeClipboard::rejecting(ClipboardError::Rejected("denied".into()));

        let outcome = copy_text(&clipboard, "#a855f7", "bc-primary-500-light").await;

        assert!(clipboard.writes.borrow().is_empty());
        assert_eq!(outcome.indicator(1), None);
        let toasts = ToastQueue::default().apply(outcome.toast());
        assert_eq!(toasts.iter().count(), 1);
        assert_eq!(toasts.to_vec()[0].kind, ToastKind::Error);
    }

    #[tokio::test]
    async fn unavailable_clipboard_is_a_failure() {
        let clipboard = FakeClipboard::rejecting(ClipboardError::Unavailable);
        let outcome = copy_text(&clipboard, "x", "x").await;
        assert_eq!(outcome, CopyOutcome::Failed(ClipboardError::Unavailable));
    }

    #[test]
    fn stale_expiry_keeps_newer_indicator() {
        let indicator = CopyIndicator::default()
            .apply(CopyAction::Mark {
                label: "a".into(),
                ticket: 1,
            })
            .apply(CopyAction::Mark {
                label: "b".into(),
                ticket: 2,
            });
        let after_stale = indicator.apply(CopyAction::Expire { ticket: 1 });
        assert!(after_stale.is_copied("b"));
        assert!(!after_stale.is_copied("a"));
        assert!(!after_stale.apply(CopyAction::Expire { ticket: 2 }).is_copied("b"));
    }

    #[test]
    fn recopying_the_same_label_restarts_the_window() {
        let indicator = CopyIndicator::default()
            .apply(CopyAction::Mark {
                label: "a".into(),
                ticket: 1,
            })
            .apply(CopyAction::Mark {
                label: "a".into(),
                ticket: 2,
            })
            .apply(CopyAction::Expire { ticket: 1 });
        assert!(indicator.is_copied("a"));
    }

    #[test]
    fn success_toast_names_the_label() {
        let outcome = CopyOutcome::Copied {
            label: "bc-error".into(),
        };
        let toasts = ToastQueue::default().apply(outcome.toast());
        let toast = &toasts.to_vec()[0];
        assert_eq!(toast.kind, ToastKind::Success);
        assert!(toast.message.starts_with("bc-error"));
    }
}
