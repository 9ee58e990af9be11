//! Hooks shared by every panel.

use gloo::console;
use gloo::timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::app::AppContext;
use crate::app::dom::BrowserClipboard;
use crate::core::config::DEFAULT_COPIED_RESET_MS;
use crate::core::copy::{CopyAction, CopyIndicator, CopyOutcome, copy_text};

/// Panel-local copy service: a clipboard action plus its copied indicator.
#[derive(Clone, PartialEq)]
pub(crate) struct CopyHandle {
    indicator: UseReducerHandle<CopyIndicator>,
    copy: Callback<(String, String)>,
}

impl CopyHandle {
    pub(crate) fn is_copied(&self, label: &str) -> bool {
        self.indicator.is_copied(label)
    }

    pub(crate) fn copy(&self, text: String, label: String) {
        self.copy.emit((text, label));
    }

    pub(crate) fn on_click(&self, text: String, label: String) -> Callback<MouseEvent> {
        let handle = self.clone();
        Callback::from(move |_: MouseEvent| handle.copy(text.clone(), label.clone()))
    }
}

/// Copy with a transient indicator that clears after the configured delay.
///
/// Each successful copy takes a fresh ticket and replaces the pending reset
/// timer; dropping the old [`Timeout`] cancels it. The callback is memoized on
/// the app context so [`CopyHandle`] stays equal across parent renders.
#[hook]
pub(crate) fn use_copy() -> CopyHandle {
    let ctx = use_context::<AppContext>();
    let indicator = use_reducer(CopyIndicator::default);
    let ticket = use_mut_ref(|| 0_u64);
    let reset = use_mut_ref(|| None::<Timeout>);

    let copy = {
        let dispatcher = indicator.dispatcher();
        use_callback(
            move |(text, label): (String, String), ctx: &Option<AppContext>| {
                let dispatcher = dispatcher.clone();
                let ctx = ctx.clone();
                let ticket = ticket.clone();
                let reset = reset.clone();
                spawn_local(async move {
                    let outcome = copy_text(&BrowserClipboard, &text, &label).await;
                    if let CopyOutcome::Failed(err) = &outcome {
                        console::warn!("clipboard write failed", err.to_string());
                    }
                    if let Some(ctx) = &ctx {
                        ctx.toasts.dispatch(outcome.toast());
                    }
                    let current = {
                        let mut ticket = ticket.borrow_mut();
                        *ticket += 1;
                        *ticket
                    };
                    if let Some(mark) = outcome.indicator(current) {
                        dispatcher.dispatch(mark);
                        let delay = ctx
                            .as_ref()
                            .map_or(DEFAULT_COPIED_RESET_MS, |ctx| ctx.config.copied_reset_ms);
                        let expire = dispatcher.clone();
                        *reset.borrow_mut() = Some(Timeout::new(delay, move || {
                            expire.dispatch(CopyAction::Expire { ticket: current });
                        }));
                    }
                });
            },
            ctx,
        )
    };

    CopyHandle { indicator, copy }
}
