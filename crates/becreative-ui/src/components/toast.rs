use std::collections::HashMap;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::components::icons::IconClose;
use crate::core::toast::{Toast, plan_timers};

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub lifetime_ms: u32,
    pub on_dismiss: Callback<u64>,
}

/// Renders the queue. Each toast gets one timer when it first appears; the
/// timer lives in a map keyed by id so later pushes never restart it.
#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let timers = use_mut_ref(HashMap::<u64, Timeout>::new);
    {
        let timers = timers.clone();
        let on_dismiss = props.on_dismiss.clone();
        let lifetime_ms = props.lifetime_ms;
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let mut timers = timers.borrow_mut();
                let plan = plan_timers(timers.keys().copied(), list);
                for id in plan.cancel {
                    timers.remove(&id);
                }
                for id in plan.start {
                    let on_dismiss = on_dismiss.clone();
                    timers.insert(id, Timeout::new(lifetime_ms, move || on_dismiss.emit(id)));
                }
                || ()
            },
            props.toasts.clone(),
        );
    }
    use_effect_with_deps(move |_| move || timers.borrow_mut().clear(), ());

    html! {
        <div class="bc-toast-host" aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| render_toast(toast, &props.on_dismiss))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: &Callback<u64>) -> Html {
    let id = toast.id;
    let on_close = {
        let on_dismiss = on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };
    html! {
        <div key={id} class={classes!("bc-toast", toast.kind.class())} role="status">
            <div class="bc-toast-text">
                <strong>{toast.title.clone()}</strong>
                <span>{toast.message.clone()}</span>
            </div>
            <button type="button" class="bc-ghost" aria-label="Fechar notificação" onclick={on_close}>
                <IconClose />
            </button>
        </div>
    }
}
