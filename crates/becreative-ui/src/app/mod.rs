//! App root: owns the shell state, the toast queue and the page config.

use std::rc::Rc;

use yew::prelude::*;

use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::config::UiConfig;
use crate::core::theme::ThemeMode;
use crate::core::toast::{ToastAction, ToastQueue};
use crate::core::view::ViewState;
use crate::features::render_active;

pub(crate) mod dom;

/// State shared with every panel through context.
#[derive(Clone, PartialEq)]
pub(crate) struct AppContext {
    pub(crate) view: UseReducerHandle<ViewState>,
    pub(crate) toasts: UseReducerDispatcher<ToastQueue>,
    pub(crate) config: Rc<UiConfig>,
}

#[function_component(BeCreativeApp)]
pub(crate) fn becreative_app() -> Html {
    let config = use_memo(|_| dom::load_config(), ());
    let view = {
        let config = config.clone();
        use_reducer(move || ViewState::from_config(&config))
    };
    let toasts = {
        let limit = config.toast_limit;
        use_reducer(move || ToastQueue::with_limit(limit))
    };

    use_effect_with_deps(
        |theme: &ThemeMode| {
            dom::apply_theme(*theme);
            || ()
        },
        view.theme,
    );

    let on_dismiss = {
        let toasts = toasts.dispatcher();
        Callback::from(move |id: u64| toasts.dispatch(ToastAction::Dismiss(id)))
    };
    let context = AppContext {
        view: view.clone(),
        toasts: toasts.dispatcher(),
        config: config.clone(),
    };

    html! {
        <ContextProvider<AppContext> {context}>
            <AppShell>
                {render_active(view.active())}
            </AppShell>
            <ToastHost
                toasts={toasts.to_vec()}
                lifetime_ms={config.toast_lifetime_ms}
                {on_dismiss}
            />
        </ContextProvider<AppContext>>
    }
}

/// Entry point for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<BeCreativeApp>::with_root(root).render();
    } else {
        yew::Renderer::<BeCreativeApp>::new().render();
    }
}
