use becreative_catalog::SectionId;
use yew::prelude::*;

use crate::app::AppContext;
use crate::components::icons::{
    IconBook, IconCompass, IconMoon, IconPanelLeft, IconSun, section_icon,
};
use crate::core::theme::ThemeMode;
use crate::core::view::{SpecialView, ViewAction};

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
}

/// Header, sidebar and main area. Reads and updates the shared view state.
#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let Some(ctx) = use_context::<AppContext>() else {
        return html! { <main class="bc-main">{for props.children.iter()}</main> };
    };
    let view = ctx.view.clone();
    let collapsed = view.sidebar_collapsed;

    let dispatch = |action: ViewAction| {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.dispatch(action))
    };
    let collapse_label = if collapsed {
        "Expandir menu"
    } else {
        "Recolher menu"
    };

    html! {
        <div class={classes!("bc-shell", collapsed.then_some("is-collapsed"))}>
            <header class="bc-header">
                <div class="bc-brand">
                    <strong>{"Bê Creative"}</strong>
                    <span class="bc-muted">{"Design System"}</span>
                </div>
                <div class="bc-header-actions">
                    <button
                        type="button"
                        class={classes!("bc-ghost", view.shows_special(SpecialView::Guidelines).then_some("is-active"))}
                        onclick={dispatch(ViewAction::ToggleSpecial(SpecialView::Guidelines))}
                    >
                        <IconCompass />
                        <span>{SpecialView::Guidelines.label()}</span>
                    </button>
                    <button
                        type="button"
                        class="bc-ghost"
                        aria-label={view.theme.toggle_label()}
                        onclick={dispatch(ViewAction::ToggleTheme)}
                    >
                        if view.theme == ThemeMode::Dark {
                            <IconSun />
                        } else {
                            <IconMoon />
                        }
                    </button>
                </div>
            </header>
            <aside class="bc-sidebar">
                <button
                    type="button"
                    class={classes!("bc-nav-item", "bc-nav-docs", view.shows_special(SpecialView::Documentation).then_some("is-active"))}
                    title={collapsed.then_some(SpecialView::Documentation.label())}
                    onclick={dispatch(ViewAction::ToggleSpecial(SpecialView::Documentation))}
                >
                    <IconBook size={18} />
                    if !collapsed {
                        <span>{SpecialView::Documentation.label()}</span>
                    }
                </button>
                <nav>
                    {for SectionId::all().into_iter().map(|section| nav_item(section, view.shows_section(section), collapsed, dispatch(ViewAction::SelectSection(section))))}
                </nav>
                <button
                    type="button"
                    class="bc-sidebar-toggle"
                    aria-label={collapse_label}
                    onclick={dispatch(ViewAction::ToggleSidebar)}
                >
                    <IconPanelLeft />
                </button>
            </aside>
            <main class="bc-main">
                {for props.children.iter()}
            </main>
        </div>
    }
}

fn nav_item(section: SectionId, active: bool, collapsed: bool, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <button
            type="button"
            key={section.id()}
            class={classes!("bc-nav-item", active.then_some("is-active"))}
            aria-current={active.then_some("page")}
            title={collapsed.then_some(section.label())}
            {onclick}
        >
            {section_icon(section)}
            if !collapsed {
                <span>{section.label()}</span>
            }
        </button>
    }
}
