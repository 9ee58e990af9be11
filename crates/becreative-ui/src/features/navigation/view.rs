use becreative_catalog::navigation::{
    DEVICE_PROFILES, DeviceProfile, MOBILE_FIRST_PRACTICES, NAVIGATION_VARIANTS, NavLayout,
    NavigationVariant, PREVIEW_LINKS, RESPONSIVE_PRACTICES,
};
use yew::prelude::*;

use super::figma_rows;
use crate::components::accordion::Collapsible;
use crate::components::code_block::CodeBlock;
use crate::components::copy_button::CopyButton;
use crate::components::hooks::{CopyHandle, use_copy};
use crate::components::icons::{IconClose, IconMenu, PathIcon};
use crate::core::accordion::SingleOpen;
use crate::features::{bullet_list, panel_head};

const HOME_PATH: &str = "M3 10.5 12 3l9 7.5V21h-6v-6H9v6H3z";

#[function_component(NavigationPanel)]
pub(crate) fn navigation_panel() -> Html {
    let copy = use_copy();
    let menu_open = use_state(|| false);
    let code_open = use_state(SingleOpen::<&'static str>::default);

    let on_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let on_code = {
        let code_open = code_open.clone();
        Callback::from(move |name: &'static str| code_open.set(code_open.toggled(name)))
    };

    html! {
        <section class="bc-panel">
            {panel_head("Navegação", "Padrões de navegação por dispositivo com especificações para o Figma.")}
            <div class="bc-token-grid">
                {for DEVICE_PROFILES.iter().map(render_profile)}
            </div>
            {for NAVIGATION_VARIANTS.iter().map(|variant| {
                let preview = render_preview(variant.layout, *menu_open, &on_menu);
                render_variant(variant, preview, &copy, code_open.is_open(variant.name), &on_code)
            })}
            <div class="bc-two-col">
                <div class="bc-card">
                    <h3>{"Mobile First"}</h3>
                    {bullet_list(MOBILE_FIRST_PRACTICES)}
                </div>
                <div class="bc-card">
                    <h3>{"Design Responsivo"}</h3>
                    {bullet_list(RESPONSIVE_PRACTICES)}
                </div>
            </div>
        </section>
    }
}

fn render_profile(profile: &'static DeviceProfile) -> Html {
    html! {
        <article class="bc-card" key={profile.name}>
            <header>
                <h3>{profile.name}</h3>
                <span class="bc-badge">{profile.range}</span>
            </header>
            <dl class="bc-definitions">
                <dt>{"Frame"}</dt>
                <dd>{format!("{} – {}", profile.min_frame, profile.max_frame)}</dd>
                <dt>{"Abordagem"}</dt>
                <dd>{profile.approach}</dd>
                <dt>{"Navegação"}</dt>
                <dd>{profile.navigation}</dd>
            </dl>
            {bullet_list(profile.characteristics)}
        </article>
    }
}

fn render_variant(
    variant: &'static NavigationVariant,
    preview: Html,
    copy: &CopyHandle,
    code_open: bool,
    on_code: &Callback<&'static str>,
) -> Html {
    let toggle = {
        let on_code = on_code.clone();
        let name = variant.name;
        Callback::from(move |()| on_code.emit(name))
    };
    html! {
        <article class="bc-card" key={variant.name}>
            <header class="bc-card-head">
                <div>
                    <h3>{variant.name}</h3>
                    <span class="bc-badge">{variant.device.label()}</span>
                    <span class="bc-muted">{variant.usage}</span>
                </div>
                <CopyButton
                    handle={copy.clone()}
                    text={variant.code}
                    label={variant.name}
                    caption={AttrValue::from("Copy Code")}
                />
            </header>
            <div class="bc-nav-preview">{preview}</div>
            <div class="bc-two-col">
                <dl class="bc-definitions">
                    <dt>{"Behavior"}</dt><dd>{variant.behavior}</dd>
                    <dt>{"Constraints"}</dt><dd>{variant.constraints}</dd>
                </dl>
                <dl class="bc-definitions bc-figma-specs">
                    {for figma_rows(&variant.figma).into_iter().map(|(term, value)| html! {
                        <><dt>{term}</dt><dd>{value}</dd></>
                    })}
                </dl>
            </div>
            <Collapsible
                id={format!("nav-{}", variant.name.to_lowercase().replace(' ', "-"))}
                title={html! { {"Ver código"} }}
                open={code_open}
                on_toggle={toggle}
            >
                <CodeBlock code={variant.code} />
            </Collapsible>
        </article>
    }
}

fn render_preview(layout: NavLayout, menu_open: bool, on_menu: &Callback<MouseEvent>) -> Html {
    let links = || {
        PREVIEW_LINKS
            .iter()
            .map(|link| html! { <a href="#" class="bc-preview-link">{*link}</a> })
            .collect::<Html>()
    };
    match layout {
        NavLayout::DesktopHeader => html! {
            <nav class="bc-preview-header">
                <strong>{"Logo"}</strong>
                <div class="bc-preview-links">{links()}</div>
                <button type="button" class="bc-btn bc-btn-primary">{"Cadastrar"}</button>
            </nav>
        },
        NavLayout::MobileHeader => html! {
            <div>
                <nav class="bc-preview-header">
                    <button
                        type="button"
                        class="bc-ghost"
                        aria-expanded={menu_open.to_string()}
                        aria-label={if menu_open { "Fechar menu" } else { "Abrir menu" }}
                        onclick={on_menu.clone()}
                    >
                        if menu_open {
                            <IconClose size={24} />
                        } else {
                            <IconMenu size={24} />
                        }
                    </button>
                    <strong>{"Logo"}</strong>
                    <span></span>
                </nav>
                if menu_open {
                    <div class="bc-preview-menu">{links()}</div>
                }
            </div>
        },
        NavLayout::BottomBar => html! {
            <nav class="bc-preview-bottom">
                {for PREVIEW_LINKS.iter().map(|link| html! {
                    <a href="#" class="bc-preview-tab">
                        <PathIcon d={HOME_PATH} size={20} />
                        <span>{*link}</span>
                    </a>
                })}
            </nav>
        },
        NavLayout::Sidebar => html! {
            <nav class="bc-preview-sidebar">
                <strong>{"Logo"}</strong>
                {links()}
            </nav>
        },
    }
}
