//! Color tokens panel view.

use becreative_catalog::colors::{
    COLOR_AVOID, COLOR_CATEGORIES, COLOR_DO, CONTRAST_LEVELS, ColorCategory, ColorToken,
};
use yew::prelude::*;

use super::swatch_copies;
use crate::components::accordion::Collapsible;
use crate::components::code_block::CodeBlock;
use crate::components::copy_button::CopyButton;
use crate::components::hooks::{CopyHandle, use_copy};
use crate::core::accordion::SingleOpen;
use crate::core::ui::SwatchMode;
use crate::features::{bullet_list, panel_head};

#[function_component(ColorTokensPanel)]
pub(crate) fn color_tokens_panel() -> Html {
    let copy = use_copy();
    let mode = use_state(SwatchMode::default);
    let css_open = use_state(SingleOpen::<&'static str>::default);

    let on_toggle = {
        let css_open = css_open.clone();
        Callback::from(move |name: &'static str| css_open.set(css_open.toggled(name)))
    };

    html! {
        <section class="bc-panel">
            {panel_head("Cores & Tokens", "Sistema de cores com suporte a light e dark mode, tokens semânticos e contraste verificado.")}
            <div class="bc-segmented" role="group" aria-label="Modo de visualização">
                {for SwatchMode::all().into_iter().map(|option| {
                    let mode = mode.clone();
                    let active = *mode == option;
                    html! {
                        <button
                            type="button"
                            class={classes!(active.then_some("is-active"))}
                            aria-pressed={active.to_string()}
                            onclick={Callback::from(move |_: MouseEvent| mode.set(option))}
                        >
                            {option.label()}
                        </button>
                    }
                })}
            </div>
            {for COLOR_CATEGORIES.iter().map(|category| render_category(category, *mode, &copy, *css_open, &on_toggle))}
            <div class="bc-notice bc-tone-info">
                <h3>{"Acessibilidade"}</h3>
                <p>{"Todas as combinações foram verificadas contra as diretrizes WCAG 2.1."}</p>
                <dl class="bc-definitions">
                    {for CONTRAST_LEVELS.iter().map(|(level, ratio)| html! {
                        <>
                            <dt>{*level}</dt>
                            <dd>{*ratio}</dd>
                        </>
                    })}
                </dl>
            </div>
            <div class="bc-two-col">
                <div class="bc-card bc-tone-success">
                    <h3>{"Faça"}</h3>
                    {bullet_list(COLOR_DO)}
                </div>
                <div class="bc-card bc-tone-danger">
                    <h3>{"Evite"}</h3>
                    {bullet_list(COLOR_AVOID)}
                </div>
            </div>
        </section>
    }
}

fn render_category(
    category: &'static ColorCategory,
    mode: SwatchMode,
    copy: &CopyHandle,
    css_open: SingleOpen<&'static str>,
    on_toggle: &Callback<&'static str>,
) -> Html {
    html! {
        <div class="bc-category" key={category.name}>
            <h3>{category.name}</h3>
            <p class="bc-muted">{category.description}</p>
            <div class="bc-token-grid">
                {for category.tokens.iter().map(|token| render_token(token, mode, copy, css_open.is_open(token.name), on_toggle))}
            </div>
        </div>
    }
}

fn render_token(
    token: &'static ColorToken,
    mode: SwatchMode,
    copy: &CopyHandle,
    css_open: bool,
    on_toggle: &Callback<&'static str>,
) -> Html {
    let mut targets = swatch_copies(token, mode);
    let css = targets.pop();
    let swatches = targets.into_iter().map(|target| {
        let is_light = target.label.ends_with("-light");
        let (theme, ratio) = if is_light {
            ("Light", token.contrast.light)
        } else {
            ("Dark", token.contrast.dark)
        };
        html! {
            <div class="bc-swatch-row">
                <div class="bc-swatch" style={format!("background-color: {}", target.text)}></div>
                <div class="bc-swatch-meta">
                    <span class="bc-muted">{theme}</span>
                    <code>{target.text.clone()}</code>
                    <span class="bc-badge">{ratio}</span>
                </div>
                <CopyButton
                    handle={copy.clone()}
                    text={target.text}
                    label={target.label}
                />
            </div>
        }
    });
    let toggle = {
        let on_toggle = on_toggle.clone();
        let name = token.name;
        Callback::from(move |()| on_toggle.emit(name))
    };

    html! {
        <article class="bc-card bc-token" key={token.name}>
            <header>
                <code class="bc-token-name">{token.name}</code>
                <p class="bc-muted">{token.usage}</p>
            </header>
            {for swatches}
            if let Some(css) = css {
                <Collapsible
                    id={format!("css-{}", token.name)}
                    title={html! { {"Código CSS"} }}
                    open={css_open}
                    on_toggle={toggle}
                >
                    <CodeBlock
                        code={css.text}
                        copy={Some((copy.clone(), AttrValue::from(css.label)))}
                    />
                </Collapsible>
            }
        </article>
    }
}
