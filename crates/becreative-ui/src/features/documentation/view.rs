use becreative_catalog::documentation::{
    CodeSample, DOC_FOOTER, DOC_INTRO, DOC_SECTIONS, DocBlock, DocSection, PRODUCT_NAME,
};
use yew::prelude::*;

use super::{DocState, footer_lines};
use crate::app::dom::{print_page, today_pt_br};
use crate::components::accordion::Collapsible;
use crate::components::code_block::CodeBlock;
use crate::components::copy_button::CopyButton;
use crate::components::hooks::{CopyHandle, use_copy};
use crate::components::icons::IconPrinter;

/// Callbacks a block may need.
struct BlockCtx {
    state: DocState,
    copy: CopyHandle,
    on_code: Callback<&'static str>,
    on_check: Callback<&'static str>,
}

#[function_component(DocumentationView)]
pub(crate) fn documentation_view() -> Html {
    let copy = use_copy();
    let state = use_state(DocState::default);
    let today = use_memo(|_| today_pt_br(), ());

    let on_print = Callback::from(|_: MouseEvent| print_page());
    let ctx = BlockCtx {
        state: (*state).clone(),
        copy,
        on_code: {
            let state = state.clone();
            Callback::from(move |id: &'static str| {
                let mut next = (*state).clone();
                next.code = next.code.toggled(id);
                state.set(next);
            })
        },
        on_check: {
            let state = state.clone();
            Callback::from(move |term: &'static str| {
                let mut next = (*state).clone();
                next.checks = next.checks.toggled(term);
                state.set(next);
            })
        },
    };
    let [version, updated] = footer_lines(&today);

    html! {
        <section class="bc-panel bc-docs">
            <header class="bc-panel-head bc-card-head">
                <div>
                    <h2>{format!("Guia de Uso - {PRODUCT_NAME}")}</h2>
                    <p class="bc-muted">{DOC_INTRO}</p>
                </div>
                <button type="button" class="bc-btn bc-btn-primary bc-no-print" onclick={on_print}>
                    <IconPrinter />
                    <span>{"Imprimir"}</span>
                </button>
            </header>
            {for DOC_SECTIONS.iter().map(|section| {
                let toggle = {
                    let state = state.clone();
                    let id = section.id;
                    Callback::from(move |()| {
                        let mut next = (*state).clone();
                        next.sections = next.sections.toggled(id);
                        state.set(next);
                    })
                };
                render_section(section, &ctx, toggle)
            })}
            <footer class="bc-card bc-docs-footer">
                <h3>{DOC_FOOTER.0}</h3>
                <p>{DOC_FOOTER.1}</p>
                <p class="bc-muted">{version}</p>
                <p class="bc-muted">{updated}</p>
            </footer>
        </section>
    }
}

fn render_section(section: &'static DocSection, ctx: &BlockCtx, on_toggle: Callback<()>) -> Html {
    html! {
        <Collapsible
            key={section.id.id()}
            id={format!("doc-{}", section.id.id())}
            class="bc-card"
            title={html! { <h3>{section.title}</h3> }}
            open={ctx.state.sections.is_open(section.id)}
            {on_toggle}
        >
            <div class="bc-stack">
                {for section.blocks.iter().map(|block| render_block(block, ctx))}
            </div>
        </Collapsible>
    }
}

fn render_block(block: &'static DocBlock, ctx: &BlockCtx) -> Html {
    match block {
        DocBlock::Text { title, body } => html! {
            <div>
                if !title.is_empty() {
                    <h4>{*title}</h4>
                }
                <p>{*body}</p>
            </div>
        },
        DocBlock::Bullets { title, items } => html! {
            <div>
                <h4>{*title}</h4>
                <ul class="bc-list">{for items.iter().map(|item| html! { <li>{*item}</li> })}</ul>
            </div>
        },
        DocBlock::Steps { title, items } => html! {
            <div>
                <h4>{*title}</h4>
                <ol class="bc-steps">{for items.iter().map(|item| html! { <li>{*item}</li> })}</ol>
            </div>
        },
        DocBlock::Callout { tone, title, body } => html! {
            <div class={classes!("bc-notice", tone.class())}>
                <h4>{*title}</h4>
                <p>{*body}</p>
            </div>
        },
        DocBlock::Definitions { title, rows } => html! {
            <div>
                <h4>{*title}</h4>
                <dl class="bc-definitions">
                    {for rows.iter().map(|(term, detail)| html! { <><dt>{*term}</dt><dd>{*detail}</dd></> })}
                </dl>
            </div>
        },
        DocBlock::Code(sample) => render_code(sample, ctx),
        DocBlock::Checklist { title, items } => html! {
            <div>
                <h4>{*title}</h4>
                {for items.iter().map(|(term, detail)| {
                    let term = *term;
                    let onchange = {
                        let on_check = ctx.on_check.clone();
                        Callback::from(move |_: Event| on_check.emit(term))
                    };
                    html! {
                        <label class="bc-check">
                            <input type="checkbox" checked={ctx.state.checks.is_open(term)} {onchange} />
                            <span><strong>{term}</strong>{" "}{*detail}</span>
                        </label>
                    }
                })}
            </div>
        },
    }
}

fn render_code(sample: &'static CodeSample, ctx: &BlockCtx) -> Html {
    let toggle = {
        let on_code = ctx.on_code.clone();
        let id = sample.id;
        Callback::from(move |()| on_code.emit(id))
    };
    html! {
        <Collapsible
            id={format!("code-{}", sample.id)}
            class="bc-code-sample"
            title={html! { {sample.trigger} }}
            open={ctx.state.code.is_open(sample.id)}
            on_toggle={toggle}
        >
            <div class="bc-code-toolbar">
                <CopyButton
                    handle={ctx.copy.clone()}
                    text={sample.clipboard_text()}
                    label={sample.id}
                    caption={AttrValue::from("Copiar")}
                />
            </div>
            <CodeBlock code={sample.code} />
        </Collapsible>
    }
}
