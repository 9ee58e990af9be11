use becreative_catalog::grid::{
    BREAKPOINT_ADVICE, BREAKPOINTS, GRID_PERFORMANCE, GRID_PRACTICES, GridKind, GridPattern,
    SPACING_SCALE, patterns_of,
};
use yew::prelude::*;

use super::{SPACING_DEMO_CELLS, kind_heading};
use crate::components::copy_button::CopyButton;
use crate::components::hooks::{CopyHandle, use_copy};
use crate::core::ui::demo_cells;
use crate::features::{bullet_list, panel_head};

#[function_component(GridPanel)]
pub(crate) fn grid_panel() -> Html {
    let copy = use_copy();
    html! {
        <section class="bc-panel">
            {panel_head("Grid System", "Grids automáticos e responsivos, escala de espaçamento e breakpoints.")}
            {render_family(GridKind::Automatic, &copy)}
            {render_family(GridKind::Responsive, &copy)}
            <div class="bc-card">
                <h3>{"Escala de Espaçamento"}</h3>
                <div class="bc-stack">
                    {for SPACING_SCALE.iter().map(|step| html! {
                        <div class="bc-spacing-row" key={step.name}>
                            <div class="bc-spacing-meta">
                                <strong>{step.name}</strong>
                                <code>{step.class}</code>
                                <span class="bc-muted">{format!("{} · {}", step.value, step.usage)}</span>
                            </div>
                            <div class={classes!("bc-flex-demo", step.class)}>
                                {for demo_cells(SPACING_DEMO_CELLS).map(|cell| html! { <div class="bc-demo-cell">{cell}</div> })}
                            </div>
                            <CopyButton handle={copy.clone()} text={step.class} label={step.name} />
                        </div>
                    })}
                </div>
            </div>
            <div class="bc-two-col">
                <div class="bc-card">
                    <h3>{"Breakpoints"}</h3>
                    <table class="bc-table">
                        <thead><tr><th>{"Prefixo"}</th><th>{"Largura mínima"}</th></tr></thead>
                        <tbody>
                            {for BREAKPOINTS.iter().map(|bp| html! {
                                <tr key={bp.prefix}>
                                    <td><code>{format!("{}:", bp.prefix)}</code></td>
                                    <td>{bp.label()}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
                <div class="bc-card">
                    <h3>{"Recomendações"}</h3>
                    <dl class="bc-definitions">
                        {for BREAKPOINT_ADVICE.iter().map(|(term, detail)| html! {
                            <><dt>{*term}</dt><dd>{*detail}</dd></>
                        })}
                    </dl>
                </div>
            </div>
            <div class="bc-two-col">
                <div class="bc-card bc-tone-success">
                    <h3>{"Boas Práticas"}</h3>
                    {bullet_list(GRID_PRACTICES)}
                </div>
                <div class="bc-card bc-tone-info">
                    <h3>{"Performance"}</h3>
                    {bullet_list(GRID_PERFORMANCE)}
                </div>
            </div>
        </section>
    }
}

fn render_family(kind: GridKind, copy: &CopyHandle) -> Html {
    let (title, lead) = kind_heading(kind);
    html! {
        <div class="bc-category">
            <h3>{title}</h3>
            <p class="bc-muted">{lead}</p>
            <div class="bc-stack">
                {for patterns_of(kind).map(|pattern| render_pattern(pattern, copy))}
            </div>
        </div>
    }
}

fn render_pattern(pattern: &'static GridPattern, copy: &CopyHandle) -> Html {
    html! {
        <article class="bc-card" key={pattern.name}>
            <header class="bc-card-head">
                <div>
                    <h4>{pattern.name}</h4>
                    <p class="bc-muted">{pattern.description}</p>
                    <p class="bc-muted">{format!("Uso: {}", pattern.usage)}</p>
                </div>
                <CopyButton
                    handle={copy.clone()}
                    text={pattern.code}
                    label={pattern.name}
                    caption={AttrValue::from("Copiar classes")}
                />
            </header>
            <code class="bc-inline-code">{pattern.code}</code>
            <div class={classes!("bc-grid-demo", pattern.code)}>
                {for demo_cells(pattern.demo_items).map(|cell| html! { <div class="bc-demo-cell">{cell}</div> })}
            </div>
        </article>
    }
}
