use becreative_catalog::typography::{FONT_FAMILIES, SAMPLE_TEXT, TYPE_SCALE, TypographyStep};
use yew::prelude::*;

use super::sample_style;
use crate::components::copy_button::CopyButton;
use crate::components::hooks::{CopyHandle, use_copy};
use crate::features::panel_head;

#[function_component(TypographyPanel)]
pub(crate) fn typography_panel() -> Html {
    let copy = use_copy();
    html! {
        <section class="bc-panel">
            {panel_head("Tipografia", "Escala tipográfica com tamanhos, alturas de linha e pesos padronizados.")}
            <div class="bc-two-col">
                {for FONT_FAMILIES.iter().map(|(name, stack)| html! {
                    <div class="bc-card" key={*name}>
                        <code class="bc-token-name">{*name}</code>
                        <p style={format!("font-family: {stack}")}>{SAMPLE_TEXT}</p>
                        <p class="bc-muted">{*stack}</p>
                    </div>
                })}
            </div>
            <div class="bc-stack">
                {for TYPE_SCALE.iter().map(|step| render_step(step, &copy))}
            </div>
        </section>
    }
}

fn render_step(step: &'static TypographyStep, copy: &CopyHandle) -> Html {
    html! {
        <article class="bc-card bc-type-row" key={step.name}>
            <div class="bc-type-meta">
                <strong>{step.label}</strong>
                <code>{step.name}</code>
                <span class="bc-muted">
                    {format!("{} / {} / {}", step.size, step.line_height, step.weight)}
                </span>
                <span class="bc-muted">{step.usage}</span>
            </div>
            <p class="bc-type-sample" style={sample_style(step)}>{SAMPLE_TEXT}</p>
            <CopyButton
                handle={copy.clone()}
                text={step.css()}
                label={step.name}
                caption={AttrValue::from("CSS")}
            />
        </article>
    }
}
