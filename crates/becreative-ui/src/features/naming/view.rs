use becreative_catalog::GuideNote;
use becreative_catalog::naming::{
    FIGMA_SETUP_GUIDE, IMMEDIATE_BENEFITS, LAYER_NAMING_RULES, LONG_TERM_BENEFITS,
    NAMING_PRACTICES, TOKEN_CONVENTIONS,
};
use yew::prelude::*;

use super::{NamingAccordions, NamingGroup, accordion_id};
use crate::components::accordion::Collapsible;
use crate::components::copy_button::CopyButton;
use crate::components::hooks::{CopyHandle, use_copy};
use crate::features::{bullet_list, panel_head};

#[function_component(NamingPanel)]
pub(crate) fn naming_panel() -> Html {
    let copy = use_copy();
    let open = use_state(NamingAccordions::default);
    let toggle = |group: NamingGroup, index: usize| {
        let open = open.clone();
        Callback::from(move |()| open.set(open.toggled(group, index)))
    };

    let layers = LAYER_NAMING_RULES.iter().enumerate().map(|(index, rule)| html! {
        <Collapsible
            key={accordion_id(NamingGroup::Layers, index)}
            id={accordion_id(NamingGroup::Layers, index)}
            title={html! { <><span>{rule.category}</span><code>{rule.pattern}</code></> }}
            open={open.is_open(NamingGroup::Layers, index)}
            on_toggle={toggle(NamingGroup::Layers, index)}
        >
            <p class="bc-muted">{rule.description}</p>
            <h5>{"Exemplos:"}</h5>
            <div class="bc-example-grid">
                {for rule.examples.iter().map(|example| copy_row(*example, None, &copy))}
            </div>
        </Collapsible>
    });

    let tokens = TOKEN_CONVENTIONS.iter().enumerate().map(|(index, convention)| html! {
        <Collapsible
            key={accordion_id(NamingGroup::Tokens, index)}
            id={accordion_id(NamingGroup::Tokens, index)}
            title={html! { <><span>{convention.category}</span><code>{format!("{}-*", convention.prefix)}</code></> }}
            open={open.is_open(NamingGroup::Tokens, index)}
            on_toggle={toggle(NamingGroup::Tokens, index)}
        >
            <div class="bc-stack">
                {for convention.examples.iter().map(|token| copy_row(token.name, Some((token.usage, token.value)), &copy))}
            </div>
        </Collapsible>
    });

    html! {
        <section class="bc-panel">
            {panel_head("Convenções de Nomenclatura e Tokens", "Organização, padronização e boas práticas para design systems")}
            <div class="bc-card">
                <h3>{NamingGroup::Layers.title()}</h3>
                {for layers}
            </div>
            <div class="bc-card">
                <h3>{NamingGroup::Tokens.title()}</h3>
                {for tokens}
            </div>
            {note_group(NamingGroup::Setup, FIGMA_SETUP_GUIDE, &open, &toggle)}
            {note_group(NamingGroup::Practices, NAMING_PRACTICES, &open, &toggle)}
            <div class="bc-card bc-tone-info">
                <h3>{"Por que Adotar Convenções?"}</h3>
                <div class="bc-two-col">
                    <div>
                        <h4>{"Benefícios Imediatos"}</h4>
                        {bullet_list(IMMEDIATE_BENEFITS)}
                    </div>
                    <div>
                        <h4>{"Benefícios a Longo Prazo"}</h4>
                        {bullet_list(LONG_TERM_BENEFITS)}
                    </div>
                </div>
            </div>
        </section>
    }
}

fn note_group(
    group: NamingGroup,
    notes: &'static [GuideNote],
    open: &NamingAccordions,
    toggle: &impl Fn(NamingGroup, usize) -> Callback<()>,
) -> Html {
    html! {
        <div class="bc-card">
            <h3>{group.title()}</h3>
            {for notes.iter().enumerate().map(|(index, note)| html! {
                <Collapsible
                    key={accordion_id(group, index)}
                    id={accordion_id(group, index)}
                    title={html! { {note.title} }}
                    open={open.is_open(group, index)}
                    on_toggle={toggle(group, index)}
                >
                    <p>{note.body}</p>
                </Collapsible>
            })}
        </div>
    }
}

/// Copyable name with optional usage and value columns.
fn copy_row(name: &'static str, detail: Option<(&'static str, &'static str)>, copy: &CopyHandle) -> Html {
    html! {
        <div class="bc-copy-row" key={name}>
            <div>
                <code>{name}</code>
                if let Some((usage, value)) = detail {
                    <p class="bc-muted">{usage}</p>
                    <span class="bc-badge">{value}</span>
                }
            </div>
            <CopyButton handle={copy.clone()} text={name} label={name} />
        </div>
    }
}
