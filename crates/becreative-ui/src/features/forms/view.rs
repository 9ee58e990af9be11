use becreative_catalog::forms::{FORM_GUIDELINES, FORM_PATTERNS, FieldKind, FormPattern};
use yew::prelude::*;

use super::{FieldState, field_id};
use crate::components::accordion::Collapsible;
use crate::components::code_block::CodeBlock;
use crate::components::hooks::{CopyHandle, use_copy};
use crate::core::accordion::SingleOpen;
use crate::features::{bullet_list, panel_head};

#[function_component(FormPanel)]
pub(crate) fn form_panel() -> Html {
    let copy = use_copy();
    let code_open = use_state(SingleOpen::<&'static str>::default);
    let on_code = {
        let code_open = code_open.clone();
        Callback::from(move |name: &'static str| code_open.set(code_open.toggled(name)))
    };

    html! {
        <section class="bc-panel">
            {panel_head("Formulários", "Campos, estados de validação e mensagens de apoio.")}
            <div class="bc-token-grid">
                {for FORM_PATTERNS.iter().map(|pattern| render_pattern(pattern, &copy, code_open.is_open(pattern.name), &on_code))}
            </div>
            <div class="bc-card bc-tone-info">
                <h3>{"Diretrizes"}</h3>
                {bullet_list(FORM_GUIDELINES)}
            </div>
        </section>
    }
}

fn render_pattern(
    pattern: &'static FormPattern,
    copy: &CopyHandle,
    code_open: bool,
    on_code: &Callback<&'static str>,
) -> Html {
    let toggle = {
        let on_code = on_code.clone();
        let name = pattern.name;
        Callback::from(move |()| on_code.emit(name))
    };
    html! {
        <article class="bc-card" key={pattern.name}>
            <h3>{pattern.name}</h3>
            {render_field(pattern, FieldState::Default)}
            {render_field(pattern, FieldState::Error)}
            <Collapsible
                id={field_id(pattern, FieldState::Default).replace("field-", "code-")}
                title={html! { {"Ver código"} }}
                open={code_open}
                on_toggle={toggle}
            >
                <CodeBlock code={pattern.code} copy={Some((copy.clone(), AttrValue::from(pattern.name)))} />
            </Collapsible>
        </article>
    }
}

fn render_field(pattern: &FormPattern, state: FieldState) -> Html {
    let id = field_id(pattern, state);
    let hint_id = format!("{id}-hint");
    let invalid = state == FieldState::Error;
    let class = classes!("bc-input", invalid.then_some("is-invalid"));
    let hint = if invalid { pattern.error } else { pattern.helper };
    let aria_invalid = invalid.then_some("true");

    let control = match pattern.kind {
        FieldKind::TextArea => html! {
            <textarea id={id.clone()} {class} rows="3" placeholder={pattern.placeholder}
                aria-invalid={aria_invalid} aria-describedby={hint_id.clone()} />
        },
        FieldKind::Select => html! {
            <select id={id.clone()} {class} aria-invalid={aria_invalid} aria-describedby={hint_id.clone()}>
                <option>{pattern.placeholder}</option>
            </select>
        },
        FieldKind::Checkbox => html! {
            <input id={id.clone()} type="checkbox" class="bc-checkbox"
                aria-invalid={aria_invalid} aria-describedby={hint_id.clone()} />
        },
        kind => html! {
            <input id={id.clone()} type={kind.input_type().unwrap_or("text")} {class}
                placeholder={pattern.placeholder}
                aria-invalid={aria_invalid} aria-describedby={hint_id.clone()} />
        },
    };

    html! {
        <div class={classes!("bc-field", format!("is-{}", state.as_str()))}>
            <label for={id}>{pattern.label}</label>
            {control}
            <small id={hint_id} class={classes!("bc-hint", invalid.then_some("bc-text-error"))}>{hint}</small>
        </div>
    }
}
