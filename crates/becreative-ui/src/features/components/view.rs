use becreative_catalog::components::{COMPONENTS, ComponentSpec};
use yew::prelude::*;

use crate::components::accordion::Collapsible;
use crate::components::code_block::CodeBlock;
use crate::components::hooks::{CopyHandle, use_copy};
use crate::core::accordion::SingleOpen;
use crate::features::panel_head;

#[function_component(ComponentLibraryPanel)]
pub(crate) fn component_library_panel() -> Html {
    let copy = use_copy();
    let open = use_state(SingleOpen::<&'static str>::default);
    let on_toggle = {
        let open = open.clone();
        Callback::from(move |name: &'static str| open.set(open.toggled(name)))
    };

    html! {
        <section class="bc-panel">
            {panel_head("Componentes", "Biblioteca de componentes reutilizáveis com variantes e estados documentados.")}
            <div class="bc-stack">
                {for COMPONENTS.iter().map(|spec| render_component(spec, &copy, open.is_open(spec.name), &on_toggle))}
            </div>
        </section>
    }
}

fn render_component(
    spec: &'static ComponentSpec,
    copy: &CopyHandle,
    code_open: bool,
    on_toggle: &Callback<&'static str>,
) -> Html {
    let toggle = {
        let on_toggle = on_toggle.clone();
        let name = spec.name;
        Callback::from(move |()| on_toggle.emit(name))
    };
    let preview = |class: &'static str, label: &'static str| {
        if spec.name == "Button" {
            html! { <button type="button" class={class}>{label}</button> }
        } else {
            html! { <span class={class}>{label}</span> }
        }
    };

    html! {
        <article class="bc-card" key={spec.name}>
            <header>
                <h3>{spec.name}</h3>
                <p class="bc-muted">{spec.description}</p>
            </header>
            <div class="bc-preview-row">
                {for spec.variants.iter().map(|variant| preview(variant.class, variant.label))}
            </div>
            <div class="bc-chip-row">
                {for spec.states.iter().map(|state| html! { <span class="bc-badge">{*state}</span> })}
            </div>
            <Collapsible
                id={format!("component-{}", spec.name.to_lowercase())}
                title={html! { {"Ver código"} }}
                open={code_open}
                on_toggle={toggle}
            >
                <CodeBlock code={spec.code} copy={Some((copy.clone(), AttrValue::from(spec.name)))} />
            </Collapsible>
        </article>
    }
}
