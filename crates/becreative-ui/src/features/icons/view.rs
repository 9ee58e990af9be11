use becreative_catalog::icons::{ICON_SIZES, ICONS, IconCategory};
use yew::prelude::*;

use super::visible_icons;
use crate::components::copy_button::CopyButton;
use crate::components::hooks::use_copy;
use crate::components::icons::PathIcon;
use crate::features::panel_head;

#[function_component(IconLibraryPanel)]
pub(crate) fn icon_library_panel() -> Html {
    let copy = use_copy();
    let filter = use_state(|| None::<IconCategory>);
    let sample = ICONS.first().map(|icon| icon.path).unwrap_or_default();

    let filter_button = |option: Option<IconCategory>, label: &'static str| {
        let filter = filter.clone();
        let active = *filter == option;
        html! {
            <button
                type="button"
                class={classes!(active.then_some("is-active"))}
                aria-pressed={active.to_string()}
                onclick={Callback::from(move |_: MouseEvent| filter.set(option))}
            >
                {label}
            </button>
        }
    };

    html! {
        <section class="bc-panel">
            {panel_head("Ícones", "Biblioteca de ícones com traço consistente em grade de 24px.")}
            <div class="bc-segmented" role="group" aria-label="Filtrar categoria">
                {filter_button(None, "Todos")}
                {for IconCategory::all().into_iter().map(|category| filter_button(Some(category), category.label()))}
            </div>
            <div class="bc-icon-grid">
                {for visible_icons(*filter).into_iter().map(|icon| html! {
                    <article class="bc-card bc-icon-card" key={icon.name}>
                        <PathIcon d={icon.path} title={AttrValue::from(icon.name)} />
                        <strong>{icon.name}</strong>
                        <span class="bc-muted">{icon.category.label()}</span>
                        <CopyButton
                            handle={copy.clone()}
                            text={icon.snippet()}
                            label={icon.name}
                        />
                    </article>
                })}
            </div>
            <div class="bc-card">
                <h3>{"Tamanhos"}</h3>
                <div class="bc-preview-row">
                    {for ICON_SIZES.iter().map(|size| html! {
                        <div class="bc-size-sample" key={size.to_string()}>
                            <PathIcon d={sample} size={*size} />
                            <span class="bc-muted">{format!("{size}px")}</span>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}
