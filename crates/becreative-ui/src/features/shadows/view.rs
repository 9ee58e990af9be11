use becreative_catalog::shadows::{SHADOW_NOTES, SHADOWS};
use yew::prelude::*;

use crate::components::copy_button::CopyButton;
use crate::components::hooks::use_copy;
use crate::features::{bullet_list, panel_head};

#[function_component(ShadowPanel)]
pub(crate) fn shadow_panel() -> Html {
    let copy = use_copy();
    html! {
        <section class="bc-panel">
            {panel_head("Sombras", "Níveis de elevação para criar hierarquia e profundidade.")}
            <div class="bc-token-grid">
                {for SHADOWS.iter().map(|shadow| html! {
                    <article class="bc-card" key={shadow.name}>
                        <div class="bc-shadow-preview" style={shadow.css()}></div>
                        <header>
                            <code class="bc-token-name">{shadow.name}</code>
                            <span class="bc-badge">{format!("Nível {}", shadow.level)}</span>
                        </header>
                        <p class="bc-muted">{shadow.usage}</p>
                        <code class="bc-inline-code">{shadow.value}</code>
                        <CopyButton
                            handle={copy.clone()}
                            text={shadow.css()}
                            label={shadow.name}
                            caption={AttrValue::from("Copiar")}
                        />
                    </article>
                })}
            </div>
            <div class="bc-card">
                <h3>{"Como usar elevação"}</h3>
                {bullet_list(SHADOW_NOTES)}
            </div>
        </section>
    }
}
