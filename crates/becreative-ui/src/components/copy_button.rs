use yew::prelude::*;

use crate::components::hooks::CopyHandle;
use crate::components::icons::{IconCheck, IconCopy};

#[derive(Properties, PartialEq)]
pub(crate) struct CopyButtonProps {
    pub handle: CopyHandle,
    /// Text written to the clipboard.
    pub text: AttrValue,
    /// Indicator label.
    pub label: AttrValue,
    /// Visible caption; icon-only when absent.
    #[prop_or_default]
    pub caption: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(CopyButton)]
pub(crate) fn copy_button(props: &CopyButtonProps) -> Html {
    let copied = props.handle.is_copied(&props.label);
    let onclick = props
        .handle
        .on_click(props.text.to_string(), props.label.to_string());
    let aria_label = format!("Copiar {}", props.label);
    html! {
        <button
            type="button"
            class={classes!("bc-copy", copied.then_some("is-copied"), props.class.clone())}
            aria-label={aria_label}
            {onclick}
        >
            if copied {
                <IconCheck />
            } else {
                <IconCopy />
            }
            if let Some(caption) = props.caption.clone() {
                <span>{if copied { AttrValue::from("Copiado!") } else { caption }}</span>
            }
        </button>
    }
}
