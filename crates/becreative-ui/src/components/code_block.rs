use yew::prelude::*;

use crate::components::copy_button::CopyButton;
use crate::components::hooks::CopyHandle;

#[derive(Properties, PartialEq)]
pub(crate) struct CodeBlockProps {
    pub code: AttrValue,
    /// Copy target; omit for display-only blocks.
    #[prop_or_default]
    pub copy: Option<(CopyHandle, AttrValue)>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(CodeBlock)]
pub(crate) fn code_block(props: &CodeBlockProps) -> Html {
    html! {
        <div class={classes!("bc-code-block", props.class.clone())}>
            if let Some((handle, label)) = props.copy.clone() {
                <CopyButton
                    class="bc-code-copy"
                    {handle}
                    text={props.code.clone()}
                    {label}
                />
            }
            <pre><code>{props.code.clone()}</code></pre>
        </div>
    }
}
