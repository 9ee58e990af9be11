use yew::prelude::*;

use crate::components::icons::IconChevronDown;

#[derive(Properties, PartialEq)]
pub(crate) struct CollapsibleProps {
    /// DOM id of the body, referenced by `aria-controls`.
    pub id: AttrValue,
    pub title: Html,
    pub open: bool,
    pub on_toggle: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Trigger plus body. The body stays mounted while closed so print styles can
/// reveal it.
#[function_component(Collapsible)]
pub(crate) fn collapsible(props: &CollapsibleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let body_id = format!("{}-body", props.id);
    html! {
        <div class={classes!("bc-collapsible", props.open.then_some("is-open"), props.class.clone())}>
            <button
                type="button"
                class="bc-collapsible-trigger"
                aria-expanded={props.open.to_string()}
                aria-controls={body_id.clone()}
                {onclick}
            >
                <span class="bc-collapsible-title">{props.title.clone()}</span>
                <IconChevronDown class={classes!("bc-chevron", props.open.then_some("is-rotated"))} />
            </button>
            <div id={body_id} class={classes!("bc-collapsible-body", (!props.open).then_some("is-closed"))}>
                {for props.children.iter()}
            </div>
        </div>
    }
}
