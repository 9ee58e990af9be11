//! Inline SVG icons on a 24px grid, stroked with `currentColor`.

use becreative_catalog::SectionId;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or(16)]
    pub size: u16,
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={classes!("bc-icon", props.class.clone())}
            width={props.size.to_string()}
            height={props.size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct PathIconProps {
    pub d: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or(24)]
    pub size: u16,
}

/// Icon drawn from catalog path data.
#[function_component(PathIcon)]
pub(crate) fn path_icon(props: &PathIconProps) -> Html {
    let inner = IconProps {
        class: props.class.clone(),
        title: props.title.clone(),
        size: props.size,
    };
    icon_svg(&inner, html! { <path d={props.d.clone()} /> })
}

#[function_component(IconCopy)]
pub(crate) fn icon_copy(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M9 9h11v11H9zM5 15H4V4h11v1" /> },
    )
}

#[function_component(IconCheck)]
pub(crate) fn icon_check(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M20 6 9 17l-5-5" /> })
}

#[function_component(IconChevronDown)]
pub(crate) fn icon_chevron_down(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="m6 9 6 6 6-6" /> })
}

#[function_component(IconMenu)]
pub(crate) fn icon_menu(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M4 6h16M4 12h16M4 18h16" /> })
}

#[function_component(IconClose)]
pub(crate) fn icon_close(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M18 6 6 18M6 6l12 12" /> })
}

#[function_component(IconSun)]
pub(crate) fn icon_sun(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M12 8a4 4 0 1 0 0 8a4 4 0 0 0 0-8M12 2v2m0 16v2M4.93 4.93l1.41 1.41m11.32 11.32l1.41 1.41M2 12h2m16 0h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" /> },
    )
}

#[function_component(IconMoon)]
pub(crate) fn icon_moon(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M12 3a6 6 0 0 0 9 9a9 9 0 1 1-9-9" /> })
}

#[function_component(IconBook)]
pub(crate) fn icon_book(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M4 19.5A2.5 2.5 0 0 1 6.5 17H20V2H6.5A2.5 2.5 0 0 0 4 4.5zM6.5 17A2.5 2.5 0 0 0 4 19.5A2.5 2.5 0 0 0 6.5 22H20v-5" /> },
    )
}

#[function_component(IconCompass)]
pub(crate) fn icon_compass(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M12 2a10 10 0 1 0 0 20a10 10 0 0 0 0-20m4.24 5.76l-2.12 6.36l-6.36 2.12l2.12-6.36z" /> },
    )
}

#[function_component(IconPrinter)]
pub(crate) fn icon_printer(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M6 9V2h12v7M6 18H4a2 2 0 0 1-2-2v-5a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v5a2 2 0 0 1-2 2h-2M6 14h12v8H6z" /> },
    )
}

#[function_component(IconExternalLink)]
pub(crate) fn icon_external_link(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M15 3h6v6M10 14 21 3M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" /> },
    )
}

#[function_component(IconPanelLeft)]
pub(crate) fn icon_panel_left(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M3 3h18v18H3zM9 3v18" /> })
}

/// Sidebar glyph for a catalog section.
pub(crate) fn section_icon(section: SectionId) -> Html {
    let d = match section {
        SectionId::Colors => "M12 2a10 10 0 0 0 0 20c1.1 0 2-.9 2-2c0-.5-.2-1-.5-1.3c-.3-.4-.5-.8-.5-1.3c0-1.1.9-2 2-2h2.4A5.6 5.6 0 0 0 22 9.8C22 5.5 17.5 2 12 2M7 12h.01M9 7h.01M15 7h.01",
        SectionId::Typography => "M4 7V4h16v3M9 20h6M12 4v16",
        SectionId::Components => "M21 16V8l-9-5-9 5v8l9 5zM3.3 7 12 12l8.7-5M12 22V12",
        SectionId::Shadows => "M12 2 2 7l10 5 10-5zM2 17l10 5 10-5M2 12l10 5 10-5",
        SectionId::Icons => "m12 2 3.1 6.3 6.9 1-5 4.9 1.2 6.8L12 17.8 5.8 21l1.2-6.8-5-4.9 6.9-1z",
        SectionId::Grid => "M3 3h7v7H3zM14 3h7v7h-7zM14 14h7v7h-7zM3 14h7v7H3z",
        SectionId::Navigation => "m3 11 19-9-9 19-2-8z",
        SectionId::Forms => "M9 11l3 3L22 4M21 12v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11",
        SectionId::Naming => "M12 2H2v10l9.29 9.29a1 1 0 0 0 1.41 0l8.59-8.59a1 1 0 0 0 0-1.41zM7 7h.01",
    };
    html! { <PathIcon d={d} size={18} /> }
}
