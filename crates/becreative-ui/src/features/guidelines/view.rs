//! Guidelines view.
//!
//! # Design
//! - Each section body is a plain function over catalog tables.
//! - Reference links open in a new tab with `noopener`.

use becreative_catalog::guidelines::{
    ARIA_PRACTICES, DESIGN_PROCESS, DESIGN_SYSTEM_BENEFITS, FURTHER_READING, GuidelineSection,
    NIELSEN_HEURISTICS, QUALITY_CHECKLIST, RECOMMENDED_TOOLS, REFERENCE_LINKS,
    REFERENCES_INTRO, SUCCESS_METRICS, UX_FUNDAMENTALS, WCAG_INTRO, WCAG_PRINCIPLES,
    WHY_INTRO, checklist_item_id,
};
use becreative_catalog::{GuideNote, ListBlock};
use yew::prelude::*;

use super::{ChecklistTicks, checklist_progress};
use crate::components::accordion::Collapsible;
use crate::components::icons::IconExternalLink;
use crate::core::accordion::SingleOpen;
use crate::features::bullet_list;

#[function_component(GuidelinesView)]
pub(crate) fn guidelines_view() -> Html {
    let expanded = use_state(|| SingleOpen::new(Some(GuidelineSection::INITIAL)));
    let ticks = use_state(ChecklistTicks::default);

    let on_tick = {
        let ticks = ticks.clone();
        Callback::from(move |key: (usize, usize)| ticks.set(ticks.toggled(key)))
    };

    html! {
        <section class="bc-panel bc-guidelines">
            <header class="bc-panel-head">
                <h2>{"Diretrizes de Design"}</h2>
                <p class="bc-muted">{"Fundamentos de UX, acessibilidade e processo para aplicar o design system com qualidade."}</p>
            </header>
            {for GuidelineSection::all().into_iter().map(|section| {
                let toggle = {
                    let expanded = expanded.clone();
                    Callback::from(move |()| expanded.set(expanded.toggled(section)))
                };
                html! {
                    <Collapsible
                        key={section.id()}
                        id={section.id()}
                        class="bc-card"
                        title={html! { <h3>{section.title()}</h3> }}
                        open={expanded.is_open(section)}
                        on_toggle={toggle}
                    >
                        {section_body(section, &ticks, &on_tick)}
                    </Collapsible>
                }
            })}
            <div class="bc-two-col">
                {for SUCCESS_METRICS.iter().map(list_card)}
            </div>
            <div class="bc-card">
                <h3>{"Ferramentas Recomendadas"}</h3>
                <div class="bc-two-col">
                    {for RECOMMENDED_TOOLS.iter().map(|group| html! {
                        <div key={group.title}>
                            <h4>{group.title}</h4>
                            <ul class="bc-list">
                                {for group.tools.iter().map(|tool| html! {
                                    <li>
                                        <span>{tool.name}</span>
                                        <span class={classes!("bc-badge", tool.featured.then_some("is-featured"))}>{tool.tag}</span>
                                    </li>
                                })}
                            </ul>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

fn section_body(
    section: GuidelineSection,
    ticks: &ChecklistTicks,
    on_tick: &Callback<(usize, usize)>,
) -> Html {
    match section {
        GuidelineSection::WhyDesignSystem => html! {
            <>
                <p>{WHY_INTRO}</p>
                {note_grid(DESIGN_SYSTEM_BENEFITS)}
            </>
        },
        GuidelineSection::Accessibility => html! {
            <>
                <p>{WCAG_INTRO}</p>
                <div class="bc-two-col">{for WCAG_PRINCIPLES.iter().map(list_card)}</div>
                <h4>{"Boas Práticas ARIA"}</h4>
                <div class="bc-two-col">{for ARIA_PRACTICES.iter().map(list_card)}</div>
            </>
        },
        GuidelineSection::Fundamentals => note_grid(UX_FUNDAMENTALS),
        GuidelineSection::Heuristics => note_grid(NIELSEN_HEURISTICS),
        GuidelineSection::Process => html! {
            <ol class="bc-steps">
                {for DESIGN_PROCESS.iter().map(|phase| html! {
                    <li key={phase.title}>
                        <strong>{phase.title}</strong>
                        <p class="bc-muted">{phase.body}</p>
                    </li>
                })}
            </ol>
        },
        GuidelineSection::Checklist => render_checklist(ticks, on_tick),
        GuidelineSection::References => html! {
            <>
                <p>{REFERENCES_INTRO}</p>
                <ul class="bc-links">
                    {for REFERENCE_LINKS.iter().map(|link| html! {
                        <li key={link.url}>
                            <a href={link.url} target="_blank" rel="noopener noreferrer">
                                {link.title}
                                <IconExternalLink size={14} />
                            </a>
                            <p class="bc-muted">{link.description}</p>
                        </li>
                    })}
                </ul>
                <h4>{"Leituras Recomendadas"}</h4>
                {bullet_list(FURTHER_READING)}
            </>
        },
    }
}

fn render_checklist(ticks: &ChecklistTicks, on_tick: &Callback<(usize, usize)>) -> Html {
    let (done, total) = checklist_progress(ticks);
    html! {
        <>
            <p class="bc-muted">{format!("{done} de {total} itens verificados")}</p>
            <div class="bc-two-col">
                {for QUALITY_CHECKLIST.iter().enumerate().map(|(group, block)| html! {
                    <div class="bc-card" key={block.title}>
                        <h4>{block.title}</h4>
                        {for block.items.iter().enumerate().map(|(item, text)| {
                            let id = checklist_item_id(group, item);
                            let onchange = {
                                let on_tick = on_tick.clone();
                                Callback::from(move |_: Event| on_tick.emit((group, item)))
                            };
                            html! {
                                <label class="bc-check" for={id.clone()}>
                                    <input
                                        {id}
                                        type="checkbox"
                                        checked={ticks.is_open((group, item))}
                                        {onchange}
                                    />
                                    <span>{*text}</span>
                                </label>
                            }
                        })}
                    </div>
                })}
            </div>
        </>
    }
}

fn note_grid(notes: &'static [GuideNote]) -> Html {
    html! {
        <div class="bc-two-col">
            {for notes.iter().map(|note| html! {
                <div class="bc-note" key={note.title}>
                    <h4>{note.title}</h4>
                    <p class="bc-muted">{note.body}</p>
                </div>
            })}
        </div>
    }
}

fn list_card(block: &'static ListBlock) -> Html {
    html! {
        <div class="bc-card" key={block.title}>
            <h4>{block.title}</h4>
            {bullet_list(block.items)}
        </div>
    }
}
