use yew::prelude::*;

use crate::data::timeline::{is_left, TimelineEntry, TIMELINE};
use crate::scroll::tracker::use_scroll_progress;

#[derive(Properties, PartialEq)]
pub struct TimelineItemProps {
    pub entry: &'static TimelineEntry,
    pub left: bool,
    pub reached: bool,
}

#[function_component(TimelineItem)]
pub fn timeline_item(props: &TimelineItemProps) -> Html {
    let TimelineItemProps { entry, left, reached } = props;
    let kind = entry.kind;

    html! {
        <>
            {
                if let Some(group) = entry.group {
                    html! { <div class="timeline-group">{group}</div> }
                } else {
                    html! {}
                }
            }
            <div class={classes!("timeline-row", if *left { "left" } else { "right" })}>
                <div class="timeline-checkpoint">
                    <div class={classes!("checkpoint-dot", reached.then(|| "reached"))}></div>
                </div>
                <div class="timeline-card-slot">
                    <div class={classes!("timeline-card", if *reached { "reached" } else { "pending" })}>
                        <div class="timeline-card-meta">
                            <span class={kind.badge_class()}>
                                <span class="badge-icon">{kind.icon()}</span>
                                {kind.label()}
                            </span>
                            <span class="muted">{entry.date}</span>
                        </div>
                        <h3>{entry.title}</h3>
                        <p class="muted">{entry.description}</p>
                        <div class="timeline-card-footer">
                            <span class="timeline-status">{entry.status.label()}</span>
                            {
                                if let Some(count) = entry.participants {
                                    html! { <span class="muted">{format!("👥 {}+", count)}</span> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </div>
                </div>
                <div class="timeline-spacer"></div>
            </div>
        </>
    }
}

#[function_component(Timeline)]
pub fn timeline() -> Html {
    let container = use_node_ref();
    let state = use_scroll_progress(container.clone(), TIMELINE.len());
    let percent = state.percent();

    html! {
        <section class="timeline-section">
            <div class="section-container">
                <div class="section-heading">
                    <h2 class="gradient-title">{"Our Journey"}</h2>
                    <p class="section-subtitle">
                        {"Follow our timeline of achievements, milestones, and upcoming events"}
                    </p>
                </div>

                <div ref={container} class="timeline-track">
                    <div class="timeline-spine">
                        <div class="timeline-progress" style={format!("height: {:.2}%;", percent)}></div>
                    </div>
                    <div class="timeline-ball" style={format!("top: {:.2}%;", percent)}>
                        <div class="timeline-ball-ping"></div>
                    </div>
                    <div class="timeline-entries">
                        { for TIMELINE.iter().enumerate().map(|(index, entry)| html! {
                            <TimelineItem
                                key={entry.id}
                                entry={entry}
                                left={is_left(index)}
                                reached={state.is_reached(index)}
                            />
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .timeline-section {
                    padding: 5rem 0;
                    position: relative;
                    overflow: hidden;
                }
                .timeline-track {
                    position: relative;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .timeline-spine {
                    position: absolute;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 4px;
                    height: 100%;
                    background: rgba(255, 255, 255, 0.08);
                }
                .timeline-progress {
                    width: 100%;
                    background: linear-gradient(180deg, #7EB2FF, #4169E1);
                    transition: height 0.3s ease;
                }
                .timeline-ball {
                    position: absolute;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 50%;
                    background: #7EB2FF;
                    box-shadow: 0 0 20px #7EB2FF;
                    transition: top 0.3s ease;
                    z-index: 10;
                }
                .timeline-ball-ping {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    background: #7EB2FF;
                    opacity: 0.75;
                    animation: timeline-ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
                }
                @keyframes timeline-ping {
                    75%, 100% { transform: scale(2); opacity: 0; }
                }
                .timeline-entries {
                    display: flex;
                    flex-direction: column;
                    gap: 4rem;
                }
                .timeline-group {
                    position: relative;
                    z-index: 20;
                    align-self: center;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: #1e1e1e;
                    border: 1px solid rgba(126, 178, 255, 0.3);
                    font-weight: 600;
                }
                .timeline-row {
                    position: relative;
                    display: flex;
                    align-items: center;
                }
                .timeline-row.right {
                    flex-direction: row-reverse;
                }
                .timeline-checkpoint {
                    position: absolute;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 20;
                }
                .checkpoint-dot {
                    width: 1rem;
                    height: 1rem;
                    border-radius: 50%;
                    border: 4px solid #444;
                    background: #222;
                    transition: all 0.5s ease;
                }
                .checkpoint-dot.reached {
                    background: #7EB2FF;
                    border-color: #7EB2FF;
                    box-shadow: 0 0 12px #7EB2FF;
                }
                .timeline-card-slot,
                .timeline-spacer {
                    width: 41.666%;
                }
                .timeline-row.left .timeline-card-slot { padding-right: 2rem; }
                .timeline-row.right .timeline-card-slot { padding-left: 2rem; }
                .timeline-card {
                    background: rgba(30, 30, 30, 0.5);
                    border-radius: 12px;
                    padding: 1.25rem;
                    transition: all 0.5s ease;
                }
                .timeline-card.reached {
                    border: 1px solid rgba(126, 178, 255, 0.3);
                    box-shadow: 0 0 18px rgba(65, 105, 225, 0.25);
                    transform: translateY(0);
                    opacity: 1;
                }
                .timeline-card.pending {
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    transform: translateY(1rem);
                    opacity: 0.6;
                }
                .timeline-card-meta,
                .timeline-card-footer {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    font-size: 0.875rem;
                }
                .timeline-status {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #7EB2FF;
                }
                "#}
            </style>
        </section>
    }
}
