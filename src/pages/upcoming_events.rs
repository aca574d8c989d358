use yew::prelude::*;

use crate::components::event_card::EventCard;
use crate::data::events::UPCOMING_EVENTS;

#[function_component(UpcomingEvents)]
pub fn upcoming_events() -> Html {
    html! {
        <section class="upcoming-events">
            <div class="section-container">
                <div class="section-heading">
                    <h1 class="gradient-title hero-title">{"Upcoming Events"}</h1>
                    <p class="section-subtitle">
                        {"Discover amazing events, workshops, and conferences that will advance your career and expand your network. Register now to secure your spot!"}
                    </p>
                </div>

                <div class="event-grid">
                    { for UPCOMING_EVENTS.iter().map(|event| html! {
                        <EventCard key={event.id} event={event} />
                    }) }
                </div>

                <div class="section-cta">
                    <p class="muted">{"Want to stay updated on future events?"}</p>
                    <button class="accent-button">{"Subscribe to Newsletter"}</button>
                </div>
            </div>
            <style>
                {r#"
                .upcoming-events {
                    padding: 5rem 0;
                    background: radial-gradient(ellipse at top, rgba(126, 178, 255, 0.12), transparent 60%);
                }
                .event-grid {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .event-card {
                    background: rgba(30, 30, 30, 0.8);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 12px;
                    padding: 1.5rem;
                    transition: border-color 0.3s ease, box-shadow 0.3s ease;
                }
                .event-card:hover {
                    border-color: rgba(126, 178, 255, 0.3);
                    box-shadow: 0 0 24px rgba(126, 178, 255, 0.15);
                }
                .event-card:hover .event-card-title {
                    color: #7EB2FF;
                }
                .event-card-meta {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 0.75rem;
                }
                .event-card-when {
                    text-align: right;
                    font-size: 0.875rem;
                    color: #999;
                }
                .event-card-title {
                    font-size: 1.25rem;
                    margin: 0 0 0.25rem;
                    transition: color 0.3s ease;
                }
                .event-card-location {
                    font-size: 0.875rem;
                    color: #999;
                }
                .event-card-description {
                    color: #bbb;
                    line-height: 1.6;
                }
                .registration-row {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.875rem;
                    margin-bottom: 0.5rem;
                }
                .registration-count {
                    font-weight: 500;
                }
                .registration-track {
                    width: 100%;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    overflow: hidden;
                }
                .registration-fill {
                    height: 100%;
                    border-radius: 9999px;
                    background: linear-gradient(45deg, #7EB2FF, #4169E1);
                    transition: width 0.5s ease;
                }
                .registration-spots {
                    font-size: 0.75rem;
                    margin-top: 0.35rem;
                }
                .event-card-footer {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding-top: 1rem;
                }
                .event-prize {
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #7EB2FF;
                }
                .event-cta {
                    background: #4169E1;
                    color: white;
                    border: none;
                    padding: 0.6rem 1.2rem;
                    border-radius: 8px;
                    cursor: pointer;
                }
                .event-cta.closed {
                    background: rgba(255, 255, 255, 0.1);
                    color: #888;
                    cursor: not-allowed;
                }
                @media (max-width: 768px) {
                    .event-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
