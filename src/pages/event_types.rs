use yew::prelude::*;

use crate::data::event_types::EVENT_TYPES;

#[function_component(EventTypes)]
pub fn event_types() -> Html {
    html! {
        <section class="event-types">
            <div class="section-container">
                <div class="section-heading">
                    <h2 class="gradient-title">{"Types of Events We Host"}</h2>
                    <p class="section-subtitle">
                        {"Discover the diverse range of events designed to foster innovation, learning, and entrepreneurship"}
                    </p>
                </div>

                <div class="event-type-grid">
                    { for EVENT_TYPES.iter().map(|event_type| html! {
                        <div key={event_type.id} class={classes!("event-type-card", event_type.tint)}>
                            <div class="event-type-watermark">{event_type.icon}</div>
                            <div class="event-type-icon">{event_type.icon}</div>
                            <h3>{event_type.title}</h3>
                            <p class="muted">{event_type.description}</p>
                            <h4>{"Key Features:"}</h4>
                            <ul class="event-type-features">
                                { for event_type.features.iter().map(|feature| html! {
                                    <li><span class="dot"></span>{*feature}</li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="section-cta">
                    <p class="muted">{"Ready to participate in our upcoming events?"}</p>
                    <div class="cta-row">
                        <button class="primary-button">{"View Upcoming Events"}</button>
                        <button class="accent-button">{"Join Our Community"}</button>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .event-types {
                    padding: 5rem 0;
                }
                .event-type-grid {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .event-type-card {
                    position: relative;
                    overflow: hidden;
                    padding: 1.5rem;
                    border-radius: 12px;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }
                .event-type-card:hover {
                    transform: scale(1.05);
                    border-color: rgba(126, 178, 255, 0.3);
                }
                .tint-blue { background: linear-gradient(135deg, rgba(59, 130, 246, 0.1), rgba(6, 182, 212, 0.1)); }
                .tint-green { background: linear-gradient(135deg, rgba(34, 197, 94, 0.1), rgba(16, 185, 129, 0.1)); }
                .tint-yellow { background: linear-gradient(135deg, rgba(234, 179, 8, 0.1), rgba(249, 115, 22, 0.1)); }
                .event-type-watermark {
                    position: absolute;
                    top: 0;
                    right: 0;
                    font-size: 4rem;
                    opacity: 0.1;
                }
                .event-type-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 8px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    background: rgba(30, 30, 30, 0.5);
                    margin-bottom: 1rem;
                }
                .event-type-features {
                    list-style: none;
                    padding: 0;
                }
                .event-type-features li {
                    display: flex;
                    align-items: center;
                    font-size: 0.875rem;
                    color: #999;
                    margin-bottom: 0.25rem;
                }
                .event-type-features .dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: #7EB2FF;
                    margin-right: 0.5rem;
                    flex-shrink: 0;
                }
                .cta-row {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                @media (max-width: 768px) {
                    .event-type-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
