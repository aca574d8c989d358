use yew::prelude::*;

use crate::data::events::EventListing;

#[derive(Properties, PartialEq)]
pub struct EventCardProps {
    pub event: &'static EventListing,
}

#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let event = props.event;
    let category = event.category;
    let percent = event.registration_percent();

    // Registration buttons are calls to action only
    let cta_class = if event.registration_open {
        "event-cta"
    } else {
        "event-cta closed"
    };

    html! {
        <div class="event-card">
            <div class="event-card-header">
                <div class="event-card-meta">
                    <span class={category.badge_class()}>
                        <span class="badge-icon">{category.icon()}</span>
                        {category.label()}
                    </span>
                    <div class="event-card-when">
                        <div>{event.display_date()}</div>
                        <div>{event.time}</div>
                    </div>
                </div>
                <h3 class="event-card-title">{event.title}</h3>
                <div class="event-card-location">{"📍 "}{event.location}</div>
            </div>
            <div class="event-card-body">
                <p class="event-card-description">{event.description}</p>
                <div class="registration">
                    <div class="registration-row">
                        <span class="muted">{"Registration Progress"}</span>
                        <span class="registration-count">
                            {format!("{}/{}", event.registered, event.capacity)}
                        </span>
                    </div>
                    <div class="registration-track">
                        <div
                            class="registration-fill"
                            style={format!("width: {:.1}%;", percent)}
                        />
                    </div>
                    <div class="registration-spots muted">
                        {format!("{} spots left", event.spots_left())}
                    </div>
                </div>
                <div class="event-card-footer">
                    <div class="event-prize">{event.prize}</div>
                    <button class={cta_class} disabled={!event.registration_open}>
                        {event.cta}
                    </button>
                </div>
            </div>
        </div>
    }
}
