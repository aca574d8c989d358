use yew::prelude::*;

use crate::pages::event_types::EventTypes;
use crate::pages::timeline::Timeline;
use crate::pages::upcoming_events::UpcomingEvents;

#[function_component(Index)]
pub fn index() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="index-page">
            <UpcomingEvents />
            <EventTypes />
            <Timeline />
        </div>
    }
}
