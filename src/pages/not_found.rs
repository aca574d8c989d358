use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <h1 class="gradient-title">{"Page not found"}</h1>
            <p class="muted">{"The page you were looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="primary-button">
                {"Back to events"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    text-align: center;
                }
                "#}
            </style>
        </section>
    }
}
