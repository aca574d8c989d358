use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod scroll {
    pub mod progress;
    pub mod tracker;
}
mod data {
    pub mod events;
    pub mod event_types;
    pub mod timeline;
}
mod components {
    pub mod event_card;
}
mod pages {
    pub mod index;
    pub mod upcoming_events;
    pub mod event_types;
    pub mod timeline;
    pub mod not_found;
}

use pages::{
    index::Index,
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Index /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #111;
                    color: #fff;
                    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                }
                .section-container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .gradient-title {
                    font-size: 2.25rem;
                    font-weight: 700;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-title {
                    font-size: 3rem;
                }
                .section-subtitle {
                    font-size: 1.25rem;
                    color: #999;
                    max-width: 48rem;
                    margin: 0 auto;
                    line-height: 1.6;
                }
                .section-cta {
                    text-align: center;
                    margin-top: 4rem;
                }
                .muted {
                    color: #999;
                }
                .badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.25rem;
                    font-size: 0.75rem;
                    font-weight: 600;
                    padding: 0.2rem 0.6rem;
                    border-radius: 9999px;
                    border: 1px solid;
                }
                .badge-blue { background: rgba(59, 130, 246, 0.1); color: #60a5fa; border-color: rgba(59, 130, 246, 0.2); }
                .badge-green { background: rgba(34, 197, 94, 0.1); color: #4ade80; border-color: rgba(34, 197, 94, 0.2); }
                .badge-purple { background: rgba(168, 85, 247, 0.1); color: #c084fc; border-color: rgba(168, 85, 247, 0.2); }
                .badge-orange { background: rgba(249, 115, 22, 0.1); color: #fb923c; border-color: rgba(249, 115, 22, 0.2); }
                .badge-yellow { background: rgba(234, 179, 8, 0.1); color: #facc15; border-color: rgba(234, 179, 8, 0.2); }
                .primary-button,
                .accent-button {
                    padding: 0.75rem 2rem;
                    border-radius: 8px;
                    font-weight: 600;
                    border: none;
                    cursor: pointer;
                    text-decoration: none;
                    color: white;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .primary-button {
                    background: #4169E1;
                }
                .accent-button {
                    background: linear-gradient(45deg, #7EB2FF, #a855f7);
                }
                .primary-button:hover,
                .accent-button:hover {
                    transform: scale(1.05);
                    box-shadow: 0 0 20px rgba(126, 178, 255, 0.4);
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
