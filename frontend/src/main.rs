use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod animation {
    pub mod easing;
    pub mod trigger;
    pub mod tween;
    pub mod tilt;
    pub mod hooks;
}
mod components {
    pub mod icons;
    pub mod button;
    pub mod animated_title;
    pub mod navbar;
}
mod sections {
    pub mod hero;
    pub mod about;
    pub mod features;
    pub mod story;
    pub mod contact;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{
    home::Home,
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
            html! { <Home /> }
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
