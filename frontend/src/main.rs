use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod error;
mod nav {
    pub mod menu;
    pub mod scroll;
    pub mod sections;
    pub mod viewport;
    #[cfg(test)]
    pub mod testing;
}
mod components {
    pub mod audience;
    pub mod features;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod how_it_works;
    pub mod team;
    pub mod vision;
}
mod pages {
    pub mod home;
}

use components::header::Header;
use config::HeaderConfig;
use pages::home::Home;

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
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header config={HeaderConfig::default()} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting SnapClass site");
    yew::Renderer::<App>::new().render();
}
