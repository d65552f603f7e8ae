use log::{info, Level};
use yew::prelude::*;

mod config;
mod motion {
    pub mod easing;
    pub mod frame_loop;
    pub mod helix;
    pub mod preference;
}
mod state {
    pub mod contact;
    pub mod modal_session;
    pub mod quote_cursor;
}
mod components {
    pub mod contact_form;
    pub mod counters;
    pub mod embed_modal;
    pub mod helix;
    pub mod nav;
    pub mod quotes;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use motion::preference::MotionPreference;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    // Resolved once; animated components read it from context.
    let motion = use_state(MotionPreference::detect);

    html! {
        <ContextProvider<MotionPreference> context={*motion}>
            <Nav />
            <Landing />
        </ContextProvider<MotionPreference>>
    }
}

#[cfg(debug_assertions)]
fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
fn log_level() -> Level {
    Level::Info
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
