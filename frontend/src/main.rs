use yew::prelude::*;
use log::info;

mod config;
mod content;
mod form {
    pub mod context;
    pub mod countries;
    pub mod fields;
    pub mod state;
    pub mod storage;
    pub mod store;
    pub mod validate;
}
mod components {
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod ipo;
    pub mod nav;
    pub mod plans;
    pub mod subscription_dialog;
    pub mod team;
    pub mod videos;
}
mod pages {
    pub mod home;
}

use form::context::SubscriptionProvider;
use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <SubscriptionProvider>
            <Home />
        </SubscriptionProvider>
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
