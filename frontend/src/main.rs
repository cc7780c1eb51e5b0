use yew::prelude::*;
use log::info;

mod config;
mod context;
mod forms {
    pub mod field;
    pub mod validator;
    pub mod session;
    pub mod model;
    pub mod sender;
    pub mod pipeline;
}
mod services {
    pub mod analytics;
    pub mod live_region;
    pub mod timer;
}
mod components {
    pub mod banner;
    pub mod char_counter;
    pub mod contact_form;
    pub mod live_region;
    pub mod password_strength;
}
mod pages {
    pub mod contact;
}

use context::{build_app_context, AppContext};
use pages::contact::ContactPage;


#[function_component]
fn App() -> Html {
    // Collaborators are wired once for the lifetime of the page.
    let app = use_state(build_app_context);

    html! {
        <ContextProvider<AppContext> context={(*app).clone()}>
            <ContactPage />
        </ContextProvider<AppContext>>
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
