use yew::prelude::*;

pub mod config;
pub mod content;
pub mod dom;
pub mod sections;
pub mod state;
pub mod tracker;

pub mod components {
    pub mod cards;
    pub mod hero;
    pub mod nav;
}
pub mod pages {
    pub mod home;
}

use pages::home::Page;

#[function_component]
pub fn App() -> Html {
    html! { <Page /> }
}
