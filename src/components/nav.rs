use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::BRAND;
use crate::sections::{NavigationItem, Section, NAVIGATION_ITEMS};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: Section,
    pub menu_open: bool,
    pub on_toggle: Callback<()>,
    pub on_navigate: Callback<Section>,
}

fn nav_link(item: &NavigationItem, active: Section, on_navigate: &Callback<Section>, class: &'static str) -> Html {
    let href = item.href;
    let onclick = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            match Section::from_anchor(href) {
                Some(section) => on_navigate.emit(section),
                None => warn!("nav link {} has no matching section", href),
            }
        })
    };
    let is_active = item.section() == Some(active);

    html! {
        <a
            href={href}
            class={classes!(class, is_active.then(|| "active"))}
            aria-current={is_active.then(|| "true")}
            {onclick}
        >
            {item.label}
        </a>
    }
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { active, menu_open, on_toggle, on_navigate } = props;

    let toggle_menu = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <div class="nav-logo">{BRAND}</div>

                <div class="nav-desktop">
                    {
                        for NAVIGATION_ITEMS
                            .iter()
                            .map(|item| nav_link(item, *active, on_navigate, "nav-link"))
                    }
                </div>

                <button
                    class="burger-menu"
                    aria-label="Toggle navigation"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="nav-mobile">
                            {
                                for NAVIGATION_ITEMS
                                    .iter()
                                    .map(|item| nav_link(item, *active, on_navigate, "nav-mobile-link"))
                            }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
