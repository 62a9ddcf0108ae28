use log::{debug, info, warn};
use yew::prelude::*;

use crate::components::cards::{AwardBadge, OfficeCard, PortfolioTile, ServiceCard, TeamMemberCard};
use crate::components::hero::Hero;
use crate::components::nav::Nav;
use crate::content::{AWARDS, COPYRIGHT, OFFICES, PORTFOLIO, SERVICES, TEAM};
use crate::dom::{self, DomError, ScrollListener};
use crate::sections::{RevealSet, RevealTarget, Section};
use crate::state::{PageAction, PageState};
use crate::tracker;

/// Reads layout once and reports what the tracker derives from it.
fn sync_with_viewport(dispatcher: &UseReducerDispatcher<PageState>) -> Result<(), DomError> {
    let viewport = dom::viewport()?;
    let document = dom::document()?;

    if let Some(section) = tracker::active_section(&viewport, |s| dom::section_bounds(&document, s)) {
        dispatcher.dispatch(PageAction::Observe(section));
    }

    let seen = tracker::visible_targets(&viewport, |t| dom::reveal_bounds(&document, t));
    if !seen.is_empty() {
        dispatcher.dispatch(PageAction::Reveal(seen));
    }
    Ok(())
}

fn reveal_class(revealed: RevealSet, target: RevealTarget) -> Classes {
    classes!("reveal", revealed.contains(target).then(|| "visible"))
}

#[function_component(Page)]
pub fn page() -> Html {
    let state = use_reducer_eq(PageState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let handler = move || {
                    if let Err(e) = sync_with_viewport(&dispatcher) {
                        debug!("skipping scroll sync: {}", e);
                    }
                };
                // Initial check
                handler();

                let listener = match ScrollListener::attach(handler) {
                    Ok(listener) => Some(listener),
                    Err(e) => {
                        warn!("section tracking disabled: {}", e);
                        None
                    }
                };

                move || drop(listener)
            },
            (),
        );
    }

    let on_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PageAction::ToggleMenu))
    };

    let on_navigate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |section: Section| {
            info!("navigating to {}", section);
            if let Err(e) = dom::scroll_to_section(section) {
                warn!("smooth scroll skipped: {}", e);
            }
            dispatcher.dispatch(PageAction::Navigate(section));
        })
    };

    let revealed = state.revealed;

    html! {
        <div class="page">
            <style>{PAGE_CSS}</style>
            <Nav
                active={state.active}
                menu_open={state.menu_open}
                {on_toggle}
                {on_navigate}
            />

            <Hero />

            <section id={Section::Services.id()} class="content-section">
                <div class="section-inner">
                    <h2>{"Our Services"}</h2>
                    <div class="grid grid-4">
                        { for SERVICES.iter().map(|service| html! { <ServiceCard {service} /> }) }
                    </div>
                </div>
            </section>

            <section
                id={Section::Portfolio.id()}
                data-reveal={RevealTarget::Portfolio.key()}
                class={classes!("content-section", "alt", reveal_class(revealed, RevealTarget::Portfolio))}
            >
                <div class="section-inner">
                    <h2>{"Our Portfolio"}</h2>
                    <div class="grid grid-3">
                        { for PORTFOLIO.iter().map(|item| html! { <PortfolioTile {item} /> }) }
                    </div>
                </div>
            </section>

            <section
                data-reveal={RevealTarget::Awards.key()}
                class={classes!("content-section", reveal_class(revealed, RevealTarget::Awards))}
            >
                <div class="section-inner">
                    <h2>{"International Recognition"}</h2>
                    <div class="grid grid-3">
                        { for AWARDS.iter().map(|award| html! { <AwardBadge {award} /> }) }
                    </div>
                </div>
            </section>

            <section
                id={Section::Team.id()}
                data-reveal={RevealTarget::Team.key()}
                class={classes!("content-section", "alt", reveal_class(revealed, RevealTarget::Team))}
            >
                <div class="section-inner">
                    <h2>{"Meet Our Team"}</h2>
                    <div class="grid grid-3">
                        { for TEAM.iter().map(|member| html! { <TeamMemberCard {member} /> }) }
                    </div>
                </div>
            </section>

            <section
                id={Section::Contact.id()}
                data-reveal={RevealTarget::Contact.key()}
                class={classes!("content-section", reveal_class(revealed, RevealTarget::Contact))}
            >
                <div class="section-inner">
                    <h2>{"Contact Us"}</h2>
                    <div class="grid grid-2">
                        { for OFFICES.iter().map(|office| html! { <OfficeCard {office} /> }) }
                    </div>
                </div>
            </section>

            <footer
                data-reveal={RevealTarget::Footer.key()}
                class={classes!("site-footer", reveal_class(revealed, RevealTarget::Footer))}
            >
                <p>{COPYRIGHT}</p>
            </footer>
        </div>
    }
}

const PAGE_CSS: &str = r#"
    body {
        margin: 0;
        background: #111827;
        color: #d1d5db;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 50;
        background: #1f2937;
    }
    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1rem;
        height: 4rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        color: white;
        font-size: 1.25rem;
        font-weight: bold;
    }
    .nav-desktop {
        display: flex;
        gap: 1rem;
    }
    .nav-link, .nav-mobile-link {
        color: #d1d5db;
        text-decoration: none;
        transition: color 0.2s;
    }
    .nav-link:hover, .nav-mobile-link:hover {
        color: white;
    }
    .nav-link.active, .nav-mobile-link.active {
        color: #ef4444;
        font-weight: 500;
    }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        color: #d1d5db;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .nav-mobile {
        display: none;
        padding: 0.5rem 0.5rem 0.75rem;
    }
    .nav-mobile-link {
        display: block;
        padding: 0.5rem 0.75rem;
    }
    @media (max-width: 768px) {
        .nav-desktop { display: none; }
        .burger-menu { display: block; }
        .nav-mobile { display: block; }
    }
    .hero {
        padding-top: 4rem;
    }
    .hero-frame {
        position: relative;
        height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
        overflow: hidden;
    }
    .hero-dim {
        position: absolute;
        inset: 0;
        background: black;
        opacity: 0.5;
    }
    .hero-image {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: contain;
        opacity: 0;
        transform: scale(1.1);
        transition: opacity 1s, transform 1s;
    }
    .hero-copy {
        position: relative;
        z-index: 10;
        max-width: 48rem;
        padding: 0 1rem;
    }
    .hero-title, .hero-subtitle {
        opacity: 0;
        transform: translateY(20px);
        transition: opacity 0.6s, transform 0.6s;
    }
    .hero-title {
        color: white;
        font-size: 3.75rem;
        margin-bottom: 1.5rem;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        color: #e5e7eb;
    }
    .hero .shown {
        opacity: 1;
        transform: none;
    }
    .content-section {
        padding: 5rem 0;
        background: #111827;
    }
    .content-section.alt {
        background: #1f2937;
    }
    .section-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .section-inner h2 {
        color: white;
        font-size: 1.875rem;
        text-align: center;
        margin-bottom: 3rem;
    }
    .grid {
        display: grid;
        gap: 1.5rem;
        grid-template-columns: 1fr;
    }
    @media (min-width: 768px) {
        .grid-2, .grid-3, .grid-4 { grid-template-columns: repeat(2, 1fr); }
    }
    @media (min-width: 1024px) {
        .grid-3 { grid-template-columns: repeat(3, 1fr); }
        .grid-4 { grid-template-columns: repeat(4, 1fr); }
    }
    .reveal {
        opacity: 0;
        transition: opacity 0.8s;
    }
    .reveal.visible {
        opacity: 1;
    }
    .service-card {
        background: #1f2937;
        padding: 1.5rem;
        border-radius: 0.5rem;
        transition: background 0.2s;
    }
    .service-card:hover {
        background: #374151;
    }
    .service-card h3, .team-member h3, .office-card h3 {
        color: white;
    }
    .portfolio-tile {
        position: relative;
    }
    .portfolio-tile img {
        width: 100%;
        height: 16rem;
        object-fit: cover;
        border-radius: 0.5rem;
    }
    .portfolio-overlay {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(0, 0, 0, 0.5);
        color: white;
        opacity: 0;
        transition: opacity 0.2s;
    }
    .portfolio-tile:hover .portfolio-overlay {
        opacity: 1;
    }
    .award-badge {
        display: flex;
        align-items: center;
        gap: 1rem;
        background: #1f2937;
        padding: 1rem;
        border-radius: 0.5rem;
        color: white;
    }
    .award-icon {
        color: #eab308;
        font-size: 2rem;
    }
    .team-member {
        text-align: center;
    }
    .team-avatar img {
        width: 8rem;
        height: 8rem;
        border-radius: 9999px;
        object-fit: cover;
        background: #374151;
    }
    .office-line {
        display: flex;
        align-items: flex-start;
        gap: 1rem;
    }
    .office-icon {
        color: #ef4444;
    }
    .site-footer {
        background: #1f2937;
        padding: 2rem 0;
        text-align: center;
        color: #9ca3af;
    }
"#;
