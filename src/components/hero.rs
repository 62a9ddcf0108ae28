use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{self, HERO_SUBTITLE_DELAY_MS, HERO_TITLE_DELAY_MS};
use crate::content::{HERO_SUBTITLE, HERO_TITLE};
use crate::sections::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum HeroStage {
    Image,
    Title,
    Subtitle,
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let stage = use_state(|| HeroStage::Image);

    {
        let stage = stage.clone();
        use_effect_with_deps(
            move |_| {
                let title = {
                    let stage = stage.clone();
                    Timeout::new(HERO_TITLE_DELAY_MS, move || stage.set(HeroStage::Title))
                };
                let subtitle = Timeout::new(HERO_SUBTITLE_DELAY_MS, move || stage.set(HeroStage::Subtitle));

                // dropping a Timeout cancels it
                move || {
                    drop(title);
                    drop(subtitle);
                }
            },
            (),
        );
    }

    let shown = |at: HeroStage| (*stage >= at).then(|| "shown");

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero-frame">
                <div class="hero-dim"></div>
                <img
                    src={config::hero_image_url()}
                    alt="Hero Background"
                    class={classes!("hero-image", shown(HeroStage::Image))}
                />
                <div class="hero-copy">
                    <h1 class={classes!("hero-title", shown(HeroStage::Title))}>{HERO_TITLE}</h1>
                    <p class={classes!("hero-subtitle", shown(HeroStage::Subtitle))}>{HERO_SUBTITLE}</p>
                </div>
            </div>
        </section>
    }
}
