use yew::prelude::*;

use crate::content;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <picture>
                <source media="(min-width: 768px)" srcset="/assets/desktop-hero.png" />
                <source media="(max-width: 767px)" srcset="/assets/mobile-hero.png" />
                <img src="/assets/desktop-hero.png" alt="Background" class="hero-image" />
            </picture>
            <div class="hero-badges">
                <div class="hero-badge">{content::HERO_BADGE}</div>
                <a class="hero-badge linkedin" href="https://www.linkedin.com/" target="_blank" rel="noopener noreferrer">
                    {content::HERO_LINKEDIN}
                </a>
            </div>
        </section>
    }
}
