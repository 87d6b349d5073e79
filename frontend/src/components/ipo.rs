use yew::prelude::*;

use crate::content::{self, IpoCard};

fn ipo_card(card: &IpoCard) -> Html {
    html! {
        <div class="ipo-card" key={card.key}>
            <h3>{card.name}</h3>
            <p class="ipo-price">
                {format!("{}{} {}", card.currency_symbol, content::format_inr(card.price), card.price_suffix)}
            </p>
            <div class="ipo-description">
                { for card.description.split("\n\n").map(|para| html! { <p>{para}</p> }) }
            </div>
            <a class="plan-cta" href={format!("#{}", content::PLANS_ID)}>{"Invest Now"}</a>
        </div>
    }
}

#[function_component(Ipo)]
pub fn ipo() -> Html {
    html! {
        <section class="ipo-section">
            <h2 class="section-title">{content::IPO_TITLE}</h2>
            <div class="cycle-tabs">
                <span class="cycle-tab active">{"Yearly"}</span>
            </div>
            <div class="ipo-grid">
                { for content::IPO_CARDS.iter().map(ipo_card) }
            </div>
        </section>
    }
}
