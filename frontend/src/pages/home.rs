use yew::prelude::*;

use crate::components::{
    faq::Faq,
    footer::Footer,
    hero::Hero,
    ipo::Ipo,
    nav::Nav,
    plans::Plans,
    team::Team,
    videos::Videos,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing-page">
            <Nav />
            <Hero />
            <Plans />
            <Ipo />
            <Videos />
            <Team />
            <Faq />
            <Footer />
        </div>
    }
}
