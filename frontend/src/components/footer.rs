use yew::prelude::*;

use crate::content;

#[function_component(Footer)]
pub fn footer() -> Html {
    let ra = &content::RA_INFO;
    html! {
        <footer class="site-footer">
            <div class="footer-brand">
                <img src={content::LOGO} alt={content::BRAND} />
                <span>{content::BRAND}</span>
            </div>
            <nav class="footer-nav">
                { for content::FOOTER_NAV.iter().map(|link| html! {
                    <a href={link.href} key={link.label}>{link.label}</a>
                }) }
            </nav>
            <div class="footer-ra">
                <p><strong>{"Research Analyst: "}</strong>{ra.name}</p>
                <p><strong>{"SEBI Registration No: "}</strong>{ra.sebi_reg_no}</p>
                <p>{ra.address}</p>
            </div>
            <div class="footer-disclaimers">
                { for content::DISCLAIMERS.iter().map(|line| html! { <p>{*line}</p> }) }
            </div>
            <div class="footer-bottom">
                <span>{content::COPYRIGHT}</span>
                <span>{content::CREDIT}</span>
            </div>
        </footer>
    }
}
