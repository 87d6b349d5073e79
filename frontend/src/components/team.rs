use yew::prelude::*;

use crate::content::{self, TeamMember};

fn member_card(member: &TeamMember) -> Html {
    html! {
        <div class="team-card" key={member.name}>
            <img src={member.image} alt={member.name} class="team-photo" />
            <h3>{member.name}</h3>
            <p class="team-years">{format!("{}+ years in the markets", member.years)}</p>
            {
                if let Some(sebi) = member.sebi {
                    html! { <p class="team-sebi">{format!("SEBI Reg. No: {}", sebi)}</p> }
                } else {
                    html! {}
                }
            }
            <p class="team-bio">{member.bio}</p>
            {
                if let Some(link) = member.social {
                    html! { <a href={link} target="_blank" rel="noopener noreferrer" class="team-social">{"Follow"}</a> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    html! {
        <section id="about" class="team-section">
            <h2 class="section-title">{content::TEAM_TITLE}</h2>
            <div class="team-grid">
                { for content::TEAM.iter().map(member_card) }
            </div>
        </section>
    }
}
