use yew::prelude::*;

use crate::content;

#[function_component(Videos)]
pub fn videos() -> Html {
    html! {
        <section class="videos-section">
            <h2 class="section-title">{content::VIDEOS_TITLE}</h2>
            <p class="section-lead">{content::VIDEOS_DESCRIPTION}</p>
            <div class="video-grid">
                { for content::VIDEOS.iter().map(|video| html! {
                    <a class="video-card" key={video.id} href={video.watch_url()} target="_blank" rel="noopener noreferrer">
                        <div class="video-thumb">
                            <img src={video.thumbnail()} alt={video.title} loading="lazy" />
                            <span class="video-duration">{video.duration}</span>
                        </div>
                        <h3>{video.title}</h3>
                    </a>
                }) }
            </div>
        </section>
    }
}
