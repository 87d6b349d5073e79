use yew::prelude::*;
use web_sys::MouseEvent;
use yew::Properties;

use crate::content::{self, FaqEntry};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            {
                if *is_open {
                    html! { <div class="faq-answer"><p>{&props.answer}</p></div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn faq_column(entries: &'static [FaqEntry]) -> Html {
    html! {
        <div class="faq-column">
            { for entries.iter().map(|entry| html! {
                <FaqItem key={entry.question} question={entry.question} answer={entry.answer} />
            }) }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id="faq" class="faq-section">
            <h2 class="section-title">{content::FAQ_TITLE}</h2>
            <div class="faq-columns">
                { faq_column(content::FAQ_LEFT) }
                { faq_column(content::FAQ_RIGHT) }
            </div>
            <style>
                {r#"
                .faq-columns {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    background: none;
                    border: none;
                    padding: 1rem 0;
                    font-weight: 600;
                    cursor: pointer;
                    text-align: left;
                }
                .faq-item {
                    border-bottom: 1px solid #e5e7eb;
                }
                "#}
            </style>
        </section>
    }
}
