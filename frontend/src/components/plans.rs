use yew::prelude::*;
use log::info;

use crate::components::subscription_dialog::SubscriptionDialog;
use crate::content::{self, Plan};

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    plan_key: AttrValue,
    cycle_key: AttrValue,
    on_subscribe: Callback<AttrValue>,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let Some(plan) = content::find_plan(Some(props.plan_key.as_str())) else {
        return html! {};
    };
    let price = plan.display_price(&props.cycle_key);

    let onclick = {
        let on_subscribe = props.on_subscribe.clone();
        let key = props.plan_key.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_subscribe.emit(key.clone());
        })
    };

    html! {
        <div class="plan-card">
            <h2 class="plan-name" title={plan.name}>{plan.name}</h2>
            {
                if let Some(price) = price {
                    html! { <p class="plan-price">{price}</p> }
                } else {
                    html! {}
                }
            }
            <h4>{"What you get"}</h4>
            <ul class="plan-features">
                { for plan.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
            </ul>
            <button class="plan-cta" {onclick}>{plan.cta_label}</button>
        </div>
    }
}

#[function_component(Plans)]
pub fn plans() -> Html {
    let active_cycle = use_state(|| {
        content::BILLING_CYCLES
            .first()
            .map_or(AttrValue::from(crate::config::DEFAULT_CYCLE_KEY), |c| AttrValue::from(c.key))
    });
    let dialog_plan = use_state(|| None::<AttrValue>);

    let on_subscribe = {
        let dialog_plan = dialog_plan.clone();
        let active_cycle = active_cycle.clone();
        Callback::from(move |plan_key: AttrValue| {
            info!("Subscribe clicked for plan {} ({})", plan_key, *active_cycle);
            dialog_plan.set(Some(plan_key));
        })
    };

    let on_close = {
        let dialog_plan = dialog_plan.clone();
        Callback::from(move |_: ()| dialog_plan.set(None))
    };

    html! {
        <section id={content::PLANS_ID} class="plans-section">
            <h1 class="section-title">{content::PLANS_TITLE}</h1>
            <div class="cycle-tabs">
                { for content::BILLING_CYCLES.iter().map(|cycle| {
                    let active = active_cycle.as_str() == cycle.key;
                    let onclick = {
                        let active_cycle = active_cycle.clone();
                        let key = cycle.key;
                        Callback::from(move |_: MouseEvent| active_cycle.set(AttrValue::from(key)))
                    };
                    html! {
                        <button class={classes!("cycle-tab", active.then(|| "active"))} {onclick}>
                            {cycle.label}
                        </button>
                    }
                }) }
            </div>
            <div class="plan-grid">
                { for content::PLANS.iter().map(|plan: &Plan| html! {
                    <PlanCard
                        plan_key={plan.key}
                        cycle_key={(*active_cycle).clone()}
                        on_subscribe={on_subscribe.clone()}
                    />
                }) }
            </div>
            <SubscriptionDialog
                open={dialog_plan.is_some()}
                on_close={on_close}
                plan_key={(*dialog_plan).clone()}
                cycle_key={Some((*active_cycle).clone())}
            />
        </section>
    }
}
