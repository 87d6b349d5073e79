use yew::prelude::*;
use web_sys::HtmlInputElement;
use gloo_timers::callback::Timeout;

use crate::content;
use crate::form::context::{use_subscription, SubscriptionHandle};
use crate::form::countries;
use crate::form::fields::{Field, FieldsPatch};
use crate::form::state::{FormState, Step};
use crate::form::validate::is_step_filled;

#[derive(Properties, PartialEq)]
pub struct SubscriptionDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub plan_key: Option<AttrValue>,
    #[prop_or_default]
    pub cycle_key: Option<AttrValue>,
}

fn text_input(handle: &SubscriptionHandle, field: Field) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        handle.update_field(field, input.value());
    })
}

fn error_line(state: &FormState, field: Field) -> Html {
    match state.error(field) {
        Some(message) => html! { <p class="field-error">{message.to_string()}</p> },
        None => html! {},
    }
}

fn text_field(
    handle: &SubscriptionHandle,
    state: &FormState,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: &str,
) -> Html {
    let has_error = state.error(field).is_some();
    html! {
        <div class="form-field">
            <label>{label}{" "}<span class="required">{"*"}</span></label>
            <input
                type={input_type}
                placeholder={placeholder}
                class={classes!("form-input", has_error.then(|| "invalid"))}
                value={value.to_string()}
                oninput={text_input(handle, field)}
            />
            { error_line(state, field) }
        </div>
    }
}

fn continue_button(handle: &SubscriptionHandle, state: &FormState, step: Step, label: &'static str, hint: &'static str) -> Html {
    let filled = is_step_filled(step, &state.fields);
    let onclick = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| match (step, step.next()) {
            (Step::Personal, Some(next)) => {
                if handle.validate_step(step) {
                    handle.set_step(next);
                }
            }
            _ => {
                handle.go_next_from(step);
            }
        })
    };
    html! {
        <button class="continue-button" disabled={!filled} title={(!filled).then(|| hint)} {onclick}>
            {label}{" ›"}
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct StepSectionProps {
    step: Step,
    active: bool,
    completed: bool,
    children: Children,
}

#[function_component(StepSection)]
fn step_section(props: &StepSectionProps) -> Html {
    let handle = use_subscription();
    let onclick = {
        let step = props.step;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            handle.set_step(step);
        })
    };
    let badge = if props.completed {
        html! { <span class="step-badge done">{"Done"}</span> }
    } else if props.active {
        html! { <span class="step-badge ongoing">{"In Progress"}</span> }
    } else {
        html! {}
    };

    html! {
        <div class={classes!("step-section", props.active.then(|| "open"), props.completed.then(|| "complete"))}>
            <button class="step-header" {onclick}>
                <div>
                    <h3>{props.step.title()}</h3>
                    <p>{props.step.subtitle()}</p>
                </div>
                {badge}
            </button>
            {
                if props.active {
                    html! { <div class="step-body">{ for props.children.iter() }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(CountryPicker)]
fn country_picker() -> Html {
    let handle = use_subscription();
    let open = use_state(|| false);
    let query = use_state(String::new);
    let current = handle.state().fields.country_code;

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    html! {
        <div class="country-picker">
            <button type="button" class="country-toggle" onclick={toggle}>
                {current}{" ▾"}
            </button>
            {
                if *open {
                    html! {
                        <div class="country-menu">
                            <input
                                type="text"
                                placeholder="Search countries..."
                                value={(*query).clone()}
                                oninput={on_search}
                            />
                            { for countries::search(&query).into_iter().map(|country| {
                                let onclick = {
                                    let handle = handle.clone();
                                    let open = open.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        handle.update_field(Field::CountryCode, country.code);
                                        open.set(false);
                                    })
                                };
                                html! {
                                    <div class="country-option" {onclick}>
                                        {country.code}{" "}{country.label}
                                    </div>
                                }
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(SubscriptionDialog)]
pub fn subscription_dialog(props: &SubscriptionDialogProps) -> Html {
    let handle = use_subscription();
    let state = handle.state();
    let thanked = use_state(|| false);

    // Seed plan and cycle each time the dialog opens for a (possibly new) plan.
    {
        let handle = handle.clone();
        let stored_cycle = state.fields.cycle_key.clone();
        let thanked = thanked.clone();
        use_effect_with_deps(
            move |(open, plan_key, cycle_key)| {
                if *open {
                    thanked.set(false);
                    let plan_key = plan_key
                        .as_ref()
                        .map(|key| key.to_string())
                        .or_else(|| content::find_plan(None).map(|p| p.key.to_string()));
                    let cycle = content::initial_cycle(cycle_key.as_deref(), stored_cycle.as_deref());
                    let patch = match plan_key {
                        Some(plan_key) => FieldsPatch::plan(plan_key, cycle),
                        None => FieldsPatch {
                            cycle_key: Some(cycle),
                            ..FieldsPatch::default()
                        },
                    };
                    handle.init(patch);
                }
                || ()
            },
            (props.open, props.plan_key.clone(), props.cycle_key.clone()),
        );
    }

    if !props.open {
        return html! {};
    }

    let plan = content::find_plan(state.fields.plan_key.as_deref());
    let active_cycle = state
        .fields
        .cycle_key
        .clone()
        .unwrap_or_else(|| content::initial_cycle(None, None));
    let price = plan.and_then(|plan| plan.display_price(&active_cycle));
    let (done, total) = state.progress();
    let fields = &state.fields;

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_pan = {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.update_field(Field::Pan, input.value().to_uppercase());
        })
    };

    let on_consent = {
        let handle = handle.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.update_field(Field::Consent, input.checked());
        })
    };

    let on_submit = {
        let handle = handle.clone();
        let on_close = props.on_close.clone();
        let thanked = thanked.clone();
        Callback::from(move |_: MouseEvent| {
            if handle.submit() {
                thanked.set(true);
                // leave the thank-you banner up for a moment before closing
                let on_close = on_close.clone();
                Timeout::new(1_500, move || on_close.emit(())).forget();
            }
        })
    };

    let personal = html! {
        <>
            { text_field(&handle, &state, Field::FullName, "Full Name", "text", "Enter your full name", &fields.full_name) }
            { text_field(&handle, &state, Field::Email, "Email", "email", "Enter your email address", &fields.email) }
            { text_field(&handle, &state, Field::Dob, "Date of Birth", "date", "", &fields.dob) }
            { continue_button(&handle, &state, Step::Personal, "Continue to Contact", "Fill all required fields") }
        </>
    };

    let contact = html! {
        <>
            <div class="form-field">
                <label>{"Phone Number "}<span class="required">{"*"}</span></label>
                <div class="phone-row">
                    <CountryPicker />
                    <input
                        type="tel"
                        placeholder="Enter mobile number"
                        class={classes!("form-input", state.error(Field::Phone).is_some().then(|| "invalid"))}
                        value={fields.phone.clone()}
                        oninput={text_input(&handle, Field::Phone)}
                    />
                </div>
                { error_line(&state, Field::Phone) }
            </div>
            { text_field(&handle, &state, Field::Address, "Address", "text", "House / street / area", &fields.address) }
            { text_field(&handle, &state, Field::City, "City", "text", "City", &fields.city) }
            { text_field(&handle, &state, Field::Pincode, "PIN / Postal Code", "text", "e.g. 560093", &fields.pincode) }
            { continue_button(&handle, &state, Step::Contact, "Continue to KYC", "Complete phone and address details") }
        </>
    };

    let kyc = html! {
        <>
            <div class="form-field">
                <label>{"PAN Number "}<span class="required">{"*"}</span></label>
                <input
                    type="text"
                    placeholder="Enter PAN (e.g., ABCDE1234F)"
                    maxlength="10"
                    class={classes!("form-input", "uppercase", state.error(Field::Pan).is_some().then(|| "invalid"))}
                    value={fields.pan.clone()}
                    oninput={on_pan}
                />
                { error_line(&state, Field::Pan) }
            </div>
            { continue_button(&handle, &state, Step::Kyc, "Continue to Plan", "Enter a valid PAN") }
        </>
    };

    let plan_step = if *thanked {
        html! {
            <div class="submitted-banner">
                <h3>{"Thank you!"}</h3>
                <p>{"Your subscription request has been recorded."}</p>
            </div>
        }
    } else {
        html! {
            <>
                <div class="cycle-options">
                    <div class="cycle-options-title">{"One-Time Options"}</div>
                    { for content::BILLING_CYCLES.iter().map(|cycle| {
                        let selected = active_cycle == cycle.key;
                        let onclick = {
                            let handle = handle.clone();
                            let key = cycle.key;
                            Callback::from(move |_: MouseEvent| handle.update_field(Field::CycleKey, key))
                        };
                        let cycle_price = plan
                            .and_then(|plan| plan.price_for(cycle.key))
                            .map(|amount| format!("{}{}", plan.map_or("", |p| p.currency_symbol), content::format_inr(amount)));
                        html! {
                            <button type="button" class={classes!("cycle-option", selected.then(|| "selected"))} {onclick}>
                                <span class="cycle-label">{cycle.label}</span>
                                <span class="cycle-price">{cycle_price.unwrap_or_default()}</span>
                            </button>
                        }
                    }) }
                </div>
                { error_line(&state, Field::CycleKey) }
                <div class="consent-box">
                    <label>
                        <input type="checkbox" checked={fields.consent} onchange={on_consent} />
                        <span>
                            {"I have gone through the Disclaimers mentioned in the website. I'm purchasing this plan with understanding of the disclaimers."}
                        </span>
                    </label>
                    { error_line(&state, Field::Consent) }
                </div>
                <button
                    class="submit-button"
                    disabled={!is_step_filled(Step::Plan, fields)}
                    onclick={on_submit}
                >
                    {"🚀 Complete Investment"}
                </button>
            </>
        }
    };

    let body_for = |step: Step| -> Html {
        match step {
            Step::Personal => personal.clone(),
            Step::Contact => contact.clone(),
            Step::Kyc => kyc.clone(),
            Step::Plan => plan_step.clone(),
        }
    };

    html! {
        <div class="dialog-backdrop">
            <div class="subscription-dialog">
                <div class="dialog-banner">
                    <div>
                        <h2>{plan.map_or("prime".to_string(), |p| p.name.to_lowercase())}</h2>
                        <p>{price.unwrap_or_else(|| "Complete your subscription".to_string())}</p>
                    </div>
                    <button class="dialog-close" onclick={close}>{"×"}</button>
                </div>
                <div class="dialog-progress">
                    <div class="progress-label">
                        <span>{"Progress"}</span>
                        <span class="progress-count">{format!("{}/{} Complete", done, total)}</span>
                    </div>
                    <div class="progress-track">
                        <div class="progress-fill" style={format!("width: {}%;", state.progress_percent())}></div>
                    </div>
                </div>
                <div class="dialog-steps">
                    { for Step::ALL.iter().map(|step| html! {
                        <StepSection
                            step={*step}
                            active={state.step == *step}
                            completed={state.completed.get(*step)}
                        >
                            { body_for(*step) }
                        </StepSection>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .dialog-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(15, 23, 42, 0.55);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 50;
                }
                .subscription-dialog {
                    width: min(28rem, 94vw);
                    max-height: 92vh;
                    overflow-y: auto;
                    border-radius: 1rem;
                    background: linear-gradient(to right, #f9fafb, #eff6ff);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .dialog-banner {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    min-height: 120px;
                    padding: 0 1.5rem;
                    color: white;
                    background: linear-gradient(135deg, #2563eb, #1d4ed8, #3730a3);
                }
                .progress-track {
                    height: 0.5rem;
                    background: #e5e7eb;
                    border-radius: 9999px;
                    overflow: hidden;
                }
                .progress-fill {
                    height: 100%;
                    background: linear-gradient(to right, #3b82f6, #4f46e5);
                    transition: width 0.7s ease-out;
                }
                .step-section {
                    margin: 0.75rem 1rem;
                    border-radius: 0.75rem;
                    background: white;
                    box-shadow: 0 0 0 2px #60a5fa;
                }
                .step-section.complete {
                    box-shadow: 0 0 0 2px #4ade80;
                }
                .form-input.invalid {
                    border-color: #fca5a5;
                }
                .field-error {
                    color: #dc2626;
                    font-size: 0.75rem;
                }
                .form-input.uppercase {
                    text-transform: uppercase;
                }
                .cycle-option.selected {
                    border-color: #2563eb;
                    background: #eff6ff;
                }
                "#}
            </style>
        </div>
    }
}
