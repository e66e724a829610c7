//! Three-step reservation form: customer, contract, payment.
//!
//! Submission reserves every selected unit with its own request and reports
//! per-unit results; units that failed stay selected for another attempt.

use leptos::prelude::*;

use floorplan::controller::format_price;

use crate::net::types::PaymentMethod;
use crate::state::plan::PlanState;
use crate::state::reservation::{MAX_DURATION_MONTHS, ReservationState, Step, outcome_summary};

/// Labelled text input bound to one form field.
#[component]
fn Field(
    label: &'static str,
    name: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let reservation = expect_context::<RwSignal<ReservationState>>();
    let error = move || reservation.with(|r| r.error_for(name));

    view! {
        <label class="form-field" class:form-field--invalid=move || error().is_some()>
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=input_type
                name=name
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error().map(|message| view! { <span class="form-field__error">{message}</span> })}
        </label>
    }
}

#[component]
fn CustomerStep() -> impl IntoView {
    let r = expect_context::<RwSignal<ReservationState>>();

    view! {
        <Field
            label="Full name"
            name="full_name"
            value=Signal::derive(move || r.with(|r| r.customer.full_name.clone()))
            on_input=Callback::new(move |v: String| r.update(|r| r.customer.full_name = v))
        />
        <Field
            label="Email"
            name="email"
            input_type="email"
            value=Signal::derive(move || r.with(|r| r.customer.email.clone()))
            on_input=Callback::new(move |v: String| r.update(|r| r.customer.email = v))
        />
        <Field
            label="Phone"
            name="phone"
            input_type="tel"
            value=Signal::derive(move || r.with(|r| r.customer.phone.clone()))
            on_input=Callback::new(move |v: String| r.update(|r| r.customer.phone = v))
        />
        <Field
            label="DNI / NIE"
            name="document_id"
            value=Signal::derive(move || r.with(|r| r.customer.document_id.clone()))
            on_input=Callback::new(move |v: String| r.update(|r| r.customer.document_id = v))
        />
    }
}

#[component]
fn ContractStep() -> impl IntoView {
    let r = expect_context::<RwSignal<ReservationState>>();
    let duration_error = move || r.with(|r| r.error_for("duration_months"));

    view! {
        <Field
            label="Start date"
            name="start_date"
            input_type="date"
            value=Signal::derive(move || r.with(|r| r.contract.start_date.clone()))
            on_input=Callback::new(move |v: String| r.update(|r| r.contract.start_date = v))
        />
        <label class="form-field" class:form-field--invalid=move || duration_error().is_some()>
            <span class="form-field__label">"Duration (months)"</span>
            <input
                class="form-field__input"
                type="number"
                min="1"
                max=MAX_DURATION_MONTHS.to_string()
                prop:value=move || r.with(|r| r.contract.duration_months.to_string())
                on:input=move |ev| {
                    let months = event_target_value(&ev).trim().parse::<u32>().unwrap_or(0);
                    r.update(|r| r.contract.duration_months = months);
                }
            />
            {move || duration_error().map(|message| view! { <span class="form-field__error">{message}</span> })}
        </label>
        <label class="form-field form-field--checkbox">
            <input
                type="checkbox"
                prop:checked=move || r.with(|r| r.contract.insurance)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    r.update(|r| r.contract.insurance = checked);
                }
            />
            <span>"Add contents insurance"</span>
        </label>
    }
}

#[component]
fn PaymentStep() -> impl IntoView {
    let r = expect_context::<RwSignal<ReservationState>>();
    let needs_iban = move || r.with(|r| r.payment.method.needs_iban());

    view! {
        <label class="form-field">
            <span class="form-field__label">"Payment method"</span>
            <select
                class="form-field__input"
                prop:value=move || r.with(|r| r.payment.method.value())
                on:change=move |ev| {
                    if let Some(method) = PaymentMethod::from_value(&event_target_value(&ev)) {
                        r.update(|r| r.payment.method = method);
                    }
                }
            >
                {PaymentMethod::ALL
                    .into_iter()
                    .map(|method| view! { <option value=method.value()>{method.label()}</option> })
                    .collect_view()}
            </select>
        </label>
        <Show when=needs_iban>
            <Field
                label="IBAN"
                name="iban"
                value=Signal::derive(move || r.with(|r| r.iban_input.clone()))
                on_input=Callback::new(move |v: String| r.update(|r| r.iban_input = v))
            />
        </Show>
    }
}

#[component]
fn OutcomeSummary() -> impl IntoView {
    let r = expect_context::<RwSignal<ReservationState>>();

    move || {
        r.with(|r| r.outcome.clone()).map(|outcome| {
            let summary = outcome_summary(&outcome);
            let partial = !outcome.is_complete_success();
            view! {
                <div class="reservation-outcome" class:reservation-outcome--partial=partial>
                    <p>{summary}</p>
                    <ul>
                        {outcome
                            .failed
                            .into_iter()
                            .map(|failure| view! { <li>{format!("#{}: {}", failure.number, failure.message)}</li> })
                            .collect_view()}
                    </ul>
                </div>
            }
        })
    }
}

/// Reservation dialog. Hidden while the form is closed.
#[component]
pub fn ReservationForm() -> impl IntoView {
    let plan = expect_context::<RwSignal<PlanState>>();
    let reservation = expect_context::<RwSignal<ReservationState>>();

    let step = move || reservation.with(|r| r.step);
    let heading = move || {
        let current = step();
        match current.number() {
            Some(n) => format!("Step {n} of 3 · {}", current.title()),
            None => current.title().to_owned(),
        }
    };
    let summary = move || {
        plan.with(|p| format!("{} unit(s) · {}", p.selection.len(), format_price(p.total_price())))
    };

    let on_next = move |_| reservation.update(|r| {
        r.next();
    });
    let on_back = move |_| reservation.update(ReservationState::back);
    let on_close = move |_| reservation.update(ReservationState::close);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut template = None;
        reservation.update(|r| template = r.begin_submit());
        let Some(template) = template else {
            return;
        };
        let (tenant, units) = plan.with_untracked(|p| (p.tenant.clone().unwrap_or_default(), p.selected_units()));

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::submit_reservations(&tenant, units, template).await;
            plan.update(|p| {
                let reserved = p.apply_outcome(&outcome);
                log::info!("reserved {reserved} unit(s), {} failed", outcome.failed.len());
            });
            reservation.update(|r| r.finish_submit(outcome));
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (tenant, units, template);
        }
    };

    view! {
        <Show when=move || reservation.with(ReservationState::is_open)>
            <div class="reservation-form__backdrop">
                <form class="reservation-form" on:submit=on_submit>
                    <header class="reservation-form__header">
                        <h2>{heading}</h2>
                        <p class="reservation-form__summary">{summary}</p>
                    </header>
                    <div class="reservation-form__body">
                        {move || match step() {
                            Step::Customer => view! { <CustomerStep/> }.into_any(),
                            Step::Contract => view! { <ContractStep/> }.into_any(),
                            Step::Payment => view! { <PaymentStep/> }.into_any(),
                            Step::Submitting => view! { <p class="reservation-form__busy">"Sending reservations…"</p> }.into_any(),
                            Step::Done => view! { <OutcomeSummary/> }.into_any(),
                            Step::Closed => ().into_any(),
                        }}
                    </div>
                    <footer class="reservation-form__footer">
                        <button type="button" class="btn" on:click=on_close disabled=move || step() == Step::Submitting>
                            {move || if step() == Step::Done { "Close" } else { "Cancel" }}
                        </button>
                        <Show when=move || matches!(step(), Step::Contract | Step::Payment)>
                            <button type="button" class="btn" on:click=on_back>"Back"</button>
                        </Show>
                        <Show when=move || matches!(step(), Step::Customer | Step::Contract)>
                            <button type="button" class="btn btn--primary" on:click=on_next>"Next"</button>
                        </Show>
                        <Show when=move || step() == Step::Payment>
                            <button type="submit" class="btn btn--primary">"Confirm reservation"</button>
                        </Show>
                    </footer>
                </form>
            </div>
        </Show>
    }
}
