use super::list::state::CustomersState;
use crate::shared::date_utils::{from_input_value, to_input_value};
use contracts::domain::a002_customers::aggregate::fields;
use contracts::domain::a002_customers::{CustomerFilterDraft, CustomerStatus};
use leptos::prelude::*;

/// Tag label of a customer filter field
pub fn field_label(field: &str) -> &'static str {
    match field {
        fields::STATUS => "Status",
        fields::NAME => "Name",
        fields::REGISTRATION_DATE => "Registered",
        fields::ORDERS => "Orders",
        fields::TOTAL_SPEND => "Total spend",
        _ => "Filter",
    }
}

/// Text input bound to one string of the draft.
#[component]
fn DraftInput(
    state: CustomersState,
    label: &'static str,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional)]
    placeholder: &'static str,
    read: fn(&CustomerFilterDraft) -> String,
    write: fn(&mut CustomerFilterDraft, String),
) -> impl IntoView {
    let value = state.draft_value(read);
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type=input_type
                class="form__input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    let v = event_target_value(&ev);
                    state.edit_draft(|d| write(d, v));
                }
            />
        </div>
    }
}

#[component]
pub fn CustomerFilterForm(state: CustomersState) -> impl IntoView {
    let status = state.draft_value(|d| d.status.clone());
    let registered_from = state.draft_value(|d| to_input_value(d.registered_from));
    let registered_to = state.draft_value(|d| to_input_value(d.registered_to));

    view! {
        <div class="filter-panel__fields">
            <div class="form__group">
                <label class="form__label">"Status"</label>
                <select
                    class="form__select"
                    prop:value=move || status.get()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.edit_draft(|d| d.status = value);
                    }
                >
                    <option value="">"All statuses"</option>
                    {CustomerStatus::all()
                        .iter()
                        .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                        .collect_view()}
                </select>
            </div>

            <DraftInput
                state=state
                label="Name"
                placeholder="Search by name"
                read=|d| d.customer_name.clone()
                write=|d, v| d.customer_name = v
            />

            <div class="form__group">
                <label class="form__label">"Registered from"</label>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || registered_from.get()
                    on:change=move |ev| {
                        let value = from_input_value(&event_target_value(&ev));
                        state.edit_draft(|d| d.registered_from = value);
                    }
                />
            </div>
            <div class="form__group">
                <label class="form__label">"Registered to"</label>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || registered_to.get()
                    on:change=move |ev| {
                        let value = from_input_value(&event_target_value(&ev));
                        state.edit_draft(|d| d.registered_to = value);
                    }
                />
            </div>

            <DraftInput state=state label="Min orders" input_type="number"
                read=|d| d.min_orders.clone() write=|d, v| d.min_orders = v />
            <DraftInput state=state label="Max orders" input_type="number"
                read=|d| d.max_orders.clone() write=|d, v| d.max_orders = v />
            <DraftInput state=state label="Min spend" input_type="number" placeholder="0.00"
                read=|d| d.min_spend.clone() write=|d, v| d.min_spend = v />
            <DraftInput state=state label="Max spend" input_type="number" placeholder="0.00"
                read=|d| d.max_spend.clone() write=|d, v| d.max_spend = v />
        </div>
    }
}
