use super::list::state::OrdersState;
use crate::shared::date_utils::{from_input_value, to_input_value};
use contracts::domain::a001_orders::aggregate::fields;
use contracts::domain::a001_orders::OrderStatus;
use leptos::prelude::*;

/// Tag label of an order filter field
pub fn field_label(field: &str) -> &'static str {
    match field {
        fields::STATUS => "Status",
        fields::CUSTOMER => "Customer",
        fields::DATE => "Date",
        fields::TOTAL => "Amount",
        _ => "Filter",
    }
}

/// Inputs of the orders filter panel. Every edit goes to the draft only.
#[component]
pub fn OrderFilterForm(state: OrdersState) -> impl IntoView {
    let status = state.draft_value(|d| d.status.clone());
    let customer = state.draft_value(|d| d.customer_name.clone());
    let date_from = state.draft_value(|d| to_input_value(d.date_from));
    let date_to = state.draft_value(|d| to_input_value(d.date_to));
    let min_amount = state.draft_value(|d| d.min_amount.clone());
    let max_amount = state.draft_value(|d| d.max_amount.clone());

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
                    {OrderStatus::all()
                        .iter()
                        .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="form__group" style="min-width: 220px;">
                <label class="form__label">"Customer"</label>
                <input
                    type="text"
                    class="form__input"
                    placeholder="Search by customer name"
                    prop:value=move || customer.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.edit_draft(|d| d.customer_name = value);
                    }
                />
            </div>

            <div class="form__group">
                <label class="form__label">"Date from"</label>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || date_from.get()
                    on:change=move |ev| {
                        let value = from_input_value(&event_target_value(&ev));
                        state.edit_draft(|d| d.date_from = value);
                    }
                />
            </div>

            <div class="form__group">
                <label class="form__label">"Date to"</label>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || date_to.get()
                    on:change=move |ev| {
                        let value = from_input_value(&event_target_value(&ev));
                        state.edit_draft(|d| d.date_to = value);
                    }
                />
            </div>

            <div class="form__group" style="width: 120px;">
                <label class="form__label">"Min amount"</label>
                <input
                    type="number"
                    class="form__input"
                    placeholder="0.00"
                    prop:value=move || min_amount.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.edit_draft(|d| d.min_amount = value);
                    }
                />
            </div>

            <div class="form__group" style="width: 120px;">
                <label class="form__label">"Max amount"</label>
                <input
                    type="number"
                    class="form__input"
                    placeholder="0.00"
                    prop:value=move || max_amount.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.edit_draft(|d| d.max_amount = value);
                    }
                />
            </div>
        </div>
    }
}
