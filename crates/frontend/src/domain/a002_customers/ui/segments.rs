use crate::shared::data::services::customer_service;
use crate::shared::icons::icon;
use contracts::domain::a002_customers::{
    Customer, CustomerSegment, CustomerService, SegmentField, SegmentOperator,
};
use leptos::prelude::*;
use thaw::*;

fn value_placeholder(field: SegmentField) -> &'static str {
    match field {
        SegmentField::TotalSpend => "e.g. 1000",
        SegmentField::OrderCount => "e.g. 5",
        SegmentField::LastOrderDate | SegmentField::RegistrationDate => "YYYY-MM-DD",
        SegmentField::Status => "active, inactive or blocked",
    }
}

/// Builds a named customer segment from AND-ed conditions and previews how
/// many of `customers` it matches.
#[component]
pub fn SegmentBuilder(customers: Vec<Customer>, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let segment = RwSignal::new(CustomerSegment::default());
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let customers = StoredValue::new(customers);

    let matching = Signal::derive(move || {
        segment.with(|s| customers.with_value(|all| s.matching_ids(all).len()))
    });

    let save = move |_| {
        let mut current = segment.get_untracked();
        current.name = name.get_untracked().trim().to_string();
        current.description = description.get_untracked();
        match customer_service().save_segment(&current) {
            Ok(()) => on_close.run(()),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let condition_rows = move || {
        segment.with(|s| {
            s.conditions
                .iter()
                .enumerate()
                .map(|(index, condition)| {
                    let field = condition.field;
                    let operator = condition.operator;
                    let value = condition.value.clone();
                    view! {
                        <div class="segment-condition">
                            <select
                                class="form__select"
                                prop:value=field.code()
                                on:change=move |ev| {
                                    if let Some(f) = SegmentField::from_code(&event_target_value(&ev)) {
                                        segment.update(|s| s.update_condition(index, |c| c.field = f));
                                    }
                                }
                            >
                                {SegmentField::all()
                                    .iter()
                                    .map(|f| view! { <option value=f.code()>{f.label()}</option> })
                                    .collect_view()}
                            </select>
                            <select
                                class="form__select"
                                prop:value=operator.code()
                                on:change=move |ev| {
                                    if let Some(op) = SegmentOperator::from_code(&event_target_value(&ev)) {
                                        segment.update(|s| s.update_condition(index, |c| c.operator = op));
                                    }
                                }
                            >
                                {SegmentOperator::all()
                                    .iter()
                                    .map(|o| view! { <option value=o.code()>{o.label()}</option> })
                                    .collect_view()}
                            </select>
                            <input
                                type="text"
                                class="form__input"
                                placeholder=value_placeholder(field)
                                prop:value=value
                                on:change=move |ev| {
                                    let v = event_target_value(&ev);
                                    segment.update(|s| s.update_condition(index, |c| c.value = v));
                                }
                            />
                            <Button
                                appearance=ButtonAppearance::Subtle
                                size=ButtonSize::Small
                                on_click=move |_| segment.update(|s| s.remove_condition(index))
                            >
                                {icon("trash")}
                            </Button>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="details-container">
            <div class="modal-header">
                <h3 class="modal-title">"Create Customer Segment"</h3>
                <div class="modal-header-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || name.with(|n| n.trim().is_empty()))
                        on_click=save
                    >
                        {icon("tag")}
                        " Save Segment"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("x")}
                        " Cancel"
                    </Button>
                </div>
            </div>
            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <label class="form__label">"Segment name"</label>
                    <Input value=name placeholder="e.g. High Value Customers" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Description"</label>
                    <Textarea value=description placeholder="What this segment is for" />
                </div>

                <div class="details-section">
                    <h4 class="details-section__title">"Conditions (all must match)"</h4>
                    {condition_rows}
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| segment.update(|s| s.add_condition())
                    >
                        {icon("plus")}
                        " Add Condition"
                    </Button>
                </div>

                <div class="segment-preview">
                    {move || segment.with(|s| {
                        s.conditions
                            .iter()
                            .map(|c| view! { <span class="filter-tag">{c.display_text()}</span> })
                            .collect_view()
                    })}
                    <div class="segment-preview__count">
                        {move || match matching.get() {
                            1 => "1 customer matches".to_string(),
                            n => format!("{} customers match", n),
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
