use crate::shared::data::services::customer_service;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::domain::a002_customers::detail::{CustomerDetail, CustomerNote};
use contracts::domain::a002_customers::CustomerService;
use leptos::prelude::*;
use thaw::*;

/// Author of notes written from the dashboard
const CURRENT_USER: &str = "Admin User";

/// Staff notes of a customer, newest first, with an "add note" box.
#[component]
pub fn CustomerNotes(detail: RwSignal<CustomerDetail>) -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let add_note = move |_| {
        let Some(note) = CustomerNote::new(&draft.get_untracked(), CURRENT_USER, Utc::now()) else {
            return;
        };
        let id = detail.with_untracked(|d| d.id.clone());
        match customer_service().add_note(&id, &note) {
            Ok(()) => {
                detail.update(|d| d.notes.insert(0, note));
                draft.set(String::new());
                error.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="details-section customer-notes">
            <h4 class="details-section__title">
                {icon("message-square")}
                " Notes"
            </h4>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <Textarea value=draft placeholder="Add a note about this customer..." />
            <div class="customer-notes__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    size=ButtonSize::Small
                    disabled=Signal::derive(move || draft.with(|d| d.trim().is_empty()))
                    on_click=add_note
                >
                    {icon("plus")}
                    " Add Note"
                </Button>
            </div>
            <ul class="customer-notes__list">
                {move || detail.with(|d| {
                    d.notes
                        .iter()
                        .map(|note| view! {
                            <li class="customer-notes__item">
                                <span class="customer-notes__avatar">{note.author_initials()}</span>
                                <div>
                                    <div class="customer-notes__content">{note.content.clone()}</div>
                                    <div class="text-muted">
                                        {format!("{} \u{00b7} {}", note.created_by, format_datetime(note.created_at))}
                                    </div>
                                </div>
                            </li>
                        })
                        .collect_view()
                })}
            </ul>
        </div>
    }
}
