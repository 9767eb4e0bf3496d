use crate::shared::data::services::customer_service;
use crate::shared::icons::icon;
use contracts::domain::a002_customers::detail::{BasicInfo, CustomerMessage, MessageChannel};
use contracts::domain::a002_customers::{CustomerId, CustomerService};
use leptos::prelude::*;
use thaw::*;

/// Compose an email or SMS to one customer.
#[component]
pub fn SendMessageDialog(
    customer_id: CustomerId,
    info: BasicInfo,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let channel = RwSignal::new(MessageChannel::Email);
    let subject = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let info = StoredValue::new(info);
    let customer_id = StoredValue::new(customer_id);

    let recipient = move || {
        let message = CustomerMessage {
            channel: channel.get(),
            ..Default::default()
        };
        info.with_value(|i| message.recipient(i).to_string())
    };

    let send = move |_| {
        let message = CustomerMessage {
            channel: channel.get_untracked(),
            subject: subject.get_untracked(),
            content: content.get_untracked(),
        };
        let result = customer_id.with_value(|id| customer_service().send_message(id, &message));
        match result {
            Ok(()) => on_close.run(()),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="details-container">
            <div class="modal-header">
                <h3 class="modal-title">
                    {move || format!("Send message to {}", info.with_value(|i| i.name.clone()))}
                </h3>
                <div class="modal-header-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || content.with(|c| c.trim().is_empty()))
                        on_click=send
                    >
                        {icon("mail")}
                        " Send"
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
                    <label class="form__label">"Channel"</label>
                    <select
                        class="form__select"
                        prop:value=move || channel.get().code()
                        on:change=move |ev| channel.set(MessageChannel::from_code(&event_target_value(&ev)))
                    >
                        <option value="email">"Email"</option>
                        <option value="sms">"SMS"</option>
                    </select>
                </div>

                <div class="form__group">
                    <label class="form__label">"To"</label>
                    <span>{recipient}</span>
                </div>

                <Show when=move || channel.get() == MessageChannel::Email>
                    <div class="form__group">
                        <label class="form__label">"Subject"</label>
                        <Input value=subject placeholder="Subject" />
                    </div>
                </Show>

                <div class="form__group">
                    <label class="form__label">"Message"</label>
                    <Textarea value=content placeholder="Type your message..." />
                </div>
            </div>
        </div>
    }
}
