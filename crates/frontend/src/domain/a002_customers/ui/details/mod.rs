use super::message::SendMessageDialog;
use super::notes::CustomerNotes;
use crate::shared::components::ui::{Badge as UiBadge, StatusBadge};
use crate::shared::date_utils::format_date;
use crate::shared::export::download_text;
use crate::shared::icons::icon;
use crate::shared::list_utils::format_money;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a001_orders::detail::status_badge_class;
use contracts::domain::a002_customers::detail::CustomerDetail;
use contracts::domain::a002_customers::fixtures::customer_detail_for;
use contracts::domain::a002_customers::Customer;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CustomerTab {
    Profile,
    Orders,
    Analytics,
    Communications,
}

impl CustomerTab {
    const ALL: [CustomerTab; 4] = [
        CustomerTab::Profile,
        CustomerTab::Orders,
        CustomerTab::Analytics,
        CustomerTab::Communications,
    ];

    fn label(self) -> &'static str {
        match self {
            CustomerTab::Profile => "Profile",
            CustomerTab::Orders => "Orders",
            CustomerTab::Analytics => "Analytics",
            CustomerTab::Communications => "Communications",
        }
    }
}

fn field_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="form__group">
            <span class="form__label">{label}</span>
            <span>{value}</span>
        </div>
    }
}

fn yes_no(flag: bool) -> String {
    let text = if flag { "Subscribed" } else { "Not subscribed" };
    text.to_string()
}

/// Customer profile with notes and messaging.
#[component]
pub fn CustomerDetails(customer: Customer, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let detail = RwSignal::new(customer_detail_for(&customer));
    let active_tab = RwSignal::new(CustomerTab::Profile);
    let error = RwSignal::new(None::<String>);

    let export = move |_| {
        let result = detail.with_untracked(|d| {
            let json = d.to_export_json().map_err(|e| e.to_string())?;
            download_text(&json, &d.export_file_name(), "application/json")
        });
        if let Err(e) = result {
            log::error!("customer export failed: {}", e);
            error.set(Some(e));
        }
    };

    let open_message = move |_| {
        let (id, info) = detail.with_untracked(|d| (d.id.clone(), d.basic_info.clone()));
        modal_stack.push_with_frame(
            Some("max-width: min(560px, 95vw); width: min(560px, 95vw);".to_string()),
            None,
            move |handle| {
                view! {
                    <SendMessageDialog
                        customer_id=id.clone()
                        info=info.clone()
                        on_close=Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        })
                    />
                }
                .into_any()
            },
        );
    };

    let tab_button = move |tab: CustomerTab| {
        view! {
            <button
                type="button"
                class=move || {
                    if active_tab.get() == tab {
                        "detail-tabs__item detail-tabs__item--active"
                    } else {
                        "detail-tabs__item"
                    }
                }
                on:click=move |_| active_tab.set(tab)
            >
                {tab.label()}
            </button>
        }
    };

    let status = customer.status;

    view! {
        <div class="details-container customer-details">
            <div class="modal-header">
                <h3 class="modal-title">
                    {customer.name.clone()}
                    " "
                    <StatusBadge code=status.code() label=status.display_name() />
                </h3>
                <div class="modal-header-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=open_message>
                        {icon("mail")}
                        " Send Message"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=export>
                        {icon("download")}
                        " Export"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="customer-details__layout">
                    <div class="customer-details__main">
                        <div class="detail-tabs">
                            {CustomerTab::ALL.into_iter().map(tab_button).collect_view()}
                        </div>
                        <div class="detail-tabs__content">
                            {move || {
                                let d = detail.get();
                                match active_tab.get() {
                                    CustomerTab::Profile => profile_tab(&d).into_any(),
                                    CustomerTab::Orders => orders_tab(&d).into_any(),
                                    CustomerTab::Analytics => analytics_tab(&d).into_any(),
                                    CustomerTab::Communications => communications_tab(&d).into_any(),
                                }
                            }}
                        </div>
                    </div>
                    <aside class="customer-details__side">
                        <CustomerNotes detail=detail />
                    </aside>
                </div>
            </div>
        </div>
    }
}

fn profile_tab(d: &CustomerDetail) -> impl IntoView {
    let info = d.basic_info.clone();
    let shipping = d
        .addresses
        .shipping
        .iter()
        .map(|a| view! { <li>{a.clone()}</li> })
        .collect_view();
    let segments = d
        .marketing
        .segments
        .iter()
        .cloned()
        .map(|s| view! { <UiBadge variant="info".to_string()>{s.clone()}</UiBadge> })
        .collect_view();

    view! {
        <div class="details-grid">
            <div class="details-section">
                <h4 class="details-section__title">"Basic information"</h4>
                {field_row("Email", info.email)}
                {field_row("Phone", info.phone)}
                {field_row("Date of birth", info.date_of_birth.map(format_date).unwrap_or_default())}
                {field_row("Gender", info.gender.unwrap_or_default())}
                {field_row("Customer since", format_date(info.registration_date))}
            </div>
            <div class="details-section">
                <h4 class="details-section__title">"Addresses"</h4>
                {field_row("Billing", d.addresses.billing.clone())}
                <div class="form__group">
                    <span class="form__label">"Shipping"</span>
                    <ul>{shipping}</ul>
                </div>
            </div>
            <div class="details-section">
                <h4 class="details-section__title">"Marketing"</h4>
                {field_row("Email", yes_no(d.marketing.email_subscribed))}
                {field_row("SMS", yes_no(d.marketing.sms_subscribed))}
                {field_row(
                    "Last campaign",
                    d.marketing.last_campaign.clone().unwrap_or_else(|| "\u{2014}".to_string()),
                )}
                <div class="form__group">
                    <span class="form__label">"Segments"</span>
                    <div>{segments}</div>
                </div>
            </div>
        </div>
    }
}

fn orders_tab(d: &CustomerDetail) -> impl IntoView {
    let rows = d
        .order_history
        .iter()
        .cloned()
        .map(|o| {
            let status = o.status.clone();
            view! {
                <TableRow>
                    <TableCell><TableCellLayout>{o.id.clone()}</TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{format_date(o.date)}</TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{o.items}</TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{format_money(o.total)}</TableCellLayout></TableCell>
                    <TableCell>
                        <TableCellLayout>
                            <span class=format!("badge {}", status_badge_class(&status))>{status.clone()}</span>
                        </TableCellLayout>
                    </TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell resizable=false>"Order"</TableHeaderCell>
                    <TableHeaderCell resizable=false>"Date"</TableHeaderCell>
                    <TableHeaderCell resizable=false>"Items"</TableHeaderCell>
                    <TableHeaderCell resizable=false>"Total"</TableHeaderCell>
                    <TableHeaderCell resizable=false>"Status"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>{rows}</TableBody>
        </Table>
    }
}

fn analytics_tab(d: &CustomerDetail) -> impl IntoView {
    let a = &d.analytics;
    let categories = a
        .favorite_categories
        .iter()
        .cloned()
        .map(|c| view! { <UiBadge variant="neutral".to_string()>{c.clone()}</UiBadge> })
        .collect_view();

    view! {
        <div class="details-grid">
            <div class="details-section">
                <h4 class="details-section__title">"Spending"</h4>
                {field_row("Total spend", format_money(a.total_spend))}
                {field_row("Average order value", format_money(a.average_order_value))}
                {field_row("Orders", a.orders_count.to_string())}
                {field_row("Last order", format_date(a.last_order_date))}
            </div>
            <div class="details-section">
                <h4 class="details-section__title">"Returns"</h4>
                {field_row("Returned orders", a.returns_count.to_string())}
                {field_row("Return rate", format!("{:.1}%", a.return_rate_percent()))}
            </div>
            <div class="details-section">
                <h4 class="details-section__title">"Favourite categories"</h4>
                <div>{categories}</div>
            </div>
        </div>
    }
}

fn communications_tab(d: &CustomerDetail) -> impl IntoView {
    let items = d
        .communications
        .iter()
        .map(|c| {
            let kind_icon = match c.kind.as_str() {
                "email" => "mail",
                "sms" => "message-square",
                _ => "help",
            };
            view! {
                <li class="timeline__item">
                    <div class="timeline__action">
                        {icon(kind_icon)}
                        {format!(" {}", c.subject)}
                    </div>
                    <div>{c.content.clone()}</div>
                    <div class="timeline__meta">{format!("{} \u{00b7} {}", format_date(c.date), c.kind)}</div>
                </li>
            }
        })
        .collect_view();

    view! { <ul class="timeline">{items}</ul> }
}
