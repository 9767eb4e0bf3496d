use crate::shared::components::ui::Badge as UiBadge;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::export::download_text;
use crate::shared::icons::icon;
use crate::shared::list_utils::format_money;
use crate::shared::modal_stack::ModalStackService;
use chrono::Utc;
use contracts::domain::a001_orders::detail::{status_badge_class, OrderDetail};
use contracts::domain::a001_orders::fixtures::order_detail_for;
use contracts::domain::a001_orders::invoice::{invoice_file_name, render_invoice};
use contracts::domain::a001_orders::{Order, OrderId};
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderTab {
    Items,
    Timeline,
    Payment,
    Shipping,
}

impl OrderTab {
    const ALL: [OrderTab; 4] = [
        OrderTab::Items,
        OrderTab::Timeline,
        OrderTab::Payment,
        OrderTab::Shipping,
    ];

    fn label(self) -> &'static str {
        match self {
            OrderTab::Items => "Items",
            OrderTab::Timeline => "Timeline",
            OrderTab::Payment => "Payment",
            OrderTab::Shipping => "Shipping",
        }
    }
}

fn download_invoice(detail: &OrderDetail, error: RwSignal<Option<String>>) {
    if let Err(e) = download_text(
        &render_invoice(detail),
        &invoice_file_name(detail),
        "text/plain;charset=utf-8",
    ) {
        log::error!("invoice download failed: {}", e);
        error.set(Some(e));
    }
}

/// Read-only view of one order.
#[component]
pub fn OrderDetails(order: Order, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let detail = RwSignal::new(order_detail_for(&order));
    let active_tab = RwSignal::new(OrderTab::Items);
    let error = RwSignal::new(None::<String>);

    let open_invoice = move |_| {
        let current = detail.get_untracked();
        modal_stack.push_with_frame(
            Some("max-width: min(760px, 95vw); width: min(760px, 95vw);".to_string()),
            Some("invoice-preview-modal".to_string()),
            move |handle| {
                view! {
                    <InvoicePreview
                        detail=current.clone()
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

    let duplicate = move |_| {
        let new_id = OrderId::new(format!("ORD-{}", Utc::now().timestamp_millis()));
        detail.update(|d| *d = d.duplicate(new_id, Utc::now()));
        active_tab.set(OrderTab::Items);
    };

    let tab_button = move |tab: OrderTab| {
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

    view! {
        <div class="details-container order-details">
            <div class="modal-header">
                <h3 class="modal-title">
                    {move || format!("Order {}", detail.with(|d| d.id.to_string()))}
                    " "
                    {move || {
                        let status = detail.with(|d| d.status.clone());
                        view! { <span class=format!("badge {}", status_badge_class(&status))>{status.clone()}</span> }
                    }}
                </h3>
                <div class="modal-header-actions">
                    <Button appearance=ButtonAppearance::Subtle on_click=open_invoice>
                        {icon("printer")}
                        " Invoice"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| detail.with_untracked(|d| download_invoice(d, error))
                    >
                        {icon("download")}
                        " Download"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=duplicate>
                        {icon("copy")}
                        " Duplicate"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="details-grid">
                    <div class="details-section">
                        <h4 class="details-section__title">"Customer"</h4>
                        {move || detail.with(|d| {
                            let c = d.customer.clone();
                            view! {
                                <div class="form__group">
                                    <span class="form__label">"Name"</span>
                                    <span>{c.name}</span>
                                </div>
                                <div class="form__group">
                                    <span class="form__label">"Email"</span>
                                    <span>{c.email}</span>
                                </div>
                                <div class="form__group">
                                    <span class="form__label">"Phone"</span>
                                    <span>{c.phone}</span>
                                </div>
                            }
                        })}
                    </div>
                    <div class="details-section">
                        <h4 class="details-section__title">"Addresses"</h4>
                        {move || detail.with(|d| {
                            let c = d.customer.clone();
                            view! {
                                <div class="form__group">
                                    <span class="form__label">"Shipping"</span>
                                    <span>{c.shipping_address}</span>
                                </div>
                                <div class="form__group">
                                    <span class="form__label">"Billing"</span>
                                    <span>{c.billing_address}</span>
                                </div>
                            }
                        })}
                    </div>
                    <div class="details-section">
                        <h4 class="details-section__title">"Summary"</h4>
                        {move || detail.with(|d| view! {
                            <div class="form__group">
                                <span class="form__label">"Placed"</span>
                                <span>{format_datetime(d.order_date)}</span>
                            </div>
                            <div class="form__group">
                                <span class="form__label">"Items"</span>
                                <span>{d.item_count()}</span>
                            </div>
                            <div class="form__group">
                                <span class="form__label">"Total"</span>
                                <strong>{format_money(d.total)}</strong>
                            </div>
                        })}
                    </div>
                </div>

                <div class="detail-tabs">
                    {OrderTab::ALL.into_iter().map(tab_button).collect_view()}
                </div>

                <div class="detail-tabs__content">
                    {move || match active_tab.get() {
                        OrderTab::Items => view! { <ItemsTab detail=detail /> }.into_any(),
                        OrderTab::Timeline => view! { <TimelineTab detail=detail /> }.into_any(),
                        OrderTab::Payment => view! { <PaymentTab detail=detail /> }.into_any(),
                        OrderTab::Shipping => view! { <ShippingTab detail=detail /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ItemsTab(detail: RwSignal<OrderDetail>) -> impl IntoView {
    let d = detail.get_untracked();
    let rows = d
        .items
        .iter()
        .cloned()
        .map(|item| {
            let variant = [item.size.clone(), item.color.clone()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" / ");
            let name = item.name.clone();
            let sku = item.sku.clone();
            let quantity = item.quantity;
            let price = format_money(item.price);
            let line_total = format_money(item.line_total());
            view! {
                <TableRow>
                    <TableCell>
                        <TableCellLayout>
                            <div>{name}</div>
                            <div class="text-muted">{variant}</div>
                        </TableCellLayout>
                    </TableCell>
                    <TableCell><TableCellLayout>{sku}</TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{quantity}</TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{price}</TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{line_total}</TableCellLayout></TableCell>
                </TableRow>
            }
        })
        .collect_view();

    let totals = [
        ("Subtotal", d.subtotal),
        ("Shipping", d.shipping.cost),
        ("Tax", d.tax),
        ("Total", d.total),
    ];

    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell resizable=false min_width=220.0>"Item"</TableHeaderCell>
                    <TableHeaderCell resizable=false>"SKU"</TableHeaderCell>
                    <TableHeaderCell resizable=false>"Qty"</TableHeaderCell>
                    <TableHeaderCell resizable=false>"Price"</TableHeaderCell>
                    <TableHeaderCell resizable=false>"Total"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>{rows}</TableBody>
        </Table>
        <div class="order-totals">
            {totals
                .into_iter()
                .map(|(label, value)| view! {
                    <div class="order-totals__row">
                        <span>{label}</span>
                        <span>{format_money(value)}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TimelineTab(detail: RwSignal<OrderDetail>) -> impl IntoView {
    view! {
        <ul class="timeline">
            {move || detail.with(|d| {
                d.timeline
                    .iter()
                    .map(|event| view! {
                        <li class="timeline__item">
                            <div class="timeline__action">{event.action.clone()}</div>
                            <div class="timeline__meta">
                                {format!("{} by {}", format_datetime(event.date), event.user)}
                            </div>
                        </li>
                    })
                    .collect_view()
            })}
        </ul>
    }
}

#[component]
fn PaymentTab(detail: RwSignal<OrderDetail>) -> impl IntoView {
    let payment = detail.with_untracked(|d| d.payment.clone());
    let badge = match payment.status.as_str() {
        "Paid" => "success",
        "Cancelled" | "Failed" => "error",
        "Refunded" => "accent",
        _ => "warning",
    };
    view! {
        <div class="details-section">
            <div class="form__group">
                <span class="form__label">"Method"</span>
                <span>{payment.method}</span>
            </div>
            <div class="form__group">
                <span class="form__label">"Transaction"</span>
                <code>{payment.transaction_id}</code>
            </div>
            <div class="form__group">
                <span class="form__label">"Status"</span>
                <UiBadge variant=badge.to_string()>{payment.status}</UiBadge>
            </div>
        </div>
    }
}

#[component]
fn ShippingTab(detail: RwSignal<OrderDetail>) -> impl IntoView {
    let shipping = detail.with_untracked(|d| d.shipping.clone());
    view! {
        <div class="details-section">
            <div class="form__group">
                <span class="form__label">"Method"</span>
                <span>{shipping.method}</span>
            </div>
            <div class="form__group">
                <span class="form__label">"Tracking number"</span>
                <span>{shipping.tracking_number.unwrap_or_else(|| "Not yet shipped".to_string())}</span>
            </div>
            <div class="form__group">
                <span class="form__label">"Estimated delivery"</span>
                <span>{shipping.estimated_delivery.map(format_date).unwrap_or_else(|| "\u{2014}".to_string())}</span>
            </div>
            <div class="form__group">
                <span class="form__label">"Cost"</span>
                <span>{format_money(shipping.cost)}</span>
            </div>
        </div>
    }
}

/// Invoice text with print and download.
#[component]
fn InvoicePreview(detail: OrderDetail, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let text = render_invoice(&detail);
    let error = RwSignal::new(None::<String>);
    let detail = StoredValue::new(detail);

    let print = move |_| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.print() {
                log::error!("print failed: {:?}", e);
            }
        }
    };

    view! {
        <div class="details-container">
            <div class="modal-header">
                <h3 class="modal-title">"Invoice"</h3>
                <div class="modal-header-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=print>
                        {icon("printer")}
                        " Print"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| detail.with_value(|d| download_invoice(d, error))
                    >
                        {icon("file-text")}
                        " Download"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>
            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <pre class="invoice-preview">{text}</pre>
            </div>
        </div>
    }
}
