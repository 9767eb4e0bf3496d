pub mod state;

use self::state::{create_state, CustomersState};
use super::details::CustomerDetails;
use super::filter::{field_label, CustomerFilterForm};
use super::segments::SegmentBuilder;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::bulk_action_bar::BulkActionBar;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableCellMoney, TableHeaderCheckbox,
};
use crate::shared::components::ui::{Badge as UiBadge, StatusBadge};
use crate::shared::data::actions::ListActionHandler;
use crate::shared::data::stores::customer_store;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_customers::aggregate::fields;
use contracts::domain::a002_customers::Customer;
use contracts::shared::list_view::{BulkAction, BulkActionDispatcher, DispatchOutcome};
use leptos::prelude::*;
use thaw::*;

const CUSTOMER_ACTIONS: [BulkAction; 3] = [
    BulkAction::Export,
    BulkAction::Email,
    BulkAction::UpdateStatus,
];

#[component]
pub fn CustomerList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let config = ctx.config.get_untracked();
    let state: CustomersState = create_state(&config);
    let page_size_options = config.customers.page_size_options.clone();

    let dispatcher = StoredValue::new(BulkActionDispatcher::new(
        ListActionHandler::new("customers", state.list),
        CUSTOMER_ACTIONS.to_vec(),
    ));

    Effect::new(move |_| {
        state.reload(&customer_store());
    });

    let open_detail_modal = move |id: String| {
        let Some(customer) = state.list.with_untracked(|c| c.find(&id).cloned()) else {
            log::warn!("customer {} is not in the list", id);
            return;
        };
        modal_stack.push_with_frame(
            Some("max-width: min(1100px, 95vw); width: min(1100px, 95vw);".to_string()),
            Some("customer-detail-modal".to_string()),
            move |handle| {
                view! {
                    <CustomerDetails
                        customer=customer.clone()
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

    let open_segment_builder = move |_| {
        let customers = state.list.with_untracked(|c| c.records().to_vec());
        modal_stack.push_with_frame(
            Some("max-width: min(720px, 95vw); width: min(720px, 95vw);".to_string()),
            Some("segment-builder-modal".to_string()),
            move |handle| {
                view! {
                    <SegmentBuilder
                        customers=customers.clone()
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

    let run_action = move |action: BulkAction| {
        let ids = state.selected_ids();
        let result = dispatcher.with_value(|d| d.dispatch(action, &ids));
        match result {
            Ok(DispatchOutcome::Dispatched { count }) => {
                log::debug!("{} applied to {} customer(s)", action.label(), count);
                state.error.set(None);
            }
            Ok(DispatchOutcome::Skipped) => {}
            Err(e) => state.error.set(Some(e.to_string())),
        }
    };

    let on_sort = Callback::new(move |field: String| state.sort_by(&field));
    let sort = state.sort_signal();

    let filter_tags = move || {
        state
            .list
            .with(|c| {
                c.filter()
                    .iter()
                    .map(|(field, constraint)| {
                        (field.to_string(), constraint.display_text(field_label(field)))
                    })
                    .collect::<Vec<_>>()
            })
            .into_iter()
            .map(|(field, text)| {
                view! {
                    <FilterTag
                        label=text
                        on_remove=Callback::new(move |_| state.remove_filter(&field))
                    />
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="a002_customers--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Customers"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || state.list.with(|c| c.total_count()).to_string()}
                    </UiBadge>
                </div>
                <div class="page__header-right">
                    <BulkActionBar
                        actions=CUSTOMER_ACTIONS.to_vec()
                        selected_count=state.selected_count()
                        on_action=Callback::new(run_action)
                    />
                    <Button appearance=ButtonAppearance::Primary on_click=open_segment_builder>
                        {icon("users")}
                        " Create Segment"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_open=state.is_panel_open()
                    on_toggle=Callback::new(move |_| state.toggle_panel())
                    active_filters_count=state.active_filters_count()
                    on_apply=Callback::new(move |_| state.apply_filter())
                    on_reset=Callback::new(move |_| state.reset_filter())
                    on_cancel=Callback::new(move |_| state.cancel_filter())
                    pagination_controls=move || {
                        view! {
                            <PaginationControls
                                pagination=state.pagination()
                                total_count=state.filtered_count()
                                on_page_change=Callback::new(move |page| state.go_to_page(page))
                                on_page_size_change=Callback::new(move |size| state.change_page_size(size))
                                page_size_options=page_size_options.clone()
                            />
                        }
                    }
                    filter_content=move || view! { <CustomerFilterForm state=state /> }
                    filter_tags=filter_tags
                />

                {move || {
                    state.error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1000px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    state=state.page_selection()
                                    on_change=Callback::new(move |checked| state.toggle_page(checked))
                                />
                                <SortableHeaderCell label="Customer" sort_field=fields::NAME sort=sort on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="Status" sort_field=fields::STATUS sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Orders" sort_field=fields::ORDERS sort=sort on_sort=on_sort align="right" min_width=80.0 />
                                <SortableHeaderCell label="Total Spend" sort_field=fields::TOTAL_SPEND sort=sort on_sort=on_sort align="right" min_width=120.0 />
                                <SortableHeaderCell label="Last Order" sort_field=fields::LAST_ORDER sort=sort on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Registered" sort_field=fields::REGISTRATION_DATE sort=sort on_sort=on_sort min_width=120.0 />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.visible()
                                key=|customer: &Customer| customer.id.to_string()
                                children=move |customer: Customer| {
                                    let id = customer.id.to_string();
                                    let id_for_click = id.clone();
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox
                                                item_id=id.clone()
                                                checked=state.is_selected(id.clone())
                                                on_change=Callback::new(move |(id, checked): (String, bool)| {
                                                    state.toggle_row(&id, checked)
                                                })
                                            />
                                            <TableCell>
                                                <TableCellLayout>
                                                    <a href="#" class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_detail_modal(id_for_click.clone());
                                                        }
                                                    >
                                                        {customer.name.clone()}
                                                    </a>
                                                    <div class="text-muted">{customer.email.clone()}</div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge code=customer.status.code() label=customer.status.display_name() />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div style="text-align: right; font-variant-numeric: tabular-nums;">{customer.orders}</div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCellMoney value=customer.total_spend bold=true />
                                            <TableCell>
                                                <TableCellLayout>{format_date(customer.last_order)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date(customer.registration_date)}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || state.list.with(|c| c.filtered_count() == 0)>
                        <div class="table__empty">"No customers match the current filters."</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
