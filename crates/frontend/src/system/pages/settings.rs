use crate::layout::global_context::AppGlobalContext;
use crate::shared::data::config::CONFIG_URL;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::shared::config::ListConfig;
use contracts::shared::list_view::SelectionPolicy;
use leptos::prelude::*;

fn describe_sort(list: &ListConfig) -> String {
    match &list.default_sort {
        Some(field) => format!("{} ({:?})", field, list.default_direction),
        None => "store order".to_string(),
    }
}

#[component]
fn ListSettings(title: &'static str, read: fn(&AppGlobalContext) -> ListConfig) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let list = Signal::derive(move || read(&ctx));

    view! {
        <div class="details-section">
            <h4 class="details-section__title">{title}</h4>
            <div class="form__group">
                <span class="form__label">"Page size"</span>
                <span>{move || list.with(|l| l.page_size)}</span>
            </div>
            <div class="form__group">
                <span class="form__label">"Page size options"</span>
                <span>
                    {move || list.with(|l| {
                        l.page_size_options
                            .iter()
                            .map(|n| n.to_string())
                            .collect::<Vec<_>>()
                            .join(", ")
                    })}
                </span>
            </div>
            <div class="form__group">
                <span class="form__label">"Default sort"</span>
                <span>{move || list.with(describe_sort)}</span>
            </div>
        </div>
    }
}

/// Effective dashboard configuration. The selection policy can be changed for
/// the session; list screens pick it up when they mount.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let policy_code = move || match ctx.config.with(|c| c.selection.on_filter_change) {
        SelectionPolicy::Retain => "retain",
        SelectionPolicy::DropHidden => "drop_hidden",
    };

    let set_policy = move |code: String| {
        let policy = match code.as_str() {
            "drop_hidden" => SelectionPolicy::DropHidden,
            _ => SelectionPolicy::Retain,
        };
        log::info!("selection policy set to {:?}", policy);
        ctx.config.update(|c| c.selection.on_filter_change = policy);
    };

    let as_json = move || {
        ctx.config.with(|c| {
            serde_json::to_string_pretty(c).unwrap_or_else(|e| format!("cannot display: {}", e))
        })
    };

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Settings"</h1>
                </div>
            </div>

            <div class="page__content">
                <p class="text-muted">
                    {format!("Loaded from {} when deployed, otherwise built-in defaults.", CONFIG_URL)}
                </p>

                <div class="details-section">
                    <h4 class="details-section__title">"Selection"</h4>
                    <div class="form__group">
                        <label class="form__label">"When a filter hides selected rows"</label>
                        <select
                            class="form__select"
                            prop:value=policy_code
                            on:change=move |ev| set_policy(event_target_value(&ev))
                        >
                            <option value="retain">"Keep them selected"</option>
                            <option value="drop_hidden">"Unselect them"</option>
                        </select>
                    </div>
                </div>

                <div class="details-grid">
                    <ListSettings title="Orders" read=|ctx| ctx.config.with(|c| c.orders.clone()) />
                    <ListSettings title="Customers" read=|ctx| ctx.config.with(|c| c.customers.clone()) />
                </div>

                <div class="details-section">
                    <h4 class="details-section__title">"Effective configuration"</h4>
                    <pre class="code-block">{as_json}</pre>
                </div>
            </div>
        </PageFrame>
    }
}
