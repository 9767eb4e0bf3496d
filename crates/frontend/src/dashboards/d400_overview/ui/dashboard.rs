use crate::shared::components::indicator_set::IndicatorSetView;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_overview::DashboardMetrics;
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;

/// Horizontal bar with a label and a share in percent (0..=100)
#[component]
fn ShareBar(label: String, value_text: String, share: f64) -> impl IntoView {
    let width = format!("width: {:.1}%;", share.clamp(0.0, 100.0));
    view! {
        <div class="share-bar">
            <div class="share-bar__header">
                <span>{label}</span>
                <span class="share-bar__value">{value_text}</span>
            </div>
            <div class="share-bar__track">
                <div class="share-bar__fill" style=width></div>
            </div>
        </div>
    }
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let metrics = RwSignal::new(DashboardMetrics::sample());
    let headline = Signal::derive(move || metrics.with(|m| m.headline_set()));

    let channels = move || {
        metrics.with(|m| {
            m.channel_shares()
                .into_iter()
                .map(|(label, share)| view! {
                    <ShareBar
                        label=label.to_string()
                        value_text=format!("{:.0}%", share)
                        share=share
                    />
                })
                .collect_view()
        })
    };

    let top_sellers = move || {
        metrics.with(|m| {
            m.top_seller_share()
                .into_iter()
                .map(|(name, sales, share)| view! {
                    <ShareBar
                        label=name
                        value_text=format!("{} sold", ValueFormat::Integer.format(sales as f64))
                        share=share
                    />
                })
                .collect_view()
        })
    };

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
            </div>

            <div class="page__content">
                <IndicatorSetView set=headline />

                <div class="dashboard-panels">
                    <div class="details-section">
                        <h4 class="details-section__title">"Sales by channel"</h4>
                        {channels}
                    </div>
                    <div class="details-section">
                        <h4 class="details-section__title">"Top selling products"</h4>
                        {top_sellers}
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
