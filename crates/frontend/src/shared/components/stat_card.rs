use crate::shared::icons::icon;
use contracts::shared::indicators::{IndicatorMeta, IndicatorStatus, IndicatorValue};
use leptos::prelude::*;

/// Month-over-month moves smaller than this show no arrow
const FLAT_CHANGE: f64 = 0.05;

/// Arrow text and CSS class of a change badge, e.g. `("↑8.3%", "...--up")`.
pub fn change_badge(pct: f64) -> (String, &'static str) {
    let (arrow, cls) = if pct > FLAT_CHANGE {
        ("\u{2191}", "stat-card__change stat-card__change--up")
    } else if pct < -FLAT_CHANGE {
        ("\u{2193}", "stat-card__change stat-card__change--down")
    } else {
        ("", "stat-card__change stat-card__change--flat")
    };
    (format!("{}{:.1}%", arrow, pct.abs()), cls)
}

fn status_class(status: IndicatorStatus) -> &'static str {
    match status {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    }
}

/// One headline card of the overview page: store figure, trend and a hint line.
///
/// `reading` is `None` while the figure is missing from the set; the card then
/// shows a dash.
#[component]
pub fn StatCard(
    meta: IndicatorMeta,
    #[prop(into)]
    reading: Signal<Option<IndicatorValue>>,
) -> impl IntoView {
    let format = meta.format.clone();

    let value_text = move || {
        reading.with(|r| match r.as_ref().and_then(|r| r.value) {
            Some(v) => format.format(v),
            None => "\u{2014}".to_string(),
        })
    };

    let trend = move || {
        reading
            .with(|r| r.as_ref().and_then(|r| r.change_percent))
            .map(|pct| {
                let (text, cls) = change_badge(pct);
                view! { <span class=cls>{text}</span> }
            })
    };

    let hint = move || {
        reading
            .with(|r| r.as_ref().and_then(|r| r.subtitle.clone()))
            .map(|s| view! { <div class="stat-card__subtitle">{s}</div> })
    };

    view! {
        <div class=move || status_class(reading.with(|r| r.as_ref().map(|r| r.status).unwrap_or_default()))>
            <div class="stat-card__icon">{icon(&meta.icon)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{meta.label.clone()}</div>
                <div class="stat-card__value">
                    {value_text}
                    {trend}
                </div>
                {hint}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_badge() {
        assert_eq!(
            change_badge(8.26),
            ("\u{2191}8.3%".to_string(), "stat-card__change stat-card__change--up")
        );
        assert_eq!(change_badge(-0.8).0, "\u{2193}0.8%");
        assert_eq!(change_badge(0.04).1, "stat-card__change stat-card__change--flat");
    }

    #[test]
    fn test_status_class() {
        assert_eq!(status_class(IndicatorStatus::Warning), "stat-card stat-card--warning");
        assert_eq!(status_class(IndicatorStatus::Neutral), "stat-card");
    }
}
