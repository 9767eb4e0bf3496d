use super::stat_card::StatCard;
use contracts::shared::indicators::*;
use leptos::prelude::*;
use std::collections::HashMap;

/// Card grid of one indicator set.
///
/// Cards follow the order of `meta.indicators`; ids without metadata are skipped.
#[component]
pub fn IndicatorSetView(
    #[prop(into)]
    set: Signal<IndicatorSet>,
) -> impl IntoView {
    let cols_class = move || match set.with(|s| s.meta.columns) {
        2 => "indicator-set__grid indicator-set__grid--cols-2",
        3 => "indicator-set__grid indicator-set__grid--cols-3",
        _ => "indicator-set__grid indicator-set__grid--cols-4",
    };

    let values = Signal::derive(move || {
        set.with(|s| {
            s.values
                .iter()
                .map(|v| (v.id.0.clone(), v.clone()))
                .collect::<HashMap<String, IndicatorValue>>()
        })
    });

    let cards = move || {
        let current = set.get();
        let meta_map: HashMap<String, IndicatorMeta> = current
            .indicators
            .into_iter()
            .map(|m| (m.id.0.clone(), m))
            .collect();

        current
            .meta
            .indicators
            .iter()
            .filter_map(|ind_id| {
                let Some(meta) = meta_map.get(&ind_id.0).cloned() else {
                    log::warn!("indicator '{}' has no metadata", ind_id.0);
                    return None;
                };
                let id = ind_id.0.clone();
                let reading = Signal::derive(move || values.with(|m| m.get(&id).cloned()));

                Some(view! { <StatCard meta=meta reading=reading /> })
            })
            .collect_view()
    };

    view! {
        <div class="indicator-set">
            <div class="indicator-set__title">{move || set.with(|s| s.meta.label.clone())}</div>
            <div class=cols_class>
                {cards}
            </div>
        </div>
    }
}
