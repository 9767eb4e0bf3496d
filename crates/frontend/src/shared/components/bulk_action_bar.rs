use crate::shared::icons::icon;
use contracts::shared::list_view::BulkAction;
use leptos::prelude::*;
use thaw::*;

/// Buttons for the actions a list supports.
///
/// Disabled while nothing is selected; the selected count is shown next to them.
#[component]
pub fn BulkActionBar(
    actions: Vec<BulkAction>,
    #[prop(into)]
    selected_count: Signal<usize>,
    on_action: Callback<BulkAction>,
) -> impl IntoView {
    let disabled = Signal::derive(move || selected_count.get() == 0);

    let buttons = actions
        .into_iter()
        .map(|action| {
            let appearance = if action == BulkAction::Delete {
                ButtonAppearance::Secondary
            } else {
                ButtonAppearance::Subtle
            };
            view! {
                <Button
                    appearance=appearance
                    size=ButtonSize::Small
                    disabled=disabled
                    on_click=move |_| on_action.run(action)
                >
                    {icon(action.icon())}
                    {format!(" {}", action.label())}
                </Button>
            }
        })
        .collect_view();

    view! {
        <div class="bulk-action-bar" class:bulk-action-bar--active=move || !disabled.get()>
            <span class="bulk-action-bar__count">
                {move || match selected_count.get() {
                    0 => "No rows selected".to_string(),
                    1 => "1 selected".to_string(),
                    n => format!("{} selected", n),
                }}
            </span>
            <Flex gap=FlexGap::Small>
                {buttons}
            </Flex>
        </div>
    }
}
