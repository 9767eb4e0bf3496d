use leptos::prelude::*;

/// Badge with a colour variant.
#[component]
pub fn Badge(
    /// "primary", "success", "warning", "error", "info", "accent"; anything else is neutral
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        "info" => "badge--info",
        "accent" => "badge--accent",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {} {}", variant_class(), class.get().unwrap_or_default())>
            {children()}
        </span>
    }
}

/// Badge for a status code of a list row.
#[component]
pub fn StatusBadge(
    /// Status code ("paid", "blocked", ...)
    #[prop(into)]
    code: String,
    #[prop(into)]
    label: String,
) -> impl IntoView {
    let variant = match code.as_str() {
        "paid" | "active" => "success",
        "cancelled" | "blocked" => "error",
        "refunded" => "accent",
        _ => "neutral",
    };

    view! { <Badge variant=variant.to_string()>{label}</Badge> }
}
