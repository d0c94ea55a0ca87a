use leptos::prelude::*;

/// Badge with a colour variant: "primary", "success", "warning", "error",
/// anything else renders neutral
#[component]
pub fn Badge(
    #[prop(optional, into)] variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Active/inactive flag of a list row; a missing flag reads as active
#[component]
pub fn ActiveBadge(is_active: Option<bool>) -> impl IntoView {
    let active = is_active.unwrap_or(true);
    view! {
        <Badge variant=if active { "success" } else { "neutral" }>
            {if active { "Active" } else { "Inactive" }}
        </Badge>
    }
}
