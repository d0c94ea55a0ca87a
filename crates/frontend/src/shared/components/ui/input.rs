use leptos::prelude::*;

/// Labelled single-line input bound to a form field
#[component]
pub fn Input(
    #[prop(into)] label: String,
    /// Current field value
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    /// "text" (default), "number", "date", "datetime-local", "url", "email"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// Marks the label; the check itself happens on save
    #[prop(optional)]
    required: bool,
    /// Short help line under the input
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || hint.get().map(|h| view! { <div class="form__hint">{h}</div> })}
        </div>
    }
}

/// Parse a number input; blank or garbage reads as zero
pub fn parse_number_input(value: &str) -> i32 {
    value.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_input() {
        assert_eq!(parse_number_input(" 12 "), 12);
        assert_eq!(parse_number_input(""), 0);
        assert_eq!(parse_number_input("1e3"), 0);
        assert_eq!(parse_number_input("-4"), -4);
    }
}
