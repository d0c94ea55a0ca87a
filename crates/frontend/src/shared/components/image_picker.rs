use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

/// File input with a preview of the stored or newly chosen image.
///
/// The picked file is handed to `on_select`; the parent keeps it until
/// submission and swaps the preview for the file's object URL.
#[component]
pub fn ImagePicker(
    #[prop(into)] label: String,
    /// Resolved URL of the stored image or the object URL of a picked file
    #[prop(into)]
    preview: Signal<Option<String>>,
    /// Name of the picked file, if any
    #[prop(into)]
    selected_name: Signal<Option<String>>,
    on_select: Callback<File>,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <div class="image-picker">
                {move || match preview.get() {
                    Some(url) => view! {
                        <img class="image-picker__preview" src=url alt="preview" />
                    }
                    .into_any(),
                    None => view! {
                        <div class="image-picker__empty">"No image"</div>
                    }
                    .into_any(),
                }}
                <div class="image-picker__controls">
                    <input
                        type="file"
                        accept="image/*"
                        on:change=move |ev| {
                            let input: HtmlInputElement = event_target(&ev);
                            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                                on_select.run(file);
                            }
                            // same file can be picked again after a reset
                            input.set_value("");
                        }
                    />
                    <Show when=move || selected_name.get().is_some()>
                        <span class="image-picker__name">
                            {move || selected_name.get().unwrap_or_default()}
                        </span>
                        <button class="button button--secondary" on:click=move |_| on_reset.run(())>
                            "Undo"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
