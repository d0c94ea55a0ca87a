use contracts::shared::form_model::FormModel;
use leptos::prelude::*;

use super::page_header::PageHeader;
use crate::shared::form_vm::FormViewModel;
use crate::shared::icons::icon;

/// Page chrome of a create/edit screen: title, validation/server error,
/// the form body, and save/cancel actions bound to the view model.
#[component]
pub fn DetailsFrame<F: FormModel>(
    vm: FormViewModel<F>,
    /// Single-record screen not reached from a list: no "Cancel",
    /// title without "New"/"Edit"
    #[prop(optional)]
    standalone: bool,
    /// Replaces the default save-then-back-to-list
    #[prop(optional)]
    on_save: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let kind = vm.kind();
    let title = Signal::derive(move || {
        if standalone {
            kind.element_name().to_string()
        } else if vm.is_edit() {
            format!("Edit {}", kind.element_name().to_lowercase())
        } else {
            format!("New {}", kind.element_name().to_lowercase())
        }
    });

    view! {
        <div class="page details-page">
            <PageHeader title=title>
                <button
                    class="button button--primary"
                    on:click=move |_| match on_save {
                        Some(save) => save.run(()),
                        None => vm.save(),
                    }
                    disabled=move || vm.saving.get() || vm.loading.get()
                >
                    {icon("save")}
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </button>
                {(!standalone).then(|| view! {
                    <button class="button button--secondary" on:click=move |_| vm.cancel()>
                        {icon("cancel")}
                        "Cancel"
                    </button>
                })}
            </PageHeader>

            {move || vm.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show when=move || vm.loading.get()>
                <div class="details-page__loading">"Loading..."</div>
            </Show>

            <div class="details-form">
                {children()}
            </div>
        </div>
    }
}
