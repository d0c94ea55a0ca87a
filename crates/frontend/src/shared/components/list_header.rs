use contracts::domain::common::Resource;
use leptos::prelude::*;

use super::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_vm::ListViewModel;

/// Title, standard actions (new, refresh, bulk import where offered),
/// local search box and the fetch error of a list screen.
#[component]
pub fn ListHeader<R: Resource>(
    vm: ListViewModel<R>,
    /// Hide "New" for read-only collections
    #[prop(optional)]
    read_only: bool,
    /// Extra filter controls placed next to the search box
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let kind = vm.kind();
    let count = move || vm.items.with(|items| items.len());

    view! {
        <PageHeader
            title=kind.list_name().to_string()
            subtitle=Signal::derive(move || Some(format!("{} total", count())))
        >
            {(!read_only).then(|| view! {
                <button class="button button--primary" on:click=move |_| vm.create_new()>
                    {icon("plus")}
                    {format!("New {}", kind.element_name().to_lowercase())}
                </button>
            })}
            {kind.supports_bulk_import().then(|| view! {
                <button class="button button--secondary" on:click=move |_| vm.open_bulk_import()>
                    {icon("upload")}
                    "Bulk import"
                </button>
            })}
            <button
                class="button button--secondary"
                on:click=move |_| vm.refresh()
                disabled=move || vm.loading.get()
            >
                {icon("refresh")}
                {move || if vm.loading.get() { "Loading..." } else { "Refresh" }}
            </button>
        </PageHeader>

        <div class="filter-panel">
            <input
                class="form__input filter-panel__search"
                type="search"
                placeholder="Search..."
                on:input=move |ev| vm.set_search(event_target_value(&ev))
            />
            {children.map(|c| c())}
        </div>

        {move || vm.error.get().map(|e| view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{e}</span>
            </div>
        })}
    }
}

/// Row action buttons: delete always, extra actions before it
#[component]
pub fn RowActions(on_delete: Callback<()>, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--actions" on:click=|ev| ev.stop_propagation()>
            {children.map(|c| c())}
            <button class="button button--ghost button--danger" title="Delete" on:click=move |_| on_delete.run(())>
                {icon("delete")}
            </button>
        </td>
    }
}

/// Placeholder row for an empty or loading table
#[component]
pub fn EmptyRow(colspan: u32, #[prop(into)] loading: Signal<bool>) -> impl IntoView {
    view! {
        <tr>
            <td class="table__cell table__cell--empty" colspan=colspan>
                {move || if loading.get() { "Loading..." } else { "Nothing here yet" }}
            </td>
        </tr>
    }
}

/// Small image cell; "-" when the record has no image
#[component]
pub fn Thumbnail(url: Option<String>) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--thumb">
            {match url {
                Some(src) => view! { <img class="table__thumb" src=src alt="" /> }.into_any(),
                None => view! { <span>"-"</span> }.into_any(),
            }}
        </td>
    }
}
