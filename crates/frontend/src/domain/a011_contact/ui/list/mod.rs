use crate::shared::components::list_header::{EmptyRow, ListHeader, RowActions};
use crate::shared::list_vm::ListViewModel;
use contracts::domain::a011_contact::{Contact, ContactStatus};
use contracts::domain::common::Resource;
use leptos::prelude::*;

#[component]
pub fn ContactList() -> impl IntoView {
    let vm = ListViewModel::<Contact>::new();
    vm.refresh();

    let unread = move || vm.items.with(|items| items.iter().filter(|c| c.is_unread()).count());

    view! {
        <div class="page">
            <ListHeader vm=vm read_only=true>
                <select
                    class="form__select filter-panel__select"
                    on:change=move |ev| vm.set_status(event_target_value(&ev))
                >
                    <option value="">"All messages"</option>
                    {ContactStatus::ALL.into_iter().map(|s| view! {
                        <option value=s.as_str()>{s.label()}</option>
                    }).collect_view()}
                </select>
                <span class="filter-panel__note">{move || format!("{} unread", unread())}</span>
            </ListHeader>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Received"</th>
                            <th class="table__header-cell">"From"</th>
                            <th class="table__header-cell">"Subject"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = vm.visible();
                            if rows.is_empty() {
                                return view! { <EmptyRow colspan=5 loading=vm.loading /> }.into_any();
                            }
                            rows.into_iter().map(|contact| {
                                let status = contact.status();
                                let received = contact.meta.created_display();
                                let is_unread = contact.is_unread();
                                let id = StoredValue::new(contact.id().cloned());
                                let to_open = contact.clone();
                                let to_delete = contact.clone();
                                let set_status = move |value: String| {
                                    let Some(id) = id.get_value() else {
                                        return;
                                    };
                                    let next = ContactStatus::parse(&value);
                                    let resource = vm.api().resource::<Contact>();
                                    vm.run(
                                        async move { resource.update_status(&id, next.as_str()).await },
                                        format!("Marked as {}", next.label().to_lowercase()),
                                    );
                                };
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--unread=is_unread
                                        on:click=move |_| vm.open(&to_open)
                                    >
                                        <td class="table__cell table__cell--muted">{received}</td>
                                        <td class="table__cell">
                                            <div>{contact.name}</div>
                                            <div class="table__cell--muted">{contact.email}</div>
                                        </td>
                                        <td class="table__cell">{contact.subject}</td>
                                        <td class="table__cell" on:click=|ev| ev.stop_propagation()>
                                            <select
                                                class="form__select"
                                                on:change=move |ev| set_status(event_target_value(&ev))
                                            >
                                                {ContactStatus::ALL.into_iter().map(|s| view! {
                                                    <option value=s.as_str() selected=s == status>{s.label()}</option>
                                                }).collect_view()}
                                            </select>
                                        </td>
                                        <RowActions on_delete=Callback::new(move |_: ()| vm.delete(&to_delete)) />
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
