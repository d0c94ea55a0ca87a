use crate::shared::components::list_header::{EmptyRow, ListHeader, RowActions};
use crate::shared::components::ui::ActiveBadge;
use crate::shared::list_vm::ListViewModel;
use contracts::domain::a004_value::Value;
use leptos::prelude::*;

#[component]
pub fn ValueList() -> impl IntoView {
    let vm = ListViewModel::<Value>::new();
    vm.refresh();

    view! {
        <div class="page">
            <ListHeader vm=vm />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"#"</th>
                            <th class="table__header-cell">"Icon"</th>
                            <th class="table__header-cell">"Title"</th>
                            <th class="table__header-cell">"Description"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = vm.visible();
                            if rows.is_empty() {
                                return view! { <EmptyRow colspan=6 loading=vm.loading /> }.into_any();
                            }
                            rows.into_iter().map(|value| {
                                let to_open = value.clone();
                                let to_delete = value.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| vm.open(&to_open)>
                                        <td class="table__cell">{value.order_number}</td>
                                        <td class="table__cell table__cell--muted">{value.icon}</td>
                                        <td class="table__cell">{value.title}</td>
                                        <td class="table__cell">{value.description}</td>
                                        <td class="table__cell"><ActiveBadge is_active=value.is_active /></td>
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
