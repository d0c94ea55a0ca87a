use crate::shared::components::list_header::{EmptyRow, ListHeader, RowActions};
use crate::shared::components::ui::{ActiveBadge, Badge};
use crate::shared::list_vm::ListViewModel;
use contracts::domain::a003_service::Service;
use leptos::prelude::*;

#[component]
pub fn ServiceList() -> impl IntoView {
    let vm = ListViewModel::<Service>::new();
    vm.refresh();

    view! {
        <div class="page">
            <ListHeader vm=vm />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"#"</th>
                            <th class="table__header-cell">"Title"</th>
                            <th class="table__header-cell">"Slug"</th>
                            <th class="table__header-cell">"Short description"</th>
                            <th class="table__header-cell">"Features"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = vm.visible();
                            if rows.is_empty() {
                                return view! { <EmptyRow colspan=7 loading=vm.loading /> }.into_any();
                            }
                            rows.into_iter().map(|service| {
                                let to_open = service.clone();
                                let to_delete = service.clone();
                                let featured = service.is_featured.unwrap_or(false);
                                view! {
                                    <tr class="table__row" on:click=move |_| vm.open(&to_open)>
                                        <td class="table__cell">{service.order_number}</td>
                                        <td class="table__cell">
                                            {service.title}
                                            {featured.then(|| view! { <Badge variant="primary">"Featured"</Badge> })}
                                        </td>
                                        <td class="table__cell table__cell--muted">{service.slug}</td>
                                        <td class="table__cell">{service.short_description}</td>
                                        <td class="table__cell">{service.features.len()}</td>
                                        <td class="table__cell"><ActiveBadge is_active=service.is_active /></td>
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
