use crate::shared::components::list_header::{EmptyRow, ListHeader, RowActions, Thumbnail};
use crate::shared::components::ui::{ActiveBadge, Badge};
use crate::shared::list_vm::ListViewModel;
use contracts::domain::a007_client::Client;
use leptos::prelude::*;

#[component]
pub fn ClientList() -> impl IntoView {
    let vm = ListViewModel::<Client>::new();
    vm.refresh();

    view! {
        <div class="page">
            <ListHeader vm=vm />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"#"</th>
                            <th class="table__header-cell">"Logo"</th>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Industry"</th>
                            <th class="table__header-cell">"Testimonial"</th>
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
                            rows.into_iter().map(|client| {
                                let logo = vm.media_url(&client.logo);
                                let to_open = client.clone();
                                let to_delete = client.clone();
                                let featured = client.is_featured.unwrap_or(false);
                                let has_testimonial = !client.testimonial.trim().is_empty();
                                view! {
                                    <tr class="table__row" on:click=move |_| vm.open(&to_open)>
                                        <td class="table__cell">{client.order_number}</td>
                                        <Thumbnail url=logo />
                                        <td class="table__cell">
                                            {client.name}
                                            {featured.then(|| view! { <Badge variant="primary">"Featured"</Badge> })}
                                        </td>
                                        <td class="table__cell">{client.industry}</td>
                                        <td class="table__cell">{if has_testimonial { "Yes" } else { "-" }}</td>
                                        <td class="table__cell"><ActiveBadge is_active=client.is_active /></td>
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
