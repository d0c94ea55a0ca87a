use crate::shared::components::list_header::{EmptyRow, ListHeader, RowActions, Thumbnail};
use crate::shared::components::ui::ActiveBadge;
use crate::shared::list_vm::ListViewModel;
use contracts::domain::a006_partner::Partner;
use leptos::prelude::*;

#[component]
pub fn PartnerList() -> impl IntoView {
    let vm = ListViewModel::<Partner>::new();
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
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Website"</th>
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
                            rows.into_iter().map(|partner| {
                                let logo = vm.media_url(&partner.logo);
                                let to_open = partner.clone();
                                let to_delete = partner.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| vm.open(&to_open)>
                                        <td class="table__cell">{partner.order_number}</td>
                                        <Thumbnail url=logo />
                                        <td class="table__cell">{partner.name}</td>
                                        <td class="table__cell">{partner.category}</td>
                                        <td class="table__cell table__cell--muted">{partner.website}</td>
                                        <td class="table__cell"><ActiveBadge is_active=partner.is_active /></td>
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
