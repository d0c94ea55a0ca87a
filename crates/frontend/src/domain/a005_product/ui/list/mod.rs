use crate::shared::components::list_header::{EmptyRow, ListHeader, RowActions, Thumbnail};
use crate::shared::components::ui::{ActiveBadge, Badge};
use crate::shared::list_vm::ListViewModel;
use contracts::domain::a005_product::Product;
use leptos::prelude::*;

#[component]
pub fn ProductList() -> impl IntoView {
    let vm = ListViewModel::<Product>::new();
    vm.refresh();

    view! {
        <div class="page">
            <ListHeader vm=vm />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"#"</th>
                            <th class="table__header-cell">"Image"</th>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Price"</th>
                            <th class="table__header-cell">"Specs"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = vm.visible();
                            if rows.is_empty() {
                                return view! { <EmptyRow colspan=8 loading=vm.loading /> }.into_any();
                            }
                            rows.into_iter().map(|product| {
                                let image = vm.media_url(&product.image);
                                let to_open = product.clone();
                                let to_delete = product.clone();
                                let featured = product.is_featured.unwrap_or(false);
                                view! {
                                    <tr class="table__row" on:click=move |_| vm.open(&to_open)>
                                        <td class="table__cell">{product.order_number}</td>
                                        <Thumbnail url=image />
                                        <td class="table__cell">
                                            {product.name}
                                            {featured.then(|| view! { <Badge variant="primary">"Featured"</Badge> })}
                                        </td>
                                        <td class="table__cell">{product.category}</td>
                                        <td class="table__cell">{product.price}</td>
                                        <td class="table__cell">{product.specifications.len()}</td>
                                        <td class="table__cell"><ActiveBadge is_active=product.is_active /></td>
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
