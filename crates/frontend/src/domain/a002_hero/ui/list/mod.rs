use crate::shared::components::list_header::{EmptyRow, ListHeader, RowActions, Thumbnail};
use crate::shared::components::ui::ActiveBadge;
use crate::shared::list_vm::ListViewModel;
use contracts::domain::a002_hero::Hero;
use leptos::prelude::*;

#[component]
pub fn HeroList() -> impl IntoView {
    let vm = ListViewModel::<Hero>::new();
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
                            <th class="table__header-cell">"Title"</th>
                            <th class="table__header-cell">"Subtitle"</th>
                            <th class="table__header-cell">"Button"</th>
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
                            rows.into_iter().map(|hero| {
                                let image = vm.media_url(&hero.image);
                                let to_open = hero.clone();
                                let to_delete = hero.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| vm.open(&to_open)>
                                        <td class="table__cell">{hero.order_number}</td>
                                        <Thumbnail url=image />
                                        <td class="table__cell">{hero.title}</td>
                                        <td class="table__cell">{hero.subtitle}</td>
                                        <td class="table__cell">{hero.button_text}</td>
                                        <td class="table__cell"><ActiveBadge is_active=hero.is_active /></td>
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
