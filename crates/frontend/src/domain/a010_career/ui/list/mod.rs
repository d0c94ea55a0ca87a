use crate::shared::components::list_header::{EmptyRow, ListHeader, RowActions};
use crate::shared::components::ui::Badge;
use crate::shared::list_vm::ListViewModel;
use contracts::domain::a010_career::{Career, CareerStatus};
use contracts::domain::common::Resource;
use leptos::prelude::*;

#[component]
pub fn CareerList() -> impl IntoView {
    let vm = ListViewModel::<Career>::new();
    vm.refresh();

    view! {
        <div class="page">
            <ListHeader vm=vm>
                <select
                    class="form__select filter-panel__select"
                    on:change=move |ev| vm.set_status(event_target_value(&ev))
                >
                    <option value="">"All statuses"</option>
                    {CareerStatus::ALL.into_iter().map(|s| view! {
                        <option value=s.as_str()>{s.label()}</option>
                    }).collect_view()}
                </select>
            </ListHeader>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Title"</th>
                            <th class="table__header-cell">"Department"</th>
                            <th class="table__header-cell">"Location"</th>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell">"Deadline"</th>
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
                            rows.into_iter().map(|career| {
                                let status = career.status();
                                let next = status.toggled();
                                let id = StoredValue::new(career.id().cloned());
                                let to_open = career.clone();
                                let to_delete = career.clone();
                                let toggle = move |ev: leptos::ev::MouseEvent| {
                                    ev.stop_propagation();
                                    let Some(id) = id.get_value() else {
                                        return;
                                    };
                                    let resource = vm.api().resource::<Career>();
                                    vm.run(
                                        async move { resource.update_status(&id, next.as_str()).await },
                                        format!("Vacancy {}", next.label().to_lowercase()),
                                    );
                                };
                                view! {
                                    <tr class="table__row" on:click=move |_| vm.open(&to_open)>
                                        <td class="table__cell">{career.title}</td>
                                        <td class="table__cell">{career.department}</td>
                                        <td class="table__cell">{career.location}</td>
                                        <td class="table__cell">{career.employment_type}</td>
                                        <td class="table__cell table__cell--muted">{career.deadline}</td>
                                        <td class="table__cell">
                                            <button
                                                class="button button--ghost"
                                                title=format!("Mark as {}", next.label().to_lowercase())
                                                on:click=toggle
                                            >
                                                <Badge variant=if status == CareerStatus::Open { "success" } else { "neutral" }>
                                                    {status.label()}
                                                </Badge>
                                            </button>
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
