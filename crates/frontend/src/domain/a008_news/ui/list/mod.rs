use crate::shared::components::list_header::{EmptyRow, ListHeader, RowActions, Thumbnail};
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_vm::ListViewModel;
use contracts::domain::a008_news::{News, NewsStatus};
use contracts::domain::common::Resource;
use leptos::prelude::*;

fn status_variant(status: NewsStatus) -> &'static str {
    match status {
        NewsStatus::Draft => "warning",
        NewsStatus::Published => "success",
        NewsStatus::Archived => "neutral",
    }
}

#[component]
pub fn NewsList() -> impl IntoView {
    let vm = ListViewModel::<News>::new();
    vm.refresh();

    view! {
        <div class="page">
            <ListHeader vm=vm>
                <select
                    class="form__select filter-panel__select"
                    on:change=move |ev| vm.set_status(event_target_value(&ev))
                >
                    <option value="">"All statuses"</option>
                    {NewsStatus::ALL.into_iter().map(|s| view! {
                        <option value=s.as_str()>{s.label()}</option>
                    }).collect_view()}
                </select>
            </ListHeader>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Image"</th>
                            <th class="table__header-cell">"Title"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Author"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Updated"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = vm.visible();
                            if rows.is_empty() {
                                return view! { <EmptyRow colspan=7 loading=vm.loading /> }.into_any();
                            }
                            rows.into_iter().map(|news| {
                                let image = vm.media_url(&news.image);
                                let status = news.status();
                                let updated = news.meta.updated_display();
                                let to_open = news.clone();
                                let to_delete = news.clone();
                                let publish = (!news.is_published()).then(|| news.id().cloned()).flatten();
                                let featured = news.is_featured.unwrap_or(false);
                                view! {
                                    <tr class="table__row" on:click=move |_| vm.open(&to_open)>
                                        <Thumbnail url=image />
                                        <td class="table__cell">
                                            {news.title}
                                            {featured.then(|| view! { <Badge variant="primary">"Featured"</Badge> })}
                                        </td>
                                        <td class="table__cell">{news.category}</td>
                                        <td class="table__cell">{news.author}</td>
                                        <td class="table__cell">
                                            <Badge variant=status_variant(status)>{status.label()}</Badge>
                                        </td>
                                        <td class="table__cell table__cell--muted">{updated}</td>
                                        <RowActions on_delete=Callback::new(move |_: ()| vm.delete(&to_delete))>
                                            {publish.map(|id| {
                                                let id = StoredValue::new(id);
                                                view! {
                                                    <button
                                                        class="button button--ghost"
                                                        title="Publish"
                                                        on:click=move |_| {
                                                            let resource = vm.api().resource::<News>();
                                                            let id = id.get_value();
                                                            vm.run(
                                                                async move { resource.publish(&id).await },
                                                                "Article published".to_string(),
                                                            );
                                                        }
                                                    >
                                                        {icon("check")}
                                                    </button>
                                                }
                                            })}
                                        </RowActions>
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
