use crate::shared::components::list_header::{EmptyRow, ListHeader, RowActions, Thumbnail};
use crate::shared::components::ui::{ActiveBadge, Badge};
use crate::shared::list_vm::ListViewModel;
use contracts::domain::a009_event::Event;
use leptos::prelude::*;

/// "10.09.2024" or "10.09.2024 - 12.09.2024"
fn date_span(start: &str, end: &str) -> String {
    let day = |d: &str| {
        let d = d.get(..10).unwrap_or(d);
        let mut parts = d.split('-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(dd)) => format!("{}.{}.{}", dd, m, y),
            _ => d.to_string(),
        }
    };
    match (start.trim(), end.trim()) {
        ("", "") => "-".to_string(),
        (s, "") => day(s),
        (s, e) if day(s) == day(e) => day(s),
        (s, e) => format!("{} - {}", day(s), day(e)),
    }
}

#[component]
pub fn EventList() -> impl IntoView {
    let vm = ListViewModel::<Event>::new();
    vm.refresh();

    view! {
        <div class="page">
            <ListHeader vm=vm />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Image"</th>
                            <th class="table__header-cell">"Title"</th>
                            <th class="table__header-cell">"Dates"</th>
                            <th class="table__header-cell">"Location"</th>
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
                            rows.into_iter().map(|event| {
                                let image = vm.media_url(&event.image);
                                let dates = date_span(&event.start_date, &event.end_date);
                                let to_open = event.clone();
                                let to_delete = event.clone();
                                let featured = event.is_featured.unwrap_or(false);
                                view! {
                                    <tr class="table__row" on:click=move |_| vm.open(&to_open)>
                                        <Thumbnail url=image />
                                        <td class="table__cell">
                                            {event.title}
                                            {featured.then(|| view! { <Badge variant="primary">"Featured"</Badge> })}
                                        </td>
                                        <td class="table__cell">{dates}</td>
                                        <td class="table__cell">{event.location}</td>
                                        <td class="table__cell"><ActiveBadge is_active=event.is_active /></td>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_span() {
        assert_eq!(date_span("", ""), "-");
        assert_eq!(date_span("2024-09-10T00:00:00.000Z", ""), "10.09.2024");
        assert_eq!(date_span("2024-09-10", "2024-09-10 00:00:00"), "10.09.2024");
        assert_eq!(date_span("2024-09-10", "2024-09-12"), "10.09.2024 - 12.09.2024");
    }
}
