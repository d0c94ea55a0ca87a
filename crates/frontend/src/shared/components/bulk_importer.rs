//! Bulk import screen shared by every bulk-importable resource.
//!
//! Pasted lines are parsed on every keystroke into a preview; only valid
//! rows are submitted, one create request at a time. Leaving the screen
//! raises the abort signal: the request in flight completes, nothing after
//! it is sent.

use contracts::domain::common::Resource;
use contracts::shared::bulk_import::{
    parse_bulk_text, run_to_completion, submit_sequentially, AbortSignal, BulkImportable,
    BulkRow, Progress, RowOutcome,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::page_header::PageHeader;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_client::{use_api, BrowserBody};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;

/// Row that failed to import, by its line in the pasted text
#[derive(Clone, Debug, PartialEq)]
struct RowFailure {
    line: usize,
    message: String,
}

pub fn bulk_import_page<F: BulkImportable>() -> impl IntoView {
    let kind = <F::Record as Resource>::KIND;
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifications = use_notifications();
    let api = use_api();

    let text = RwSignal::new(String::new());
    let preview = Memo::new(move |_| text.with(|t| parse_bulk_text(t, F::BULK_COLUMNS)));
    let running = RwSignal::new(false);
    let progress = RwSignal::new(None::<Progress>);
    let failures = RwSignal::new(Vec::<RowFailure>::new());

    let abort = AbortSignal::new();
    {
        let abort = abort.clone();
        on_cleanup(move || abort.abort());
    }

    let can_submit = move || !running.get() && preview.with(|p| p.valid_count() > 0);

    let submit = move |_| {
        if running.get_untracked() {
            return;
        }
        let rows = preview.with_untracked(|p| p.valid_rows());
        if rows.is_empty() {
            return;
        }
        let total = rows.len();
        let lines: Vec<usize> = rows.iter().map(|r| r.line).collect();
        running.set(true);
        progress.set(Some(Progress::new(total)));
        failures.set(Vec::new());
        log::info!("{}: bulk import of {} rows", kind.full_name(), total);

        let resource = api.resource::<F::Record>();
        let abort = abort.clone();
        let left_screen = abort.clone();
        spawn_local(async move {
            let events = submit_sequentially(
                rows,
                move |row: BulkRow| {
                    let resource = resource.clone();
                    async move {
                        let body: BrowserBody = F::from_bulk_row(&row).to_payload().into_body(Vec::new());
                        resource.create(body).await
                    }
                },
                abort,
            );

            let summary = run_to_completion(events, total, |event| {
                let _ = progress.try_set(Some(event.progress));
                if let RowOutcome::Failed(e) = &event.outcome {
                    let line = lines.get(event.index).copied().unwrap_or_default();
                    log::warn!("{}: line {} failed: {}", kind.full_name(), line, e);
                    let _ = failures.try_update(|f| {
                        f.push(RowFailure {
                            line,
                            message: e.to_string(),
                        })
                    });
                }
            })
            .await;

            let _ = running.try_set(false);
            if summary.cancelled {
                log::info!(
                    "{}: bulk import stopped after {} of {} rows",
                    kind.full_name(),
                    summary.attempted(),
                    summary.total
                );
            }
            for notice in summary.notices(&kind.list_name().to_lowercase()) {
                notifications.push(notice);
            }
            if summary.should_leave() && !left_screen.is_aborted() {
                ctx.open_list(kind);
            }
        });
    };

    let columns = F::BULK_COLUMNS;
    let required_column = columns.first().map(|c| c.title).unwrap_or("name");
    let column_hint = columns
        .iter()
        .map(|c| c.title)
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div class="page bulk-import">
            <PageHeader
                title=format!("Bulk import: {}", kind.list_name())
                subtitle=format!("One record per line: {}", column_hint)
            >
                <button
                    class="button button--primary"
                    on:click=submit
                    disabled=move || !can_submit()
                >
                    {icon("upload")}
                    {move || match preview.with(|p| p.valid_count()) {
                        1 => "Import 1 row".to_string(),
                        n => format!("Import {} rows", n),
                    }}
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| ctx.open_list(kind)
                >
                    {icon("cancel")}
                    "Back"
                </button>
            </PageHeader>

            <div class="form__group">
                <textarea
                    class="form__textarea bulk-import__input"
                    rows=10
                    placeholder=column_hint.clone()
                    prop:value=move || text.get()
                    disabled=move || running.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="bulk-import__counts">
                <span class="badge badge--success">
                    {move || format!("{} valid", preview.with(|p| p.valid_count()))}
                </span>
                <span class="badge badge--error">
                    {move || format!("{} invalid", preview.with(|p| p.invalid_count()))}
                </span>
                {move || progress.get().map(|p| view! {
                    <div class="bulk-import__progress">
                        <div class="progress-bar">
                            <div class="progress-bar__fill" style=format!("width: {}%", p.percent())></div>
                        </div>
                        <span>{format!("{}/{}", p.attempted, p.total)}</span>
                    </div>
                })}
            </div>

            <Show when=move || failures.with(|f| !f.is_empty())>
                <div class="warning-box warning-box--error">
                    <ul class="bulk-import__failures">
                        <For
                            each=move || failures.get()
                            key=|f| f.line
                            children=|f| view! {
                                <li>{format!("Line {}: {}", f.line, f.message)}</li>
                            }
                        />
                    </ul>
                </div>
            </Show>

            <Show when=move || preview.with(|p| !p.is_empty())>
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Line"</th>
                                {columns.iter().map(|c| view! {
                                    <th class="table__header-cell">{c.title}</th>
                                }).collect_view()}
                                <th class="table__header-cell">"Slug"</th>
                                <th class="table__header-cell">"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || preview.get().rows.into_iter().map(|row| {
                                let is_valid = row.is_valid;
                                view! {
                                    <tr class="table__row" class:table__row--invalid=!is_valid>
                                        <td class="table__cell">{row.line}</td>
                                        {row.values.iter().map(|v| view! {
                                            <td class="table__cell">{v.clone()}</td>
                                        }).collect_view()}
                                        <td class="table__cell">{row.slug.clone()}</td>
                                        <td class="table__cell">
                                            {if is_valid {
                                                view! { <span class="badge badge--success">"OK"</span> }.into_any()
                                            } else {
                                                view! {
                                                    <span class="badge badge--error">
                                                        {format!("Missing {}", required_column.to_lowercase())}
                                                    </span>
                                                }.into_any()
                                            }}
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
