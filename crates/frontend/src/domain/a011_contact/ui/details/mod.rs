//! Read-only view of one inbound message. Opening a new message marks it
//! read; the admin can move it to any other status from here.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_client::use_api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use contracts::domain::a011_contact::{Contact, ContactStatus};
use contracts::domain::common::{RecordId, Resource};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn ContactDetails(id: RecordId) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifications = use_notifications();
    let resource = StoredValue::new(use_api().resource::<Contact>());

    let contact = RwSignal::new(None::<Contact>);
    let loading = RwSignal::new(true);
    let updating = RwSignal::new(false);
    let id = StoredValue::new(id);

    let set_status = move |next: ContactStatus| {
        if updating.get_untracked() {
            return;
        }
        let Some(api) = resource.try_get_value() else {
            return;
        };
        let id = id.get_value();
        updating.set(true);
        spawn_local(async move {
            let result = api.update_status(&id, next.as_str()).await;
            let _ = updating.try_set(false);
            match result {
                Ok(()) => {
                    log::info!("{} {} -> {}", Contact::KIND.full_name(), id.as_string(), next.as_str());
                    let _ = contact.try_update(|c| {
                        if let Some(c) = c {
                            c.status = next.as_str().to_string();
                        }
                    });
                }
                Err(e) => {
                    log::error!("Failed to update message status: {}", e);
                    notifications.error(format!("Failed to update status: {}", e));
                }
            }
        });
    };

    spawn_local(async move {
        let Some(api) = resource.try_get_value() else {
            return;
        };
        let id = id.get_value();
        let result = api.get_by_id(&id).await;
        let _ = loading.try_set(false);
        match result {
            Ok(record) => {
                let unread = record.is_unread();
                let _ = contact.try_set(Some(record));
                if unread {
                    set_status(ContactStatus::Read);
                }
            }
            Err(e) => {
                log::error!("Failed to load message {}: {}", id.as_string(), e);
                notifications.error(format!("Failed to load message: {}", e));
                ctx.open_list(Contact::KIND);
            }
        }
    });

    let subject = Signal::derive(move || {
        contact.with(|c| {
            c.as_ref()
                .map(|c| c.subject.clone())
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "Message".to_string())
        })
    });

    view! {
        <div class="page details">
            <PageHeader title=subject>
                <button class="button button--secondary" on:click=move |_| ctx.open_list(Contact::KIND)>
                    {icon("cancel")}
                    "Back"
                </button>
            </PageHeader>

            <Show when=move || loading.get()>
                <div class="details__loading">"Loading..."</div>
            </Show>

            {move || contact.get().map(|c| {
                let status = c.status();
                let reply = format!(
                    "mailto:{}?subject={}",
                    c.email,
                    urlencoding::encode(&format!("Re: {}", c.subject))
                );
                view! {
                    <div class="details__body">
                        <dl class="details__fields">
                            <dt>"From"</dt>
                            <dd>{c.name.clone()}</dd>
                            <dt>"Email"</dt>
                            <dd><a href=reply>{c.email.clone()}</a></dd>
                            <dt>"Phone"</dt>
                            <dd>{if c.phone.is_empty() { "-".to_string() } else { c.phone.clone() }}</dd>
                            <dt>"Company"</dt>
                            <dd>{if c.company.is_empty() { "-".to_string() } else { c.company.clone() }}</dd>
                            <dt>"Received"</dt>
                            <dd>{c.meta.created_display()}</dd>
                        </dl>

                        <div class="details__message">{c.message.clone()}</div>

                        <div class="form__group">
                            <label class="form__label">"Status"</label>
                            <select
                                class="form__select"
                                disabled=move || updating.get()
                                on:change=move |ev| set_status(ContactStatus::parse(&event_target_value(&ev)))
                            >
                                {ContactStatus::ALL.into_iter().map(|s| view! {
                                    <option value=s.as_str() selected=s == status>{s.label()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
