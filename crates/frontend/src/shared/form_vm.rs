//! Generic details-screen state: one form, its picked image files, and the
//! load/save commands every create/edit screen shares.

use contracts::domain::common::{RecordId, Resource, ResourceKind};
use contracts::shared::form_model::FormModel;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, Url};

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_client::{use_api, ApiClient};
use crate::shared::components::image_picker::ImagePicker;
use crate::shared::notifications::{use_notifications, NotificationService};

pub struct FormViewModel<F: FormModel> {
    pub form: RwSignal<F>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    /// Picked files by image field name; `File` is a JS handle
    files: RwSignal<Vec<(String, File)>, LocalStorage>,
    api: StoredValue<ApiClient>,
    notifications: NotificationService,
    ctx: AppGlobalContext,
}

impl<F: FormModel> Clone for FormViewModel<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: FormModel> Copy for FormViewModel<F> {}

impl<F: FormModel> FormViewModel<F> {
    /// Must be called inside a component (reads context)
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(F::default()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            files: RwSignal::new_local(Vec::new()),
            api: StoredValue::new(use_api()),
            notifications: use_notifications(),
            ctx: use_context::<AppGlobalContext>().expect("AppGlobalContext not found"),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        <F::Record as Resource>::KIND
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn is_edit(&self) -> bool {
        self.form.with(|f| f.is_edit())
    }

    // ------------------------------------------------------------------
    // Field bindings
    // ------------------------------------------------------------------

    pub fn text(&self, get: impl Fn(&F) -> String + Send + Sync + 'static) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| get(f)))
    }

    pub fn flag(&self, get: impl Fn(&F) -> bool + Send + Sync + 'static) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| get(f)))
    }

    pub fn on_text(&self, set: impl Fn(&mut F, String) + Send + Sync + 'static) -> Callback<String> {
        let form = self.form;
        Callback::new(move |value: String| form.update(|f| set(f, value)))
    }

    pub fn on_flag(&self, set: impl Fn(&mut F, bool) + Send + Sync + 'static) -> Callback<bool> {
        let form = self.form;
        Callback::new(move |value: bool| form.update(|f| set(f, value)))
    }

    // ------------------------------------------------------------------
    // Images
    // ------------------------------------------------------------------

    /// Keep `file` for submission and preview it through an object URL
    pub fn select_image(&self, name: &str, file: File) {
        let preview = Url::create_object_url_with_blob(&file).ok();
        self.form.update(|f| {
            if let Some(field) = f.image_field_mut(name) {
                revoke_blob(field.preview.as_deref());
                field.select(file.name(), preview);
            }
        });
        self.files.update(|files| {
            files.retain(|(n, _)| n != name);
            files.push((name.to_string(), file));
        });
    }

    /// Drop the picked file; the stored image stays
    pub fn reset_image(&self, name: &str) {
        self.form.update(|f| {
            if let Some(field) = f.image_field_mut(name) {
                revoke_blob(field.preview.as_deref());
                field.reset();
            }
        });
        self.files.update(|files| files.retain(|(n, _)| n != name));
    }

    pub fn image_picker(&self, name: &'static str, label: &'static str) -> impl IntoView {
        let vm = *self;
        let form = self.form;
        let preview = Signal::derive(move || {
            form.with(|f| f.image_field(name).and_then(|i| i.preview.clone()))
        });
        let selected_name = Signal::derive(move || {
            form.with(|f| f.image_field(name).and_then(|i| i.selected_name.clone()))
        });
        view! {
            <ImagePicker
                label=label
                preview=preview
                selected_name=selected_name
                on_select=Callback::new(move |file: File| vm.select_image(name, file))
                on_reset=Callback::new(move |_: ()| vm.reset_image(name))
            />
        }
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Fill the form from a fetched record, dropping any picked files
    pub fn apply_record(&self, record: &F::Record) {
        // the screen may be gone by the time a fetch resolves
        let Some(endpoint) = self.api.try_with_value(|api| api.endpoint().clone()) else {
            return;
        };
        let _ = self.form.try_set(F::from_record(record, &endpoint));
        let _ = self.files.try_set(Vec::new());
        let _ = self.error.try_set(None);
    }

    /// Start editing `id`, or a blank form when `None`. A failed fetch
    /// returns to the list.
    pub fn init(&self, id: Option<RecordId>) {
        let Some(id) = id else {
            self.form.set(F::default());
            return;
        };
        let vm = *self;
        let resource = self.api().resource::<F::Record>();
        self.loading.set(true);
        spawn_local(async move {
            let result = resource.get_by_id(&id).await;
            let _ = vm.loading.try_set(false);
            match result {
                Ok(record) => vm.apply_record(&record),
                Err(e) => {
                    log::error!("Failed to load {} {}: {}", vm.kind().full_name(), id.as_string(), e);
                    vm.notifications.error(format!(
                        "Failed to load {}: {}",
                        vm.kind().element_name().to_lowercase(),
                        e
                    ));
                    vm.ctx.open_list(vm.kind());
                }
            }
        });
    }

    /// Validate, submit, then go back to the list
    pub fn save(&self) {
        let ctx = self.ctx;
        let kind = self.kind();
        self.save_with(move |_| ctx.open_list(kind));
    }

    /// Validate and submit; `on_saved` receives the echoed record, if any.
    /// On failure the form keeps its state.
    pub fn save_with(&self, on_saved: impl FnOnce(Option<F::Record>) + 'static) {
        if self.saving.get_untracked() {
            return;
        }
        let form = self.form.get_untracked();
        if let Err(message) = form.validate() {
            self.error.set(Some(message.clone()));
            self.notifications.error(message);
            return;
        }
        self.error.set(None);

        let body = form.to_payload().into_body(self.files.get_untracked());
        let resource = self.api().resource::<F::Record>();
        let vm = *self;
        let kind = self.kind();
        self.saving.set(true);

        spawn_local(async move {
            let result = match form.record_id() {
                Some(id) => resource.update(id, body).await,
                None => resource.create(body).await,
            };
            let _ = vm.saving.try_set(false);
            match result {
                Ok(record) => {
                    let verb = if form.is_edit() { "updated" } else { "created" };
                    log::info!("{} {}", kind.full_name(), verb);
                    vm.notifications
                        .success(format!("{} {}", kind.element_name(), verb));
                    let _ = vm.files.try_set(Vec::new());
                    on_saved(record);
                }
                Err(e) => {
                    log::error!("Failed to save {}: {}", kind.full_name(), e);
                    let _ = vm.error.try_set(Some(e.to_string()));
                    vm.notifications.error(format!(
                        "Failed to save {}: {}",
                        kind.element_name().to_lowercase(),
                        e
                    ));
                }
            }
        });
    }

    pub fn cancel(&self) {
        self.ctx.open_list(self.kind());
    }
}

fn revoke_blob(url: Option<&str>) {
    if let Some(url) = url.filter(|u| u.starts_with("blob:")) {
        let _ = Url::revoke_object_url(url);
    }
}
