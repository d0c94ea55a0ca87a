//! Company profile: a single record edited in place. With no record yet the
//! form starts blank and the first save creates it.

use crate::shared::components::details_frame::DetailsFrame;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::form_vm::FormViewModel;
use crate::shared::notifications::{use_notifications, NotificationService};
use contracts::domain::a001_company_info::{CompanyInfo, CompanyInfoForm};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn load_current(vm: FormViewModel<CompanyInfoForm>, notifications: NotificationService) {
    if vm.form.is_disposed() {
        return;
    }
    let resource = vm.api().resource::<CompanyInfo>();
    vm.loading.set(true);
    spawn_local(async move {
        let result = resource.get_current().await;
        let _ = vm.loading.try_set(false);
        match result {
            Ok(Some(record)) => vm.apply_record(&record),
            Ok(None) => log::info!("No company profile yet, starting blank"),
            Err(e) => {
                log::error!("Failed to load company profile: {}", e);
                let _ = vm.error.try_set(Some(e.to_string()));
                notifications.error(format!("Failed to load company profile: {}", e));
            }
        }
    });
}

#[component]
pub fn CompanyInfoDetails() -> impl IntoView {
    let vm = FormViewModel::<CompanyInfoForm>::new();
    let notifications = use_notifications();
    load_current(vm, notifications);

    // the backend may answer without the saved record; reload then
    let on_save = Callback::new(move |_: ()| {
        vm.save_with(move |saved| match saved {
            Some(record) => vm.apply_record(&record),
            None => load_current(vm, notifications),
        })
    });

    view! {
        <DetailsFrame vm=vm standalone=true on_save=on_save>
            <div class="form__row">
                <Input
                    label="Company name"
                    required=true
                    value=vm.text(|f| f.name.clone())
                    on_input=vm.on_text(|f, v| f.name = v)
                />
                <Input
                    label="Tagline"
                    value=vm.text(|f| f.tagline.clone())
                    on_input=vm.on_text(|f, v| f.tagline = v)
                />
            </div>
            <Textarea
                label="Description"
                rows=5
                value=vm.text(|f| f.description.clone())
                on_input=vm.on_text(|f, v| f.description = v)
            />
            <div class="form__row">
                <Textarea
                    label="Vision"
                    value=vm.text(|f| f.vision.clone())
                    on_input=vm.on_text(|f, v| f.vision = v)
                />
                <Textarea
                    label="Mission"
                    value=vm.text(|f| f.mission.clone())
                    on_input=vm.on_text(|f, v| f.mission = v)
                />
            </div>
            {vm.image_picker("logo", "Logo")}

            <h3 class="form__section">"Contacts"</h3>
            <Input
                label="Address"
                value=vm.text(|f| f.address.clone())
                on_input=vm.on_text(|f, v| f.address = v)
            />
            <div class="form__row">
                <Input
                    label="Phone"
                    input_type="tel"
                    value=vm.text(|f| f.phone.clone())
                    on_input=vm.on_text(|f, v| f.phone = v)
                />
                <Input
                    label="Email"
                    input_type="email"
                    value=vm.text(|f| f.email.clone())
                    on_input=vm.on_text(|f, v| f.email = v)
                />
                <Input
                    label="Website"
                    input_type="url"
                    value=vm.text(|f| f.website.clone())
                    on_input=vm.on_text(|f, v| f.website = v)
                />
                <Input
                    label="Founded"
                    input_type="number"
                    placeholder="e.g. 1998"
                    value=vm.text(|f| f.founded_year.clone())
                    on_input=vm.on_text(|f, v| f.founded_year = v)
                />
            </div>

            <h3 class="form__section">"Social"</h3>
            <div class="form__row">
                <Input
                    label="LinkedIn"
                    input_type="url"
                    value=vm.text(|f| f.linkedin.clone())
                    on_input=vm.on_text(|f, v| f.linkedin = v)
                />
                <Input
                    label="Instagram"
                    input_type="url"
                    value=vm.text(|f| f.instagram.clone())
                    on_input=vm.on_text(|f, v| f.instagram = v)
                />
            </div>
        </DetailsFrame>
    }
}
