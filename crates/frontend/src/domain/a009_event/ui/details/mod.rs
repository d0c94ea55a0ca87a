use crate::shared::components::details_frame::DetailsFrame;
use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::form_vm::FormViewModel;
use contracts::domain::a009_event::EventForm;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

#[component]
pub fn EventDetails(id: Option<RecordId>) -> impl IntoView {
    let vm = FormViewModel::<EventForm>::new();
    vm.init(id);

    view! {
        <DetailsFrame vm=vm>
            <div class="form__row">
                <Input
                    label="Title"
                    required=true
                    value=vm.text(|f| f.title.clone())
                    on_input=vm.on_text(|f, v| f.set_title(v))
                />
                <Input
                    label="Slug"
                    required=true
                    value=vm.text(|f| f.slug.clone())
                    on_input=vm.on_text(|f, v| f.slug = v)
                />
            </div>
            <Textarea
                label="Description"
                rows=6
                value=vm.text(|f| f.description.clone())
                on_input=vm.on_text(|f, v| f.description = v)
            />
            <div class="form__row">
                <Input
                    label="Start date"
                    input_type="date"
                    required=true
                    value=vm.text(|f| f.start_date.clone())
                    on_input=vm.on_text(|f, v| f.start_date = v)
                />
                <Input
                    label="End date"
                    input_type="date"
                    value=vm.text(|f| f.end_date.clone())
                    on_input=vm.on_text(|f, v| f.end_date = v)
                />
            </div>
            <div class="form__row">
                <Input
                    label="Location"
                    value=vm.text(|f| f.location.clone())
                    on_input=vm.on_text(|f, v| f.location = v)
                />
                <Input
                    label="Registration link"
                    input_type="url"
                    placeholder="https://"
                    value=vm.text(|f| f.registration_link.clone())
                    on_input=vm.on_text(|f, v| f.registration_link = v)
                />
            </div>
            {vm.image_picker("image", "Image")}
            <div class="form__row">
                <Checkbox
                    label="Active"
                    checked=vm.flag(|f| f.is_active)
                    on_change=vm.on_flag(|f, v| f.is_active = v)
                />
                <Checkbox
                    label="Featured"
                    checked=vm.flag(|f| f.is_featured)
                    on_change=vm.on_flag(|f, v| f.is_featured = v)
                />
            </div>
        </DetailsFrame>
    }
}
