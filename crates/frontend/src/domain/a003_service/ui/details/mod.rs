use crate::shared::components::details_frame::DetailsFrame;
use crate::shared::components::ui::input::parse_number_input;
use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::form_vm::FormViewModel;
use contracts::domain::a003_service::ServiceForm;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

#[component]
pub fn ServiceDetails(id: Option<RecordId>) -> impl IntoView {
    let vm = FormViewModel::<ServiceForm>::new();
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
                    hint="Follows the title until the service is saved"
                    value=vm.text(|f| f.slug.clone())
                    on_input=vm.on_text(|f, v| f.slug = v)
                />
            </div>
            <Input
                label="Short description"
                value=vm.text(|f| f.short_description.clone())
                on_input=vm.on_text(|f, v| f.short_description = v)
            />
            <Textarea
                label="Description"
                rows=6
                value=vm.text(|f| f.description.clone())
                on_input=vm.on_text(|f, v| f.description = v)
            />
            <Textarea
                label="Features"
                hint="One feature per line"
                rows=5
                value=vm.text(|f| f.features.clone())
                on_input=vm.on_text(|f, v| f.features = v)
            />
            <Input
                label="Icon"
                placeholder="e.g. cloud"
                value=vm.text(|f| f.icon.clone())
                on_input=vm.on_text(|f, v| f.icon = v)
            />
            {vm.image_picker("image", "Image")}
            <div class="form__row">
                <Input
                    label="Order"
                    input_type="number"
                    value=vm.text(|f| f.order_number.to_string())
                    on_input=vm.on_text(|f, v| f.order_number = parse_number_input(&v))
                />
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
