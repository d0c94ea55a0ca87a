use crate::shared::components::details_frame::DetailsFrame;
use crate::shared::components::ui::input::parse_number_input;
use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::form_vm::FormViewModel;
use contracts::domain::a006_partner::PartnerForm;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

#[component]
pub fn PartnerDetails(id: Option<RecordId>) -> impl IntoView {
    let vm = FormViewModel::<PartnerForm>::new();
    vm.init(id);

    view! {
        <DetailsFrame vm=vm>
            <div class="form__row">
                <Input
                    label="Name"
                    required=true
                    value=vm.text(|f| f.name.clone())
                    on_input=vm.on_text(|f, v| f.set_name(v))
                />
                <Input
                    label="Slug"
                    required=true
                    value=vm.text(|f| f.slug.clone())
                    on_input=vm.on_text(|f, v| f.slug = v)
                />
            </div>
            <div class="form__row">
                <Input
                    label="Website"
                    input_type="url"
                    placeholder="https://"
                    value=vm.text(|f| f.website.clone())
                    on_input=vm.on_text(|f, v| f.website = v)
                />
                <Input
                    label="Category"
                    value=vm.text(|f| f.category.clone())
                    on_input=vm.on_text(|f, v| f.category = v)
                />
            </div>
            <Textarea
                label="Description"
                value=vm.text(|f| f.description.clone())
                on_input=vm.on_text(|f, v| f.description = v)
            />
            {vm.image_picker("logo", "Logo")}
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
            </div>
        </DetailsFrame>
    }
}
