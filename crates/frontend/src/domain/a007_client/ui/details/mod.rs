use crate::shared::components::details_frame::DetailsFrame;
use crate::shared::components::ui::input::parse_number_input;
use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::form_vm::FormViewModel;
use contracts::domain::a007_client::ClientForm;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

#[component]
pub fn ClientDetails(id: Option<RecordId>) -> impl IntoView {
    let vm = FormViewModel::<ClientForm>::new();
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
                    label="Industry"
                    value=vm.text(|f| f.industry.clone())
                    on_input=vm.on_text(|f, v| f.industry = v)
                />
            </div>
            <Textarea
                label="Testimonial"
                rows=4
                value=vm.text(|f| f.testimonial.clone())
                on_input=vm.on_text(|f, v| f.testimonial = v)
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
                <Checkbox
                    label="Featured"
                    checked=vm.flag(|f| f.is_featured)
                    on_change=vm.on_flag(|f, v| f.is_featured = v)
                />
            </div>
        </DetailsFrame>
    }
}
