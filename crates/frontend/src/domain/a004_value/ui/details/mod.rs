use crate::shared::components::details_frame::DetailsFrame;
use crate::shared::components::ui::input::parse_number_input;
use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::form_vm::FormViewModel;
use contracts::domain::a004_value::ValueForm;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

#[component]
pub fn ValueDetails(id: Option<RecordId>) -> impl IntoView {
    let vm = FormViewModel::<ValueForm>::new();
    vm.init(id);

    view! {
        <DetailsFrame vm=vm>
            <Input
                label="Title"
                required=true
                value=vm.text(|f| f.title.clone())
                on_input=vm.on_text(|f, v| f.title = v)
            />
            <Textarea
                label="Description"
                value=vm.text(|f| f.description.clone())
                on_input=vm.on_text(|f, v| f.description = v)
            />
            <div class="form__row">
                <Input
                    label="Icon"
                    placeholder="e.g. shield"
                    value=vm.text(|f| f.icon.clone())
                    on_input=vm.on_text(|f, v| f.icon = v)
                />
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
