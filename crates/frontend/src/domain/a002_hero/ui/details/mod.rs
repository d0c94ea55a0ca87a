use crate::shared::components::details_frame::DetailsFrame;
use crate::shared::components::ui::input::parse_number_input;
use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::form_vm::FormViewModel;
use contracts::domain::a002_hero::HeroForm;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

#[component]
pub fn HeroDetails(id: Option<RecordId>) -> impl IntoView {
    let vm = FormViewModel::<HeroForm>::new();
    vm.init(id);

    view! {
        <DetailsFrame vm=vm>
            <Input
                label="Title"
                required=true
                value=vm.text(|f| f.title.clone())
                on_input=vm.on_text(|f, v| f.title = v)
            />
            <Input
                label="Subtitle"
                value=vm.text(|f| f.subtitle.clone())
                on_input=vm.on_text(|f, v| f.subtitle = v)
            />
            <Textarea
                label="Description"
                rows=4
                value=vm.text(|f| f.description.clone())
                on_input=vm.on_text(|f, v| f.description = v)
            />
            {vm.image_picker("image", "Background image")}
            <div class="form__row">
                <Input
                    label="Button text"
                    value=vm.text(|f| f.button_text.clone())
                    on_input=vm.on_text(|f, v| f.button_text = v)
                />
                <Input
                    label="Button link"
                    placeholder="/contact"
                    value=vm.text(|f| f.button_link.clone())
                    on_input=vm.on_text(|f, v| f.button_link = v)
                />
            </div>
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
