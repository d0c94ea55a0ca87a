use crate::shared::components::details_frame::DetailsFrame;
use crate::shared::components::ui::input::parse_number_input;
use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::form_vm::FormViewModel;
use crate::shared::icons::icon;
use contracts::domain::a005_product::ProductForm;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

#[component]
pub fn ProductDetails(id: Option<RecordId>) -> impl IntoView {
    let vm = FormViewModel::<ProductForm>::new();
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
                    hint="Follows the name until the product is saved"
                    value=vm.text(|f| f.slug.clone())
                    on_input=vm.on_text(|f, v| f.slug = v)
                />
            </div>
            <div class="form__row">
                <Input
                    label="Category"
                    value=vm.text(|f| f.category.clone())
                    on_input=vm.on_text(|f, v| f.category = v)
                />
                <Input
                    label="Price"
                    placeholder="e.g. from $99"
                    value=vm.text(|f| f.price.clone())
                    on_input=vm.on_text(|f, v| f.price = v)
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
            <SpecificationsEditor vm=vm />
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

/// Key/value rows; blank keys are dropped on save, a later duplicate key wins
#[component]
fn SpecificationsEditor(vm: FormViewModel<ProductForm>) -> impl IntoView {
    let form = vm.form;
    let row_count = move || form.with(|f| f.specifications.len());

    view! {
        <div class="form__group">
            <label class="form__label">"Specifications"</label>
            <div class="spec-editor">
                <For
                    each=move || 0..row_count()
                    key=|index| *index
                    children=move |index| {
                        let key = move || {
                            form.with(|f| f.specifications.get(index).map(|r| r.key.clone()).unwrap_or_default())
                        };
                        let value = move || {
                            form.with(|f| f.specifications.get(index).map(|r| r.value.clone()).unwrap_or_default())
                        };
                        view! {
                            <div class="spec-editor__row">
                                <input
                                    class="form__input"
                                    placeholder="Name"
                                    prop:value=key
                                    on:input=move |ev| form.update(|f| f.set_spec_key(index, event_target_value(&ev)))
                                />
                                <input
                                    class="form__input"
                                    placeholder="Value"
                                    prop:value=value
                                    on:input=move |ev| form.update(|f| f.set_spec_value(index, event_target_value(&ev)))
                                />
                                <button
                                    class="button button--ghost"
                                    title="Remove row"
                                    on:click=move |_| form.update(|f| f.remove_spec_row(index))
                                >
                                    {icon("delete")}
                                </button>
                            </div>
                        }
                    }
                />
            </div>
            <button class="button button--secondary" on:click=move |_| form.update(|f| f.add_spec_row())>
                {icon("plus")}
                "Add row"
            </button>
        </div>
    }
}
