use crate::shared::components::details_frame::DetailsFrame;
use crate::shared::components::ui::{Checkbox, Input, Select, Textarea};
use crate::shared::form_vm::FormViewModel;
use contracts::domain::a008_news::{NewsForm, NewsStatus};
use contracts::domain::common::RecordId;
use leptos::prelude::*;

#[component]
pub fn NewsDetails(id: Option<RecordId>) -> impl IntoView {
    let vm = FormViewModel::<NewsForm>::new();
    vm.init(id);

    let statuses = NewsStatus::ALL
        .into_iter()
        .map(|s| (s.as_str(), s.label()))
        .collect::<Vec<_>>();

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
                label="Excerpt"
                rows=2
                value=vm.text(|f| f.excerpt.clone())
                on_input=vm.on_text(|f, v| f.excerpt = v)
            />
            <Textarea
                label="Content"
                required=true
                rows=12
                value=vm.text(|f| f.content.clone())
                on_input=vm.on_text(|f, v| f.content = v)
            />
            {vm.image_picker("image", "Cover image")}
            <div class="form__row">
                <Input
                    label="Author"
                    value=vm.text(|f| f.author.clone())
                    on_input=vm.on_text(|f, v| f.author = v)
                />
                <Input
                    label="Category"
                    value=vm.text(|f| f.category.clone())
                    on_input=vm.on_text(|f, v| f.category = v)
                />
                <Input
                    label="Tags"
                    hint="Comma-separated"
                    value=vm.text(|f| f.tags.clone())
                    on_input=vm.on_text(|f, v| f.tags = v)
                />
            </div>
            <div class="form__row">
                <Select
                    label="Status"
                    value=vm.text(|f| f.status.clone())
                    on_change=vm.on_text(|f, v| f.status = v)
                    options=statuses
                />
                <Input
                    label="Published at"
                    input_type="datetime-local"
                    value=vm.text(|f| f.published_at.clone())
                    on_input=vm.on_text(|f, v| f.published_at = v)
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
