use crate::shared::components::details_frame::DetailsFrame;
use crate::shared::components::ui::{Checkbox, Input, Select, Textarea};
use crate::shared::form_vm::FormViewModel;
use contracts::domain::a010_career::{CareerForm, CareerStatus};
use contracts::domain::common::RecordId;
use leptos::prelude::*;

fn employment_label(value: &str) -> &'static str {
    match value {
        "part-time" => "Part-time",
        "contract" => "Contract",
        "internship" => "Internship",
        _ => "Full-time",
    }
}

#[component]
pub fn CareerDetails(id: Option<RecordId>) -> impl IntoView {
    let vm = FormViewModel::<CareerForm>::new();
    vm.init(id);

    let employment_types = CareerForm::EMPLOYMENT_TYPES
        .into_iter()
        .map(|t| (t, employment_label(t)))
        .collect::<Vec<_>>();
    let statuses = CareerStatus::ALL
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
            <div class="form__row">
                <Input
                    label="Department"
                    value=vm.text(|f| f.department.clone())
                    on_input=vm.on_text(|f, v| f.department = v)
                />
                <Input
                    label="Location"
                    value=vm.text(|f| f.location.clone())
                    on_input=vm.on_text(|f, v| f.location = v)
                />
                <Select
                    label="Employment type"
                    value=vm.text(|f| f.employment_type.clone())
                    on_change=vm.on_text(|f, v| f.employment_type = v)
                    options=employment_types
                />
            </div>
            <Textarea
                label="Description"
                rows=5
                value=vm.text(|f| f.description.clone())
                on_input=vm.on_text(|f, v| f.description = v)
            />
            <Textarea
                label="Requirements"
                hint="One per line"
                rows=5
                value=vm.text(|f| f.requirements.clone())
                on_input=vm.on_text(|f, v| f.requirements = v)
            />
            <Textarea
                label="Responsibilities"
                hint="One per line"
                rows=5
                value=vm.text(|f| f.responsibilities.clone())
                on_input=vm.on_text(|f, v| f.responsibilities = v)
            />
            <Textarea
                label="Benefits"
                hint="One per line"
                rows=4
                value=vm.text(|f| f.benefits.clone())
                on_input=vm.on_text(|f, v| f.benefits = v)
            />
            <div class="form__row">
                <Input
                    label="Salary range"
                    value=vm.text(|f| f.salary_range.clone())
                    on_input=vm.on_text(|f, v| f.salary_range = v)
                />
                <Input
                    label="Deadline"
                    input_type="date"
                    value=vm.text(|f| f.deadline.clone())
                    on_input=vm.on_text(|f, v| f.deadline = v)
                />
                <Select
                    label="Status"
                    value=vm.text(|f| f.status.clone())
                    on_change=vm.on_text(|f, v| f.status = v)
                    options=statuses
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
