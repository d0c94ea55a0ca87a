//! Page registry: the single place mapping a [`Page`] to its view

use crate::domain::a001_company_info::ui::details::CompanyInfoDetails;
use crate::domain::a002_hero::ui::details::HeroDetails;
use crate::domain::a002_hero::ui::list::HeroList;
use crate::domain::a003_service::ui::details::ServiceDetails;
use crate::domain::a003_service::ui::list::ServiceList;
use crate::domain::a004_value::ui::details::ValueDetails;
use crate::domain::a004_value::ui::list::ValueList;
use crate::domain::a005_product::ui::details::ProductDetails;
use crate::domain::a005_product::ui::list::ProductList;
use crate::domain::a006_partner::ui::details::PartnerDetails;
use crate::domain::a006_partner::ui::list::PartnerList;
use crate::domain::a007_client::ui::details::ClientDetails;
use crate::domain::a007_client::ui::list::ClientList;
use crate::domain::a008_news::ui::details::NewsDetails;
use crate::domain::a008_news::ui::list::NewsList;
use crate::domain::a009_event::ui::details::EventDetails;
use crate::domain::a009_event::ui::list::EventList;
use crate::domain::a010_career::ui::details::CareerDetails;
use crate::domain::a010_career::ui::list::CareerList;
use crate::domain::a011_contact::ui::details::ContactDetails;
use crate::domain::a011_contact::ui::list::ContactList;
use crate::layout::global_context::Page;
use crate::shared::components::bulk_importer::bulk_import_page;
use contracts::domain::a003_service::ServiceForm;
use contracts::domain::a004_value::ValueForm;
use contracts::domain::a006_partner::PartnerForm;
use contracts::domain::a007_client::ClientForm;
use contracts::domain::common::ResourceKind;
use leptos::prelude::*;

pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::List(kind) => match kind {
            ResourceKind::Hero => view! { <HeroList /> }.into_any(),
            ResourceKind::Service => view! { <ServiceList /> }.into_any(),
            ResourceKind::Value => view! { <ValueList /> }.into_any(),
            ResourceKind::Product => view! { <ProductList /> }.into_any(),
            ResourceKind::Partner => view! { <PartnerList /> }.into_any(),
            ResourceKind::Client => view! { <ClientList /> }.into_any(),
            ResourceKind::News => view! { <NewsList /> }.into_any(),
            ResourceKind::Event => view! { <EventList /> }.into_any(),
            ResourceKind::Career => view! { <CareerList /> }.into_any(),
            ResourceKind::Contact => view! { <ContactList /> }.into_any(),
            ResourceKind::CompanyInfo => view! { <CompanyInfoDetails /> }.into_any(),
        },

        Page::Details { kind, id } => match kind {
            ResourceKind::Hero => view! { <HeroDetails id=id /> }.into_any(),
            ResourceKind::Service => view! { <ServiceDetails id=id /> }.into_any(),
            ResourceKind::Value => view! { <ValueDetails id=id /> }.into_any(),
            ResourceKind::Product => view! { <ProductDetails id=id /> }.into_any(),
            ResourceKind::Partner => view! { <PartnerDetails id=id /> }.into_any(),
            ResourceKind::Client => view! { <ClientDetails id=id /> }.into_any(),
            ResourceKind::News => view! { <NewsDetails id=id /> }.into_any(),
            ResourceKind::Event => view! { <EventDetails id=id /> }.into_any(),
            ResourceKind::Career => view! { <CareerDetails id=id /> }.into_any(),
            // messages are never created from the admin
            ResourceKind::Contact => match id {
                Some(id) => view! { <ContactDetails id=id /> }.into_any(),
                None => view! { <ContactList /> }.into_any(),
            },
            ResourceKind::CompanyInfo => view! { <CompanyInfoDetails /> }.into_any(),
        },

        Page::BulkImport(kind) => match kind {
            ResourceKind::Service => bulk_import_page::<ServiceForm>().into_any(),
            ResourceKind::Value => bulk_import_page::<ValueForm>().into_any(),
            ResourceKind::Partner => bulk_import_page::<PartnerForm>().into_any(),
            ResourceKind::Client => bulk_import_page::<ClientForm>().into_any(),
            other => {
                log::warn!("Bulk import is not offered for {}", other.full_name());
                render_page(Page::List(other))
            }
        },
    }
}
