pub mod common;

pub mod a001_company_info;
pub mod a002_hero;
pub mod a003_service;
pub mod a004_value;
pub mod a005_product;
pub mod a006_partner;
pub mod a007_client;
pub mod a008_news;
pub mod a009_event;
pub mod a010_career;
pub mod a011_contact;
