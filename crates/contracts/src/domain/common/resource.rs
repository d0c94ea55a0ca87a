use super::RecordId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The fixed set of content resources managed by the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    CompanyInfo,
    Hero,
    Service,
    Value,
    Product,
    Partner,
    Client,
    News,
    Event,
    Career,
    Contact,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 11] = [
        ResourceKind::CompanyInfo,
        ResourceKind::Hero,
        ResourceKind::Service,
        ResourceKind::Value,
        ResourceKind::Product,
        ResourceKind::Partner,
        ResourceKind::Client,
        ResourceKind::News,
        ResourceKind::Event,
        ResourceKind::Career,
        ResourceKind::Contact,
    ];

    /// Index in the system (e.g. "a006")
    pub fn resource_index(&self) -> &'static str {
        match self {
            ResourceKind::CompanyInfo => "a001",
            ResourceKind::Hero => "a002",
            ResourceKind::Service => "a003",
            ResourceKind::Value => "a004",
            ResourceKind::Product => "a005",
            ResourceKind::Partner => "a006",
            ResourceKind::Client => "a007",
            ResourceKind::News => "a008",
            ResourceKind::Event => "a009",
            ResourceKind::Career => "a010",
            ResourceKind::Contact => "a011",
        }
    }

    /// REST collection path segment (e.g. "partners")
    pub fn collection_name(&self) -> &'static str {
        match self {
            ResourceKind::CompanyInfo => "company-info",
            ResourceKind::Hero => "heroes",
            ResourceKind::Service => "services",
            ResourceKind::Value => "values",
            ResourceKind::Product => "products",
            ResourceKind::Partner => "partners",
            ResourceKind::Client => "clients",
            ResourceKind::News => "news",
            ResourceKind::Event => "events",
            ResourceKind::Career => "careers",
            ResourceKind::Contact => "contacts",
        }
    }

    /// Singular display name
    pub fn element_name(&self) -> &'static str {
        match self {
            ResourceKind::CompanyInfo => "Company info",
            ResourceKind::Hero => "Hero banner",
            ResourceKind::Service => "Service",
            ResourceKind::Value => "Value",
            ResourceKind::Product => "Product",
            ResourceKind::Partner => "Partner",
            ResourceKind::Client => "Client",
            ResourceKind::News => "News article",
            ResourceKind::Event => "Event",
            ResourceKind::Career => "Career",
            ResourceKind::Contact => "Contact message",
        }
    }

    /// Plural display name
    pub fn list_name(&self) -> &'static str {
        match self {
            ResourceKind::CompanyInfo => "Company info",
            ResourceKind::Hero => "Hero banners",
            ResourceKind::Service => "Services",
            ResourceKind::Value => "Values",
            ResourceKind::Product => "Products",
            ResourceKind::Partner => "Partners",
            ResourceKind::Client => "Clients",
            ResourceKind::News => "News",
            ResourceKind::Event => "Events",
            ResourceKind::Career => "Careers",
            ResourceKind::Contact => "Contacts",
        }
    }

    /// Resources whose list screen offers pasted-text bulk import
    pub fn supports_bulk_import(&self) -> bool {
        matches!(
            self,
            ResourceKind::Service | ResourceKind::Value | ResourceKind::Partner | ResourceKind::Client
        )
    }

    /// Full name, e.g. "a006_partners"
    pub fn full_name(&self) -> String {
        format!("{}_{}", self.resource_index(), self.collection_name())
    }
}

/// A record of one of the content resources, as returned by the backend.
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: ResourceKind;

    /// Server-assigned id; `None` only for singleton documents the server
    /// returns without a key.
    fn id(&self) -> Option<&RecordId>;

    /// Primary name/title shown in tables and confirmation prompts
    fn display_name(&self) -> &str;

    fn collection_name() -> &'static str {
        Self::KIND.collection_name()
    }

    fn element_name() -> &'static str {
        Self::KIND.element_name()
    }

    fn list_name() -> &'static str {
        Self::KIND.list_name()
    }
}

/// A resource whose workflow state is changed through
/// `PATCH {collection}/{id}/status` rather than a full update.
pub trait StatusTracked: Resource {
    fn status_value(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes_are_unique_and_ordered() {
        let indexes: Vec<&str> = ResourceKind::ALL.iter().map(|k| k.resource_index()).collect();
        let mut sorted = indexes.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(indexes, sorted);
    }

    #[test]
    fn test_full_name() {
        assert_eq!(ResourceKind::Partner.full_name(), "a006_partners");
        assert_eq!(ResourceKind::CompanyInfo.full_name(), "a001_company-info");
    }
}
