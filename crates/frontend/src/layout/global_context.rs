use contracts::domain::common::{RecordId, ResourceKind};
use leptos::prelude::*;

/// Screen shown in the centre of the shell
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    List(ResourceKind),
    /// `id: None` creates a new record
    Details {
        kind: ResourceKind,
        id: Option<RecordId>,
    },
    BulkImport(ResourceKind),
}

impl Page {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Page::List(kind) | Page::BulkImport(kind) => *kind,
            Page::Details { kind, .. } => *kind,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Page::List(ResourceKind::CompanyInfo)
            | Page::Details {
                kind: ResourceKind::CompanyInfo,
                ..
            } => ResourceKind::CompanyInfo.element_name().to_string(),
            Page::List(kind) => kind.list_name().to_string(),
            Page::Details { kind, id: None } => format!("New {}", kind.element_name().to_lowercase()),
            Page::Details { kind, id: Some(_) } => kind.element_name().to_string(),
            Page::BulkImport(kind) => format!("Bulk import: {}", kind.list_name()),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::List(ResourceKind::CompanyInfo)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: {}", page.title());
        self.page.set(page);
    }

    pub fn open_list(&self, kind: ResourceKind) {
        self.navigate(Page::List(kind));
    }

    pub fn open_details(&self, kind: ResourceKind, id: Option<RecordId>) {
        self.navigate(Page::Details { kind, id });
    }

    pub fn open_bulk_import(&self, kind: ResourceKind) {
        if kind.supports_bulk_import() {
            self.navigate(Page::BulkImport(kind));
        }
    }

    /// Whether the sidebar entry for `kind` is the current section
    pub fn is_active(&self, kind: ResourceKind) -> bool {
        self.page.with(|p| p.kind() == kind)
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_titles() {
        assert_eq!(Page::default().title(), "Company info");
        assert_eq!(Page::List(ResourceKind::Partner).title(), "Partners");
        assert_eq!(
            Page::Details {
                kind: ResourceKind::News,
                id: None
            }
            .title(),
            "New news article"
        );
        assert_eq!(
            Page::Details {
                kind: ResourceKind::Client,
                id: Some(RecordId::Number(3))
            }
            .title(),
            "Client"
        );
        assert_eq!(Page::BulkImport(ResourceKind::Value).title(), "Bulk import: Values");
    }

    #[test]
    fn test_page_kind() {
        let page = Page::Details {
            kind: ResourceKind::Career,
            id: Some(RecordId::Text("x".to_string())),
        };
        assert_eq!(page.kind(), ResourceKind::Career);
        assert_eq!(Page::BulkImport(ResourceKind::Service).kind(), ResourceKind::Service);
    }
}
