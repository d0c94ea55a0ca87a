use crate::shared::slug::generate_slug;
use serde::{Deserialize, Serialize};

/// Expected column of a pasted line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkColumn {
    /// Technical field name
    pub field_name: &'static str,
    /// Header shown in the preview table
    pub title: &'static str,
}

impl BulkColumn {
    pub const fn new(field_name: &'static str, title: &'static str) -> Self {
        Self { field_name, title }
    }
}

/// One parsed line of pasted text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkRow {
    /// 1-based line number in the pasted text
    pub line: usize,
    /// 1-based position among parsed (non-blank) rows
    pub position: usize,
    /// Trimmed values, exactly one per declared column
    pub values: Vec<String>,
    /// Slug derived from the first column, valid or not
    pub slug: String,
    /// Valid iff the first column is non-empty
    pub is_valid: bool,
}

impl BulkRow {
    /// Value of column `index`, empty when the line had fewer fields
    pub fn value(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or("")
    }

    /// Name/title column
    pub fn name(&self) -> &str {
        self.value(0)
    }
}

/// Result of parsing pasted text, shown before anything is submitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkPreview {
    pub rows: Vec<BulkRow>,
}

impl BulkPreview {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn valid_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_valid).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.rows.len() - self.valid_count()
    }

    /// Rows that will be submitted; invalid rows are excluded, never coerced
    pub fn valid_rows(&self) -> Vec<BulkRow> {
        self.rows.iter().filter(|r| r.is_valid).cloned().collect()
    }
}

/// Parse pasted text into preview rows.
///
/// Each non-blank line is one candidate record whose comma-separated fields
/// follow `columns`. Missing trailing fields become empty strings; fields
/// beyond the declared columns are ignored. Nothing here fails: a bad line
/// only yields an invalid row.
pub fn parse_bulk_text(text: &str, columns: &[BulkColumn]) -> BulkPreview {
    let mut rows = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut parts = line.split(',').map(str::trim);
        let values: Vec<String> = columns
            .iter()
            .map(|_| parts.next().unwrap_or("").to_string())
            .collect();

        let name = values.first().map(String::as_str).unwrap_or("");
        let slug = generate_slug(name);
        let is_valid = !name.is_empty();

        rows.push(BulkRow {
            line: line_idx + 1,
            position: rows.len() + 1,
            values,
            slug,
            is_valid,
        });
    }

    BulkPreview { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARTNER_COLUMNS: &[BulkColumn] = &[
        BulkColumn::new("name", "Name"),
        BulkColumn::new("website", "Website"),
        BulkColumn::new("category", "Category"),
    ];

    #[test]
    fn test_mixed_valid_and_invalid_rows() {
        let text = "Acme, https://acme.io, Tech\n, https://noname.io, X\nBeta,,";
        let preview = parse_bulk_text(text, PARTNER_COLUMNS);

        assert_eq!(preview.rows.len(), 3);
        assert_eq!(preview.valid_count(), 2);
        assert_eq!(preview.invalid_count(), 1);

        let acme = &preview.rows[0];
        assert!(acme.is_valid);
        assert_eq!(acme.name(), "Acme");
        assert_eq!(acme.slug, "acme");
        assert_eq!(acme.value(1), "https://acme.io");
        assert_eq!(acme.value(2), "Tech");

        let nameless = &preview.rows[1];
        assert!(!nameless.is_valid);
        assert_eq!(nameless.value(1), "https://noname.io");
        assert_eq!(nameless.slug, "");

        let beta = &preview.rows[2];
        assert!(beta.is_valid);
        assert_eq!(beta.name(), "Beta");
        assert_eq!(beta.value(1), "");
        assert_eq!(beta.value(2), "");
    }

    #[test]
    fn test_blank_lines_are_skipped_and_lines_numbered() {
        let text = "\n  \nAcme\r\n\nBeta Corp, https://beta.example\n";
        let preview = parse_bulk_text(text, PARTNER_COLUMNS);

        assert_eq!(preview.rows.len(), 2);
        assert_eq!(preview.rows[0].line, 3);
        assert_eq!(preview.rows[0].position, 1);
        assert_eq!(preview.rows[0].values, vec!["Acme", "", ""]);
        assert_eq!(preview.rows[1].line, 5);
        assert_eq!(preview.rows[1].position, 2);
        assert_eq!(preview.rows[1].slug, "beta-corp");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let preview = parse_bulk_text("Acme, a, b, c, d", PARTNER_COLUMNS);
        assert_eq!(preview.rows[0].values.len(), 3);
        assert_eq!(preview.rows[0].value(2), "b");
        assert_eq!(preview.rows[0].value(7), "");
    }

    #[test]
    fn test_valid_rows_excludes_invalid() {
        let preview = parse_bulk_text(" , x\nGamma", PARTNER_COLUMNS);
        let valid = preview.valid_rows();
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].name(), "Gamma");
        assert_eq!(valid[0].position, 2);
    }

    #[test]
    fn test_empty_input() {
        let preview = parse_bulk_text("   \n\n", PARTNER_COLUMNS);
        assert!(preview.is_empty());
        assert_eq!(preview.valid_count(), 0);
        assert!(!parse_bulk_text("Acme", &[]).rows[0].is_valid);
    }
}
