//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::client::Page;

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// "Page 2 of 5 (47 total)" with 1-indexed page numbers for humans
pub fn page_footer<T>(page: &Page<T>) -> String {
    format!(
        "Page {} of {} ({} total)",
        page.page + 1,
        page.total_pages.max(1),
        page.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::paginate;

    #[derive(Debug, Tabled)]
    struct TestRow {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "TITLE")]
        title: String,
    }

    #[test]
    fn test_format_table_empty() {
        let items: Vec<TestRow> = vec![];
        assert_eq!(format_table(&items), "No results found.");
    }

    #[test]
    fn test_format_table_rows() {
        let items = vec![
            TestRow {
                id: "1".to_string(),
                title: "Maths visit".to_string(),
            },
            TestRow {
                id: "2".to_string(),
                title: "Annual review".to_string(),
            },
        ];

        let result = format_table(&items);

        assert!(result.contains("ID"));
        assert!(result.contains("TITLE"));
        assert!(result.contains("Maths visit"));
        assert!(result.contains("Annual review"));
    }

    #[test]
    fn test_page_footer_is_one_indexed() {
        let page = paginate((0..47).collect::<Vec<_>>(), 1, 10);
        assert_eq!(page_footer(&page), "Page 2 of 5 (47 total)");
    }
}
