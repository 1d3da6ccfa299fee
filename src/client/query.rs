//! Client-side filtering, sorting and pagination of listed resources
//!
//! The backend returns full collections; narrowing happens here so every
//! list command pages the same way.

use std::cmp::Ordering;

use serde::Serialize;

use super::models::{Establishment, Report, Teacher};

/// Page size used when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort order for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending order (A-Z, oldest first)
    Asc,
    /// Descending order (Z-A, newest first)
    #[default]
    Desc,
}

/// One page of results plus the totals needed to navigate
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 0-indexed page number
    pub page: usize,
    pub page_size: usize,
    /// Items matching the query across all pages
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Convert the items, keeping the paging totals
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

/// Slice `items` into the requested 0-indexed page.
///
/// A page past the end is empty but still reports the totals. A page size of
/// zero is treated as [`DEFAULT_PAGE_SIZE`].
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    let total = items.len();
    let total_pages = total.div_ceil(page_size);

    let items = items
        .into_iter()
        .skip(page.saturating_mul(page_size))
        .take(page_size)
        .collect();

    Page {
        items,
        page,
        page_size,
        total,
        total_pages,
    }
}

/// Fields reports can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportSortField {
    #[default]
    Date,
    Title,
    Status,
    Establishment,
    Inspector,
}

/// Filter, sort and page settings for the reports list.
///
/// Use the builder pattern to configure:
/// ```ignore
/// let page = ReportQuery::new()
///     .status("VALIDATED")
///     .sort(ReportSortField::Title, SortOrder::Asc)
///     .apply(reports);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    /// Case-insensitive substring over title, establishment and inspector
    pub search: Option<String>,
    /// Exact status, case-insensitive
    pub status: Option<String>,
    /// Substring of the establishment name
    pub establishment: Option<String>,
    /// Substring of the inspector name
    pub inspector: Option<String>,
    pub sort_by: ReportSortField,
    pub sort_order: SortOrder,
    pub page: usize,
    pub page_size: Option<usize>,
}

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
}

/// Free-text search over a resource's display fields
pub trait Searchable {
    /// Fields a search term is matched against
    fn search_fields(&self) -> Vec<Option<&str>>;

    /// Case-insensitive substring match on any field
    fn matches_term(&self, term: &str) -> bool {
        self.search_fields()
            .into_iter()
            .any(|field| contains_ci(field, term))
    }
}

impl Searchable for Report {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.title.as_str()),
            self.establishment_name.as_deref(),
            self.inspector_name.as_deref(),
        ]
    }
}

impl Searchable for Establishment {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.name.as_str()), self.code.as_deref(), self.city.as_deref()]
    }
}

impl Searchable for Teacher {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.first_name.as_str()),
            Some(self.last_name.as_str()),
            self.email.as_deref(),
            self.subject.as_deref(),
        ]
    }
}

/// Order teachers by last name, then first name, ignoring case
pub fn sort_teachers(teachers: &mut [Teacher]) {
    teachers.sort_by(|a, b| {
        cmp_text(Some(&a.last_name), Some(&b.last_name))
            .then_with(|| cmp_text(Some(&a.first_name), Some(&b.first_name)))
    });
}

/// Keep the items matching `term`; everything when there is no term
pub fn search<T: Searchable>(items: Vec<T>, term: Option<&str>) -> Vec<T> {
    match term.map(str::trim).filter(|t| !t.is_empty()) {
        Some(term) => items.into_iter().filter(|i| i.matches_term(term)).collect(),
        None => items,
    }
}

/// Compare optional text with missing values ordered last in ascending order
fn cmp_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl ReportQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn establishment(mut self, name: impl Into<String>) -> Self {
        self.establishment = Some(name.into());
        self
    }

    pub fn inspector(mut self, name: impl Into<String>) -> Self {
        self.inspector = Some(name.into());
        self
    }

    pub fn sort(mut self, field: ReportSortField, order: SortOrder) -> Self {
        self.sort_by = field;
        self.sort_order = order;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Whether a report passes every configured filter
    pub fn matches(&self, report: &Report) -> bool {
        if let Some(ref term) = self.search {
            if !report.matches_term(term) {
                return false;
            }
        }

        if let Some(ref status) = self.status {
            if !report.status.eq_ignore_ascii_case(status) {
                return false;
            }
        }

        if let Some(ref name) = self.establishment {
            if !contains_ci(report.establishment_name.as_deref(), name) {
                return false;
            }
        }

        if let Some(ref name) = self.inspector {
            if !contains_ci(report.inspector_name.as_deref(), name) {
                return false;
            }
        }

        true
    }

    fn compare(&self, a: &Report, b: &Report) -> Ordering {
        let ordering = match self.sort_by {
            ReportSortField::Date => match (a.visit_date, b.visit_date) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => Ordering::Equal,
            },
            ReportSortField::Title => cmp_text(Some(&a.title), Some(&b.title)),
            ReportSortField::Status => cmp_text(Some(&a.status), Some(&b.status)),
            ReportSortField::Establishment => cmp_text(
                a.establishment_name.as_deref(),
                b.establishment_name.as_deref(),
            ),
            ReportSortField::Inspector => {
                cmp_text(a.inspector_name.as_deref(), b.inspector_name.as_deref())
            }
        };

        match self.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    /// Filter, stable-sort and page `reports`
    pub fn apply(&self, reports: Vec<Report>) -> Page<Report> {
        let mut matching: Vec<Report> = reports.into_iter().filter(|r| self.matches(r)).collect();
        matching.sort_by(|a, b| self.compare(a, b));

        paginate(
            matching,
            self.page,
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn report(id: i64, title: &str, status: &str, date: Option<(i32, u32, u32)>) -> Report {
        Report {
            id,
            title: title.to_string(),
            status: status.to_string(),
            visit_date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            establishment_name: Some(format!("School {}", id % 2)),
            inspector_name: Some(if id % 2 == 0 { "Diallo" } else { "Martin" }.to_string()),
            teacher_name: None,
        }
    }

    fn sample() -> Vec<Report> {
        vec![
            report(1, "Maths visit", "DRAFT", Some((2024, 1, 10))),
            report(2, "Physics visit", "VALIDATED", Some((2024, 3, 5))),
            report(3, "Annual review", "validated", Some((2023, 11, 20))),
            report(4, "Chemistry", "SUBMITTED", None),
        ]
    }

    fn ids(page: &Page<Report>) -> Vec<i64> {
        page.items.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_default_sorts_newest_first_with_undated_last() {
        let page = ReportQuery::new().apply(sample());
        assert_eq!(ids(&page), vec![2, 1, 3, 4]);
        assert_eq!(page.total, 4);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_status_filter_is_case_insensitive() {
        let page = ReportQuery::new().status("Validated").apply(sample());
        assert_eq!(ids(&page), vec![2, 3]);
    }

    #[test]
    fn test_search_spans_title_establishment_inspector() {
        assert_eq!(ids(&ReportQuery::new().search("VISIT").apply(sample())), vec![2, 1]);
        assert_eq!(
            ids(&ReportQuery::new().search("martin").apply(sample())),
            vec![1, 3]
        );
        assert_eq!(
            ids(&ReportQuery::new().search("school 0").apply(sample())),
            vec![2, 4]
        );
        assert!(ReportQuery::new().search("nothing").apply(sample()).items.is_empty());
    }

    #[test]
    fn test_establishment_and_inspector_filters_combine() {
        let page = ReportQuery::new()
            .establishment("school 1")
            .inspector("mar")
            .apply(sample());
        assert_eq!(ids(&page), vec![1, 3]);
    }

    #[test]
    fn test_sort_by_title_ascending() {
        let page = ReportQuery::new()
            .sort(ReportSortField::Title, SortOrder::Asc)
            .apply(sample());
        assert_eq!(ids(&page), vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let page = ReportQuery::new()
            .sort(ReportSortField::Inspector, SortOrder::Asc)
            .apply(sample());
        assert_eq!(ids(&page), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_pagination() {
        let query = ReportQuery::new()
            .sort(ReportSortField::Title, SortOrder::Asc)
            .page_size(3);

        let first = query.clone().page(0).apply(sample());
        assert_eq!(ids(&first), vec![3, 4, 1]);
        assert_eq!(first.total_pages, 2);

        let second = query.clone().page(1).apply(sample());
        assert_eq!(ids(&second), vec![2]);

        let beyond = query.page(7).apply(sample());
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 4);
    }

    #[test]
    fn test_paginate_zero_size_uses_default() {
        let page = paginate((0..25).collect::<Vec<_>>(), 2, 0);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(page.items, (20..25).collect::<Vec<_>>());
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_search_establishments_and_teachers() {
        let establishments = vec![
            Establishment {
                id: 1,
                name: "Lycee Victor Hugo".to_string(),
                code: Some("0750001A".to_string()),
                city: Some("Paris".to_string()),
                kind: None,
                director_name: None,
            },
            Establishment {
                id: 2,
                name: "College Jean Moulin".to_string(),
                code: None,
                city: Some("Lyon".to_string()),
                kind: None,
                director_name: None,
            },
        ];
        let hits = search(establishments.clone(), Some("lyon"));
        assert_eq!(hits.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(search(establishments.clone(), Some("0750")).len(), 1);
        assert_eq!(search(establishments, Some("  ")).len(), 2);

        let teachers = vec![Teacher {
            id: 7,
            first_name: "Awa".to_string(),
            last_name: "Ndiaye".to_string(),
            email: None,
            subject: Some("Mathematics".to_string()),
            establishment_name: None,
        }];
        assert_eq!(search(teachers.clone(), Some("MATH")).len(), 1);
        assert!(search(teachers, Some("history")).is_empty());
    }

    fn teacher(id: i64, first: &str, last: &str) -> Teacher {
        Teacher {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: None,
            subject: None,
            establishment_name: None,
        }
    }

    #[test]
    fn test_sort_teachers_by_last_then_first_name() {
        let mut teachers = vec![
            teacher(1, "Zoe", "martin"),
            teacher(2, "awa", "Ndiaye"),
            teacher(3, "Bruno", "Martin"),
            teacher(4, "Claire", "diallo"),
            teacher(5, "Amadou", "MARTIN"),
        ];
        sort_teachers(&mut teachers);

        let ids: Vec<i64> = teachers.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4, 5, 3, 1, 2]);
    }

    #[test]
    fn test_page_map_keeps_totals() {
        let page = paginate((0..12).collect::<Vec<u32>>(), 1, 5).map(|n| n * 2);
        assert_eq!(page.items, vec![10, 12, 14, 16, 18]);
        assert_eq!(page.total, 12);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_paginate_empty() {
        let page = paginate(Vec::<u8>::new(), 0, 5);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }
}
