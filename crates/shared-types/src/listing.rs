//! Client-side filtering and pagination of already-fetched lists.

/// Keep the rows whose searchable text contains `query`, case-insensitively.
///
/// A blank query keeps every row.
pub fn filter_rows<T: Clone>(rows: &[T], query: &str, text: impl Fn(&T) -> String) -> Vec<T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| text(row).to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// One page of a list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number after clamping.
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

impl<T: Clone> Page<T> {
    /// Slice `rows` into page `page` (1-based). Out-of-range pages clamp to
    /// the nearest valid page; an empty list still has one (empty) page.
    pub fn of(rows: &[T], page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total = rows.len();
        let total_pages = total.div_ceil(page_size).max(1);
        let page = page.clamp(1, total_pages);
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(total);
        Self {
            items: rows[start.min(total)..end].to_vec(),
            page,
            total_pages,
            total,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names() -> Vec<String> {
        ["Algebra Quiz", "Biology Lab", "algebra homework", "Chemistry"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn filter_is_case_insensitive() {
        let hits = filter_rows(&names(), "ALGEBRA", |s| s.clone());
        assert_eq!(hits, vec!["Algebra Quiz".to_string(), "algebra homework".to_string()]);
    }

    #[test]
    fn blank_query_keeps_everything() {
        assert_eq!(filter_rows(&names(), "   ", |s| s.clone()).len(), 4);
    }

    #[test]
    fn pages_slice_in_order() {
        let rows: Vec<u32> = (1..=25).collect();
        let second = Page::of(&rows, 2, 10);
        assert_eq!(second.items, (11..=20).collect::<Vec<_>>());
        assert_eq!(second.total_pages, 3);
        assert!(second.has_prev());
        assert!(second.has_next());

        let last = Page::of(&rows, 3, 10);
        assert_eq!(last.items, vec![21, 22, 23, 24, 25]);
        assert!(!last.has_next());
    }

    #[test]
    fn out_of_range_page_clamps() {
        let rows: Vec<u32> = (1..=5).collect();
        assert_eq!(Page::of(&rows, 9, 2).page, 3);
        assert_eq!(Page::of(&rows, 0, 2).page, 1);
    }

    #[test]
    fn empty_list_has_one_page() {
        let page = Page::<u32>::of(&[], 1, 10);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_next());
    }
}
