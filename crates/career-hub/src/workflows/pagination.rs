use serde::Serialize;

/// One page of a filtered collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_items: self.total_items,
        }
    }
}

/// Number of pages needed for `total_items`; an empty collection still has one (empty) page.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Slice `items` into the 1-based `page_number`. A zero page size is treated as one and page
/// zero as the first page; pages past the end are empty.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page_number: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let page_number = page_number.max(1);
    let start = (page_number - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());

    Page {
        items: items[start..end].to_vec(),
        page_number,
        page_size,
        total_pages: total_pages(items.len(), page_size),
        total_items: items.len(),
    }
}

/// Caller-held criteria and page number. Transitions return a new state; any change of
/// criteria sends the view back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState<C> {
    criteria: C,
    page: usize,
}

impl<C: Default + PartialEq> Default for SearchState<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: PartialEq> SearchState<C> {
    pub fn new(criteria: C) -> Self {
        Self { criteria, page: 1 }
    }

    pub fn criteria(&self) -> &C {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn with_criteria(self, criteria: C) -> Self {
        if criteria == self.criteria {
            self
        } else {
            Self { criteria, page: 1 }
        }
    }

    pub fn go_to(self, page: usize, total_pages: usize) -> Self {
        Self {
            page: page.clamp(1, total_pages.max(1)),
            ..self
        }
    }

    pub fn next_page(self, total_pages: usize) -> Self {
        let page = self.page.saturating_add(1);
        self.go_to(page, total_pages)
    }

    pub fn previous_page(self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_page_of_twenty_five() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 10, 3);
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 25);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn empty_collection_has_one_empty_page() {
        let page = paginate::<u32>(&[], 10, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next());
    }

    #[test]
    fn out_of_range_and_degenerate_inputs_are_clamped() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(paginate(&items, 2, 9).items.is_empty());
        assert_eq!(paginate(&items, 2, 0).items, vec![1, 2]);
        let single = paginate(&items, 0, 2);
        assert_eq!(single.items, vec![2]);
        assert_eq!(single.total_pages, 5);
    }

    #[test]
    fn changing_criteria_resets_to_first_page() {
        let state = SearchState::new("rust".to_string()).go_to(3, 4);
        assert_eq!(state.page(), 3);

        let same = state.clone().with_criteria("rust".to_string());
        assert_eq!(same.page(), 3);

        let changed = state.with_criteria("python".to_string());
        assert_eq!(changed.page(), 1);
        assert_eq!(changed.criteria(), "python");
    }

    #[test]
    fn navigation_stays_within_bounds() {
        let state: SearchState<String> = SearchState::default();
        let state = state.previous_page();
        assert_eq!(state.page(), 1);
        let state = state.next_page(2).next_page(2);
        assert_eq!(state.page(), 2);
        assert_eq!(state.go_to(10, 0).page(), 1);
    }
}
