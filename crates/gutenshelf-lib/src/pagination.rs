/// Number of records the catalog returns per page
pub const PAGE_SIZE: u32 = 32;

/// One slot of the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    /// Stands for one or more collapsed page numbers
    Ellipsis,
}

pub fn total_pages(total_items: u64) -> u32 {
    total_items.div_ceil(PAGE_SIZE as u64) as u32
}

/// Page numbers to render for `total_pages` pages with `current_page` highlighted.
///
/// The first and last pages are always shown, plus one neighbour on each side
/// of the current page. The gap after page 1 and the gap before the last page
/// each collapse into a single [`PageItem::Ellipsis`]. `current_page` must
/// already be within `1..=max(total_pages, 1)`.
pub fn compute_visible_pages(total_pages: u32, current_page: u32) -> Vec<PageItem> {
    let mut items = Vec::new();
    for page in 1..=total_pages {
        let near_current = page + 1 >= current_page && page <= current_page + 1;
        if page == 1 || page == total_pages || near_current {
            items.push(PageItem::Page(page));
        } else if page == 2 || page + 1 == total_pages {
            items.push(PageItem::Ellipsis);
        }
    }
    items
}

/// Pagination state of one fetched listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    pub total_items: u64,
    pub current_page: u32,
}

impl PageDescriptor {
    pub fn new(total_items: u64, current_page: u32) -> Self {
        Self {
            total_items,
            current_page,
        }
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_items)
    }

    /// `current_page` pulled into `1..=max(total_pages, 1)`
    pub fn clamped_page(&self) -> u32 {
        self.current_page.clamp(1, self.total_pages().max(1))
    }

    pub fn visible_pages(&self) -> Vec<PageItem> {
        compute_visible_pages(self.total_pages(), self.clamped_page())
    }

    pub fn is_current(&self, page: u32) -> bool {
        self.clamped_page() == page
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn test_middle_page() {
        assert_eq!(
            compute_visible_pages(10, 5),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_few_pages_have_no_ellipsis() {
        assert_eq!(compute_visible_pages(3, 1), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(compute_visible_pages(2, 2), vec![Page(1), Page(2)]);
        assert_eq!(compute_visible_pages(1, 1), vec![Page(1)]);
    }

    #[test]
    fn test_no_pages() {
        assert!(compute_visible_pages(0, 1).is_empty());
    }

    #[test]
    fn test_edges() {
        assert_eq!(
            compute_visible_pages(10, 1),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            compute_visible_pages(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
        assert_eq!(
            compute_visible_pages(10, 3),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            compute_visible_pages(4, 1),
            vec![Page(1), Page(2), Ellipsis, Page(4)]
        );
    }

    #[test]
    fn test_visible_pages_invariants() {
        for total in 0..=40u32 {
            for current in 1..=total.max(1) {
                let items = compute_visible_pages(total, current);
                let pages: Vec<u32> = items
                    .iter()
                    .filter_map(|item| match item {
                        Page(p) => Some(*p),
                        Ellipsis => None,
                    })
                    .collect();

                if total >= 1 {
                    assert_eq!(pages.first(), Some(&1), "total={total} current={current}");
                    assert_eq!(pages.last(), Some(&total), "total={total} current={current}");
                    assert!(pages.contains(&current));
                }
                assert!(pages.windows(2).all(|w| w[0] < w[1]));
                assert!(
                    !items.windows(2).any(|w| w == [Ellipsis, Ellipsis]),
                    "total={total} current={current}"
                );

                let ellipses = items.iter().filter(|item| **item == Ellipsis).count();
                let current_index = items.iter().position(|item| *item == Page(current));
                if let Some(index) = current_index {
                    let left = items[..index].iter().filter(|i| **i == Ellipsis).count();
                    let right = items[index..].iter().filter(|i| **i == Ellipsis).count();
                    assert!(left <= 1 && right <= 1);
                }
                assert!(ellipses <= 2);
                if total <= 3 {
                    assert_eq!(ellipses, 0);
                }
            }
        }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(32), 1);
        assert_eq!(total_pages(33), 2);
        assert_eq!(total_pages(74_000), 2313);
    }

    #[test]
    fn test_descriptor_clamps_page() {
        let descriptor = PageDescriptor::new(64, 9);
        assert_eq!(descriptor.total_pages(), 2);
        assert_eq!(descriptor.clamped_page(), 2);
        assert!(descriptor.is_current(2));
        assert_eq!(descriptor.visible_pages(), vec![Page(1), Page(2)]);

        let empty = PageDescriptor::new(0, 4);
        assert_eq!(empty.clamped_page(), 1);
        assert!(empty.visible_pages().is_empty());
    }
}
