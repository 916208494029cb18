//! Page slicing and page-number markers

pub const DEFAULT_PER_PAGE: usize = 6;
/// Pages shown on each side of the current one
const WINDOW: usize = 2;

/// One page of a filtered list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based, clamped to the available pages
    pub current: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based index of the first item shown, 0 when nothing is shown
    pub showing_start: usize,
    pub showing_end: usize,
}

impl<T> Page<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    /// "Showing X to Y of Z planets"
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} planets",
            self.showing_start, self.showing_end, self.total_items
        )
    }
}

pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let current = page.clamp(1, total_pages.max(1));

    let start = ((current - 1) * per_page).min(total_items);
    let end = (start + per_page).min(total_items);

    Page {
        items: &items[start..end],
        current,
        total_pages,
        total_items,
        showing_start: if start < end { start + 1 } else { 0 },
        showing_end: end,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Number(usize),
    Ellipsis,
}

/// Page buttons to render: first, a window around `current`, last, with
/// ellipses over gaps. Empty when there is at most one page.
pub fn visible_pages(current: usize, total_pages: usize) -> Vec<PageMarker> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut markers = vec![PageMarker::Number(1)];
    if current > WINDOW + 2 {
        markers.push(PageMarker::Ellipsis);
    }

    let low = current.saturating_sub(WINDOW).max(2);
    let high = (current + WINDOW).min(total_pages - 1);
    markers.extend((low..=high).map(PageMarker::Number));

    if current + WINDOW < total_pages - 1 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.push(PageMarker::Number(total_pages));

    markers
}
