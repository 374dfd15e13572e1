//! Компактный ряд кнопок пагинации
//!
//! `1 … 9 10 11 … 20`: first page, a window of `siblings` pages around the
//! current one, last page. An ellipsis always hides at least two pages; a
//! single missing page is shown as itself.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Dots,
}

pub const DEFAULT_SIBLINGS: u32 = 1;

/// Pure function of `(current, total, siblings)`; `current` is clamped into range.
pub fn page_range(current: u32, total: u32, siblings: u32) -> Vec<PageItem> {
    if total <= siblings.saturating_add(5) {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total);
    let start = current.saturating_sub(siblings).max(1);
    let end = current.saturating_add(siblings).min(total);

    let mut items = vec![PageItem::Page(1)];

    if start > 3 {
        items.push(PageItem::Dots);
    } else {
        items.extend((2..start).map(PageItem::Page));
    }

    items.extend((start.max(2)..=end.min(total - 1)).map(PageItem::Page));

    if end < total - 2 {
        items.push(PageItem::Dots);
    } else {
        items.extend((end.max(1) + 1..total).map(PageItem::Page));
    }

    items.push(PageItem::Page(total));
    items
}

/// Предыдущая страница или `None` на первой
pub fn previous_page(current: u32) -> Option<u32> {
    (current > 1).then(|| current - 1)
}

/// Следующая страница или `None` на последней
pub fn next_page(current: u32, total: u32) -> Option<u32> {
    (current < total).then(|| current + 1)
}
