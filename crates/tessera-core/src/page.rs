//! Paged listing of the widget stack.
//!
//! A [`PageRequest`] is always valid: page numbers below zero become zero and
//! page sizes are forced into `1..=max_page_size`. Requests past the last
//! page yield an empty slice rather than an error.

use serde::{Deserialize, Serialize};

use crate::widget::Widget;

/// Page size used when none, or a non-positive one, is requested.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: usize = 500;

/// Bounds applied to page requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLimits {
    /// Size used when the requested one is absent or below 1.
    pub default_page_size: usize,
    /// Upper bound on the page size.
    pub max_page_size: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

/// A clamped page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl PageRequest {
    /// Clamp a raw request against `limits`.
    pub fn new(page: i64, size: i64, limits: &PageLimits) -> Self {
        let page = usize::try_from(page).unwrap_or(0);
        let max = limits.max_page_size.max(1);
        let size = match usize::try_from(size) {
            Ok(size) if size >= 1 => size.min(max),
            _ => limits.default_page_size.clamp(1, max),
        };
        Self { page, size }
    }

    /// Clamp a request whose parameters may be absent.
    ///
    /// An absent page means the first page, an absent size the default.
    pub fn from_options(page: Option<i64>, size: Option<i64>, limits: &PageLimits) -> Self {
        Self::new(page.unwrap_or(0), size.unwrap_or(0), limits)
    }

    /// Zero-based page number.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Widgets per page.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Offset of the first widget on this page.
    fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

/// One page of the ascending-z widget listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetPage {
    /// Widgets on this page, ascending by z.
    pub widgets: Vec<Widget>,
    /// Total number of widgets in the registry.
    pub total_length: usize,
    /// Number of pages at this page size.
    pub total_pages: usize,
    /// Zero-based number of this page.
    pub current_page: usize,
    /// Page size the listing was cut with.
    pub page_size: usize,
}

impl WidgetPage {
    /// Cut the page described by `request` out of an ordered listing.
    pub fn from_slice(ordered: &[Widget], request: PageRequest) -> Self {
        let total_length = ordered.len();
        let start = request.offset().min(total_length);
        let end = start.saturating_add(request.size()).min(total_length);
        Self {
            widgets: ordered[start..end].to_vec(),
            total_length,
            total_pages: total_length.div_ceil(request.size()),
            current_page: request.page(),
            page_size: request.size(),
        }
    }

    /// Wrap a complete listing as a single page.
    pub fn whole(widgets: Vec<Widget>) -> Self {
        let total_length = widgets.len();
        Self {
            widgets,
            total_length,
            total_pages: usize::from(total_length > 0),
            current_page: 0,
            page_size: total_length,
        }
    }

    /// Whether this page has no widgets.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::WidgetDescription;

    fn widgets(count: usize) -> Vec<Widget> {
        (0..count)
            .map(|z| {
                let mut widget = Widget::from_description(
                    &WidgetDescription::new()
                        .with_x(0)
                        .with_y(0)
                        .with_width(1)
                        .with_height(1),
                );
                widget.z = z as i32;
                widget
            })
            .collect()
    }

    #[test]
    fn test_request_clamping() {
        let limits = PageLimits::default();
        let request = PageRequest::new(-3, 20, &limits);
        assert_eq!(request.page(), 0);
        assert_eq!(request.size(), 20);

        assert_eq!(PageRequest::new(0, 0, &limits).size(), DEFAULT_PAGE_SIZE);
        assert_eq!(PageRequest::new(0, -5, &limits).size(), DEFAULT_PAGE_SIZE);
        assert_eq!(PageRequest::new(0, 501, &limits).size(), MAX_PAGE_SIZE);
        assert_eq!(PageRequest::new(0, i64::MAX, &limits).size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_request_from_options() {
        let limits = PageLimits::default();
        let request = PageRequest::from_options(None, None, &limits);
        assert_eq!(request.page(), 0);
        assert_eq!(request.size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_custom_limits() {
        let limits = PageLimits {
            default_page_size: 3,
            max_page_size: 5,
        };
        assert_eq!(PageRequest::new(0, 0, &limits).size(), 3);
        assert_eq!(PageRequest::new(0, 9, &limits).size(), 5);
    }

    #[test]
    fn test_page_slicing() {
        let all = widgets(25);
        let limits = PageLimits::default();

        let first = WidgetPage::from_slice(&all, PageRequest::new(0, 10, &limits));
        assert_eq!(first.widgets.len(), 10);
        assert_eq!(first.widgets[0].z, 0);
        assert_eq!(first.total_length, 25);
        assert_eq!(first.total_pages, 3);

        let last = WidgetPage::from_slice(&all, PageRequest::new(2, 10, &limits));
        assert_eq!(last.widgets.len(), 5);
        assert_eq!(last.widgets[0].z, 20);
        assert_eq!(last.current_page, 2);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let all = widgets(5);
        let page = WidgetPage::from_slice(&all, PageRequest::new(7, 10, &PageLimits::default()));
        assert!(page.is_empty());
        assert_eq!(page.total_length, 5);
        assert_eq!(page.current_page, 7);

        let huge = WidgetPage::from_slice(
            &all,
            PageRequest::new(i64::MAX, 500, &PageLimits::default()),
        );
        assert!(huge.is_empty());
    }

    #[test]
    fn test_empty_listing() {
        let page = WidgetPage::from_slice(&[], PageRequest::new(0, 10, &PageLimits::default()));
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(WidgetPage::whole(Vec::new()).total_pages, 0);
    }

    #[test]
    fn test_whole_listing() {
        let page = WidgetPage::whole(widgets(4));
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page_size, 4);
        assert_eq!(page.total_length, 4);
    }
}
