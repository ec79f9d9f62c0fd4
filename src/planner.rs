use crate::error::StoreError;
use crate::models::{Listing, NameFilter, PageWindow, PAGE_SIZE};
use crate::pagination::build_links;
use crate::store::CatalogStore;

/// Reads a requested page number leniently: leading whitespace and a sign
/// are accepted, then the leading digits are used and anything after them is
/// ignored (`"2.7"` is page 2). Missing, unparsable, zero and negative input
/// all mean page 1. Oversized numbers saturate.
pub fn parse_page(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return 1;
    };
    let raw = raw.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let mut page: Option<u64> = None;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let value = u64::from(digit - b'0');
        page = Some(page.unwrap_or(0).saturating_mul(10).saturating_add(value));
    }

    match page {
        Some(page) if !negative && page > 0 => page,
        _ => 1,
    }
}

/// Counts the matches for `filter` and works out which slice of them the
/// requested page covers. Pages past the end are not clamped; they produce a
/// window with nothing in it.
pub fn plan(
    store: &dyn CatalogStore,
    filter: &NameFilter,
    raw_page: Option<&str>,
) -> Result<PageWindow, StoreError> {
    let page = parse_page(raw_page);
    let total_matches = store.count_matching(filter)?;

    Ok(PageWindow {
        total_matches,
        total_pages: total_matches.div_ceil(PAGE_SIZE),
        page_size: PAGE_SIZE,
        offset: (page - 1).saturating_mul(PAGE_SIZE),
        page,
    })
}

/// Plans the page, fetches its rows and builds the pagination links.
pub fn browse(
    store: &dyn CatalogStore,
    filter: &NameFilter,
    raw_page: Option<&str>,
) -> Result<Listing, StoreError> {
    let window = plan(store, filter, raw_page)?;
    let products = store.fetch_page(filter, window.offset, window.page_size)?;
    let links = build_links(window.total_pages, window.page, filter.term());

    log::debug!(
        "query {:?}: page {} of {}, {} of {} products",
        filter.term(),
        window.page,
        window.total_pages,
        products.len(),
        window.total_matches
    );

    Ok(Listing {
        term: filter.term().to_string(),
        window,
        products,
        links,
    })
}
