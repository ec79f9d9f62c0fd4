use url::form_urlencoded;

use crate::models::PageLink;

/// One link per page, `1..=total_pages`, ascending. The search term is
/// carried along URL-encoded so following a link keeps the filter.
pub fn build_links(total_pages: u64, current_page: u64, term: &str) -> Vec<PageLink> {
    let query: String = form_urlencoded::byte_serialize(term.as_bytes()).collect();

    (1..=total_pages)
        .map(|page| PageLink {
            label: page,
            is_current: page == current_page,
            href: format!("/?query={}&page={}", query, page),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_only_the_current_page() {
        let links = build_links(3, 2, "x");
        let labels: Vec<u64> = links.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec![1, 2, 3]);
        let current: Vec<bool> = links.iter().map(|l| l.is_current).collect();
        assert_eq!(current, vec![false, true, false]);
    }

    #[test]
    fn no_pages_no_links() {
        assert!(build_links(0, 1, "x").is_empty());
    }

    #[test]
    fn encodes_the_term() {
        let links = build_links(1, 1, "oak & pine");
        assert_eq!(links[0].href, "/?query=oak+%26+pine&page=1");
    }

    #[test]
    fn out_of_range_current_page_marks_nothing() {
        let links = build_links(2, 7, "");
        assert!(links.iter().all(|l| !l.is_current));
        assert_eq!(links[1].href, "/?query=&page=2");
    }
}
