use serde::{Deserialize, Serialize};

/// Rows shown per catalog page.
pub const PAGE_SIZE: u64 = 10;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub image_url: String,
    pub deleted: bool,
}

/// Substring filter on product names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    term: String,
    case_sensitive: bool,
}

impl NameFilter {
    pub fn new(term: impl Into<String>, case_sensitive: bool) -> Self {
        Self {
            term: term.into(),
            case_sensitive,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn matches(&self, name: &str) -> bool {
        if self.case_sensitive {
            name.contains(&self.term)
        } else {
            name.to_lowercase().contains(&self.term.to_lowercase())
        }
    }

    /// `%term%` with LIKE metacharacters escaped, so the term only ever
    /// matches literally.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.term.len() + 2);
        pattern.push('%');
        for c in self.term.chars() {
            if matches!(c, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub total_matches: u64,
    pub total_pages: u64,
    pub page_size: u64,
    pub offset: u64,
    pub page: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub label: u64,
    pub is_current: bool,
    pub href: String,
}

#[derive(Debug, Clone)]
pub struct Listing {
    pub term: String,
    pub window: PageWindow,
    pub products: Vec<Product>,
    pub links: Vec<PageLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NotFound,
    ValidationError(String),
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub query: Option<String>,
    pub page: Option<String>,
    pub success: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AddProductForm {
    pub name: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DeleteProductForm {
    #[serde(rename = "productID")]
    pub product_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub links: Vec<PageLink>,
}

impl From<Listing> for PaginatedResponse<Product> {
    fn from(listing: Listing) -> Self {
        Self {
            items: listing.products,
            total: listing.window.total_matches,
            page: listing.window.page,
            page_size: listing.window.page_size,
            total_pages: listing.window.total_pages,
            links: listing.links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_escapes_wildcards() {
        let filter = NameFilter::new(r"50%_off\", true);
        assert_eq!(filter.like_pattern(), r"%50\%\_off\\%");
    }

    #[test]
    fn empty_term_matches_everything() {
        let filter = NameFilter::new("", true);
        assert!(filter.matches("Widget"));
        assert!(filter.matches(""));
        assert_eq!(filter.like_pattern(), "%%");
    }

    #[test]
    fn case_sensitivity_is_configurable() {
        assert!(!NameFilter::new("widget", true).matches("Blue Widget"));
        assert!(NameFilter::new("widget", false).matches("Blue Widget"));
    }
}
