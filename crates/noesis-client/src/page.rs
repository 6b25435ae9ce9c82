//! Generic pagination payloads shared by all resource listings.

use serde::Serialize;

/// Request body for `<resource>/page` endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest<F> {
    /// 1-based page index.
    pub page: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<F>,
}

/// Request body for `<resource>/page_count` endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCountRequest<F> {
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<F>,
}

/// Total pages needed for `count` records at `page_size` records per page.
#[must_use]
pub const fn total_pages(count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        0
    } else {
        count.div_ceil(page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn page_request_serializes_camel_case() {
        let request = PageRequest::<()> {
            page: 1,
            page_size: 10,
            filter: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "page": 1, "pageSize": 10 })
        );
    }

    #[test]
    fn filter_is_included_when_present() {
        #[derive(Serialize)]
        struct Filter {
            name: String,
        }
        let request = PageCountRequest {
            page_size: 25,
            filter: Some(Filter {
                name: "ada".into(),
            }),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "pageSize": 25, "filter": { "name": "ada" } })
        );
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 10), 10);
    }

    #[test]
    fn zero_page_size_yields_zero_pages() {
        assert_eq!(total_pages(42, 0), 0);
    }

    #[test]
    fn total_pages_bounds_record_count() {
        for (count, size) in [(1_u64, 3_u64), (7, 3), (9, 3), (100, 7)] {
            assert!(total_pages(count, size) * size >= count);
        }
    }
}
