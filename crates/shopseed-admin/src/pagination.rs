//! Cursor pagination for Admin API listings.
//!
//! Each listing response may carry a `Link` header naming adjacent pages:
//!
//! ```text
//! <https://shop.myshopify.com/admin/api/2024-10/products.json?limit=250&page_info=PREV>; rel="previous",
//! <https://shop.myshopify.com/admin/api/2024-10/products.json?limit=250&page_info=NEXT>; rel="next"
//! ```
//!
//! Only the `page_info` cursor of the `rel="next"` entry matters; the request
//! for the next page is rebuilt from it.

use reqwest::Url;

/// Returns the `page_info` cursor of the next page, or `None` on the last page.
#[must_use]
pub fn next_page_info(link_header: Option<&str>) -> Option<String> {
    link_header?
        .split('<')
        .skip(1)
        .filter_map(parse_link)
        .find(|(_, rel)| *rel == "next")
        .and_then(|(target, _)| cursor_from_url(target))
}

/// Splits the text after a `<` into the link target and its `rel` value.
///
/// Entries are cut on `<` rather than `,` because a `fields=id,title` filter
/// can leave commas inside the URL.
fn parse_link(entry: &str) -> Option<(&str, &str)> {
    let (target, params) = entry.split_once('>')?;
    let rel = params
        .split([';', ','])
        .find_map(|p| p.trim().strip_prefix("rel="))?
        .trim_matches('"');
    Some((target.trim(), rel))
}

fn cursor_from_url(target: &str) -> Option<String> {
    let url = Url::parse(target).ok()?;
    url.query_pairs()
        .find(|(k, v)| k == "page_info" && !v.is_empty())
        .map(|(_, v)| v.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://sefadevtest.myshopify.com/admin/api/2024-10/products.json";

    #[test]
    fn no_header_means_last_page() {
        assert!(next_page_info(None).is_none());
        assert!(next_page_info(Some("")).is_none());
    }

    #[test]
    fn reads_cursor_from_next_link() {
        let header = format!(r#"<{BASE}?limit=250&page_info=eyJsYXN0X2lkIjo5fQ>; rel="next""#);
        assert_eq!(
            next_page_info(Some(&header)).as_deref(),
            Some("eyJsYXN0X2lkIjo5fQ")
        );
    }

    #[test]
    fn picks_next_over_previous() {
        let header = format!(
            r#"<{BASE}?limit=250&page_info=PREV>; rel="previous", <{BASE}?limit=250&page_info=NEXT>; rel="next""#
        );
        assert_eq!(next_page_info(Some(&header)).as_deref(), Some("NEXT"));
    }

    #[test]
    fn previous_only_means_last_page() {
        let header = format!(r#"<{BASE}?limit=250&page_info=PREV>; rel="previous""#);
        assert!(next_page_info(Some(&header)).is_none());
    }

    #[test]
    fn next_link_without_cursor_is_ignored() {
        let header = format!(r#"<{BASE}?limit=250>; rel="next""#);
        assert!(next_page_info(Some(&header)).is_none());
    }

    #[test]
    fn cursor_is_percent_decoded() {
        let header = format!(r#"<{BASE}?page_info=abc%3D%3D&limit=250>; rel="next""#);
        assert_eq!(next_page_info(Some(&header)).as_deref(), Some("abc=="));
    }

    #[test]
    fn commas_inside_the_url_do_not_split_entries() {
        let header = format!(
            r#"<{BASE}?limit=250&fields=id,title,variants&page_info=P1>; rel="previous", <{BASE}?limit=250&fields=id,title,variants&page_info=N1>; rel="next""#
        );
        assert_eq!(next_page_info(Some(&header)).as_deref(), Some("N1"));
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let header = format!(r#"garbage, <{BASE}?page_info=OK>; rel="next""#);
        assert_eq!(next_page_info(Some(&header)).as_deref(), Some("OK"));
    }
}
