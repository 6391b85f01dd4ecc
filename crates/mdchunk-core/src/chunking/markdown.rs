//! Pure pattern-matching over markdown text: heading extraction and
//! link/image placeholder substitution. Malformed markdown is not an
//! error; non-matching text passes through as-is.

use crate::models::Headers;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(#{1,6})[ \t]+(.*)$").unwrap());
static IMAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Collect the markdown headings in `text`, grouped by level (1-6).
pub fn extract_headers(text: &str) -> Headers {
    let mut headers = Headers::new();
    for caps in HEADER_RE.captures_iter(text) {
        let level = caps[1].len() as u8;
        headers
            .entry(level)
            .or_default()
            .push(caps[2].trim().to_string());
    }
    headers
}

/// Fold the headings found in one chunk into the running outline state.
/// A heading at level N replaces the tracked entry for N and closes every
/// deeper level: a new H2 invalidates any stored H3-H6.
pub fn update_headers(current: &mut Headers, extracted: &Headers) {
    for level in 1..=6u8 {
        if let Some(found) = extracted.get(&level) {
            current.insert(level, found.clone());
            for deeper in level + 1..=6 {
                current.remove(&deeper);
            }
        }
    }
}

/// Replace image and link targets with 0-based ordinal placeholders and
/// return the rewritten text plus the extracted URLs in encounter order.
///
/// Images are rewritten first so the link pattern cannot mis-capture an
/// image's bracket/paren syntax; the link pass then skips any match
/// preceded by `!`, which is an already-rewritten image placeholder.
pub fn substitute_links_and_images(text: &str) -> (String, Vec<String>, Vec<String>) {
    let mut images = Vec::new();
    let mut urls = Vec::new();

    let mut image_index = 0usize;
    let with_images = IMAGE_RE.replace_all(text, |caps: &Captures| {
        images.push(caps[2].to_string());
        let replaced = format!("![{}]({{{{$img{}}}}})", &caps[1], image_index);
        image_index += 1;
        replaced
    });

    let bytes = with_images.as_bytes();
    let mut url_index = 0usize;
    let content = LINK_RE.replace_all(&with_images, |caps: &Captures| {
        let m = caps.get(0).unwrap();
        if m.start() > 0 && bytes[m.start() - 1] == b'!' {
            return m.as_str().to_string();
        }
        urls.push(caps[2].to_string());
        let replaced = format!("[{}]({{{{$url{}}}}})", &caps[1], url_index);
        url_index += 1;
        replaced
    });

    (content.into_owned(), urls, images)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_headings_by_level() {
        let headers = extract_headers("# Top\nbody\n## Sub\n### Deep\n## Other\n");
        assert_eq!(headers[&1], vec!["Top"]);
        assert_eq!(headers[&2], vec!["Sub", "Other"]);
        assert_eq!(headers[&3], vec!["Deep"]);
    }

    #[test]
    fn heading_requires_space_after_hashes() {
        let headers = extract_headers("#NotAHeading\n#\n####### seven hashes\n");
        assert!(headers.is_empty());
    }

    #[test]
    fn heading_text_is_trimmed() {
        let headers = extract_headers("##   padded   \n");
        assert_eq!(headers[&2], vec!["padded"]);
    }

    #[test]
    fn new_heading_clears_deeper_levels() {
        let mut current = Headers::new();
        update_headers(&mut current, &extract_headers("# A\n## B\n### C\n"));
        assert_eq!(current.len(), 3);

        update_headers(&mut current, &extract_headers("## D\n"));
        assert_eq!(current[&1], vec!["A"]);
        assert_eq!(current[&2], vec!["D"]);
        assert!(!current.contains_key(&3));

        update_headers(&mut current, &extract_headers("# E\n"));
        assert_eq!(current[&1], vec!["E"]);
        assert!(!current.contains_key(&2));
    }

    #[test]
    fn substitutes_images_and_links_with_placeholders() {
        let (content, urls, images) =
            substitute_links_and_images("See ![alt](http://img/1.png) and [link](http://x.com)");
        assert_eq!(content, "See ![alt]({{$img0}}) and [link]({{$url0}})");
        assert_eq!(images, vec!["http://img/1.png"]);
        assert_eq!(urls, vec!["http://x.com"]);
    }

    #[test]
    fn placeholder_indexes_are_per_kind_and_in_order() {
        let (content, urls, images) = substitute_links_and_images(
            "[a](u1) ![i](p1) [b](u2) ![j](p2)",
        );
        assert_eq!(content, "[a]({{$url0}}) ![i]({{$img0}}) [b]({{$url1}}) ![j]({{$img1}})");
        assert_eq!(urls, vec!["u1", "u2"]);
        assert_eq!(images, vec!["p1", "p2"]);
    }

    #[test]
    fn link_pass_does_not_recapture_image_placeholders() {
        let (content, urls, images) = substitute_links_and_images("![only](http://img/x.png)");
        assert_eq!(content, "![only]({{$img0}})");
        assert_eq!(images, vec!["http://img/x.png"]);
        assert!(urls.is_empty());
    }

    #[test]
    fn malformed_markdown_passes_through() {
        let text = "[no target] (gap)(url) ![unclosed](oops";
        let (content, urls, images) = substitute_links_and_images(text);
        assert_eq!(content, text);
        assert!(urls.is_empty());
        assert!(images.is_empty());
    }
}
