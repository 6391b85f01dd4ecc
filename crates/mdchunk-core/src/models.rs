use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The markdown heading outline active at a point in the document.
///
/// Maps heading level (1-6) to the heading text(s) most recently seen at
/// that level. A new heading at level N replaces the entry for N and drops
/// every deeper level, since those belonged to the closed subsection.
pub type Headers = BTreeMap<u8, Vec<String>>;

/// One token-bounded piece of a split document.
///
/// `text` carries the chunk content with link/image targets replaced by
/// ordinal placeholders (`{{$url0}}`, `{{$img0}}`); the extracted targets
/// live in `urls`/`images` in encounter order. `start`/`end` are the byte
/// offsets of the raw (pre-placeholder) slice in the input, so chunks of
/// one document tile it exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,
    pub token_count: usize,
    pub headers: Headers,
    pub urls: Vec<String>,
    pub images: Vec<String>,
    pub start: usize,
    pub end: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_round_trips_through_json() {
        let mut headers = Headers::new();
        headers.insert(1, vec!["Title".to_string()]);

        let chunk = Chunk {
            text: "intro [link]({{$url0}})".to_string(),
            token_count: 12,
            headers,
            urls: vec!["http://x.com".to_string()],
            images: vec![],
            start: 0,
            end: 25,
        };

        let json = serde_json::to_string(&chunk).unwrap();
        let parsed: Chunk = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.text, chunk.text);
        assert_eq!(parsed.headers[&1], vec!["Title"]);
        assert_eq!(parsed.urls, chunk.urls);
        assert_eq!((parsed.start, parsed.end), (0, 25));
    }
}
