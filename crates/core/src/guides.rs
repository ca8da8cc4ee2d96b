//! Helpers for the reference guides (glossary, videos, rules).

const EMBED_PREFIX: &str = "https://www.youtube.com/embed/";

/// Convert a YouTube watch or short link into its embeddable form.
///
/// Links that are not recognised are returned unchanged.
pub fn youtube_embed(url: &str) -> String {
    if url.contains("youtube.com/watch?v=") {
        if let Some(rest) = url.split("v=").nth(1) {
            let id = rest.split('&').next().unwrap_or(rest);
            return format!("{EMBED_PREFIX}{id}");
        }
    } else if let Some((_, rest)) = url.split_once("youtu.be/") {
        let id = rest.split('?').next().unwrap_or(rest);
        return format!("{EMBED_PREFIX}{id}");
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url_converted() {
        assert_eq!(
            youtube_embed("https://www.youtube.com/watch?v=abc123"),
            "https://www.youtube.com/embed/abc123"
        );
    }

    #[test]
    fn watch_url_drops_extra_params() {
        assert_eq!(
            youtube_embed("https://www.youtube.com/watch?v=abc123&t=42s"),
            "https://www.youtube.com/embed/abc123"
        );
    }

    #[test]
    fn short_url_converted() {
        assert_eq!(
            youtube_embed("https://youtu.be/xyz789?si=share"),
            "https://www.youtube.com/embed/xyz789"
        );
    }

    #[test]
    fn other_urls_unchanged() {
        assert_eq!(
            youtube_embed("https://vimeo.com/12345"),
            "https://vimeo.com/12345"
        );
    }
}
