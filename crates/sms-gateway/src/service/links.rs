//! URL detection and replacement in message text.

use super::{LinkShortener, ServiceError};
use once_cell::sync::Lazy;
use regex::Regex;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s]+").unwrap());

/// Replace every URL occurrence in `text` with its shortened form.
///
/// Occurrences are shortened left to right, each with its own shortener call
/// (no caching, duplicates included). A failure on any URL aborts the whole
/// replacement.
pub(super) async fn replace_links(
    shortener: &dyn LinkShortener,
    text: &str,
) -> Result<String, ServiceError> {
    let mut replaced = String::with_capacity(text.len());
    let mut last = 0;

    for m in URL_PATTERN.find_iter(text) {
        let short = shortener.shorten(m.as_str()).await?;
        replaced.push_str(&text[last..m.start()]);
        replaced.push_str(&short);
        last = m.end();
    }
    replaced.push_str(&text[last..]);

    Ok(replaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubShortener {
        calls: AtomicUsize,
        fail: bool,
    }

    impl StubShortener {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl LinkShortener for StubShortener {
        async fn shorten(&self, _long_url: &str) -> Result<String, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ServiceError::Shorten(bitly_client::BitlyError::Api {
                    status: 500,
                    message: "boom".into(),
                }))
            } else {
                Ok("https://bit.ly/short".into())
            }
        }
    }

    #[tokio::test]
    async fn test_text_without_urls_untouched() {
        let shortener = StubShortener::new();
        let result = replace_links(&shortener, "plain text, no links")
            .await
            .unwrap();

        assert_eq!(result, "plain text, no links");
        assert_eq!(shortener.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_single_url_replaced() {
        let shortener = StubShortener::new();
        let result = replace_links(&shortener, "see https://example.com/page today")
            .await
            .unwrap();

        assert_eq!(result, "see https://bit.ly/short today");
        assert_eq!(shortener.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_duplicate_urls_shortened_independently() {
        let shortener = StubShortener::new();
        let result = replace_links(
            &shortener,
            "https://example.com and https://example.com again",
        )
        .await
        .unwrap();

        assert_eq!(result, "https://bit.ly/short and https://bit.ly/short again");
        assert_eq!(shortener.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_http_scheme_detected() {
        let shortener = StubShortener::new();
        let result = replace_links(&shortener, "http://example.com").await.unwrap();

        assert_eq!(result, "https://bit.ly/short");
    }

    #[tokio::test]
    async fn test_shorten_failure_aborts() {
        let shortener = StubShortener::failing();
        let result = replace_links(&shortener, "see https://example.com").await;

        assert!(matches!(result, Err(ServiceError::Shorten(_))));
    }
}
