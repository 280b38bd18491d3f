use crate::config::ReaderConfig;
use crate::records::PageRecord;
use reqwest::Client;
use std::time::Duration;
use tokio::sync::mpsc;

/// Starts fetching the given URLs through the reader API and returns a
/// receiver that yields one PageRecord per input URL, in input order.
///
/// Fetch failures are not propagated: the failed page is still emitted, with
/// `Error: {cause}` as its body text, so the pipeline runs to completion even
/// when some URLs are unreachable. There are no retries.
pub async fn start(config: &ReaderConfig, urls: Vec<String>) -> mpsc::Receiver<PageRecord> {
    ::log::info!(
        "Starting reader fetch of {} URLs via {}",
        urls.len(),
        config.endpoint
    );

    let (result_tx, result_rx) = mpsc::channel::<PageRecord>(64);
    let config = config.clone();

    tokio::spawn(async move {
        let client = match build_client(&config) {
            Ok(client) => client,
            Err(e) => {
                ::log::error!("Failed to build HTTP client: {}", e);
                return;
            }
        };

        let total = urls.len();
        for (idx, url) in urls.into_iter().enumerate() {
            println!("Processing URL {}/{}: {}", idx + 1, total, url);

            let body_text = fetch_page_text(&client, &config, &url).await;

            if result_tx.send(PageRecord::new(url, body_text)).await.is_err() {
                ::log::warn!("Result channel closed, stopping fetcher");
                break;
            }
        }
    });

    result_rx
}

/// Fetches rendered text for a single page, converting any failure into
/// literal replacement body text.
async fn fetch_page_text(client: &Client, config: &ReaderConfig, url: &str) -> String {
    let reader_url = format!(
        "{}/{}",
        config.endpoint.trim_end_matches('/'),
        encode_page_url(url)
    );
    ::log::debug!("GET {}", reader_url);

    let mut request = client.get(&reader_url);
    if let Some(key) = &config.api_key {
        request = request.bearer_auth(key);
    }

    match send(request).await {
        Ok(text) => {
            println!("Successfully fetched content from {}", url);
            text
        }
        Err(e) => {
            println!("Failed to fetch content from {}. Error: {}", url, e);
            format!("Error: {}", e)
        }
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<String, reqwest::Error> {
    let response = request.send().await?.error_for_status()?;
    response.text().await
}

fn build_client(config: &ReaderConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
}

/// Percent-encodes a page URL for use as the reader path. The reader expects
/// `/` and `:` to stay literal inside the appended URL.
fn encode_page_url(url: &str) -> String {
    urlencoding::encode(url)
        .replace("%2F", "/")
        .replace("%3A", ":")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_page_url_keeps_slashes_and_colons() {
        assert_eq!(
            encode_page_url("https://example.com/a/b"),
            "https://example.com/a/b"
        );
    }

    #[test]
    fn test_encode_page_url_escapes_query_characters() {
        assert_eq!(
            encode_page_url("https://example.com/a?b=c&d=e"),
            "https://example.com/a%3Fb%3Dc%26d%3De"
        );
        assert_eq!(
            encode_page_url("https://example.com/a b"),
            "https://example.com/a%20b"
        );
    }
}
