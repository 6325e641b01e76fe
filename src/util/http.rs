use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use once_cell::sync::{Lazy, OnceCell};
use reqwest::{header, Client, Method, Response};

use crate::logging::Logger;

/// A singleton instance of the reqwest client.
static CLIENT: OnceCell<Client> = OnceCell::new();

static LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new("http"));

const USER_AGENT: &str = concat!("coin_crawler/", env!("CARGO_PKG_VERSION"));

/// Returns the reqwest client singleton instance or creates one if it
/// doesn't exist. The timeouts bound a request that the upstream never
/// answers; without them an unresponsive endpoint would block forever.
fn get_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .brotli(true)
            .gzip(true)
            .connect_timeout(Duration::from_secs(8))
            .timeout(Duration::from_secs(15))
            .tcp_nodelay(true)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| anyhow!("Failed to create reqwest client: {:?}", e))
    })
}

/// Performs an HTTP GET request and returns the response as text.
///
/// # Arguments
///
/// * `url`: The URL to send the GET request to.
/// * `headers`: An optional set of headers to include with the request.
///
/// # Returns
///
/// * `Result<String>`: The response text, or an error if the request fails
///   or the body cannot be read.
pub async fn get(url: &str, headers: Option<header::HeaderMap>) -> Result<String> {
    get_response(url, headers)
        .await?
        .text()
        .await
        .map_err(|e| anyhow!("Error reading response text: {:?}", e))
}

pub async fn get_response(url: &str, headers: Option<header::HeaderMap>) -> Result<Response> {
    send(Method::GET, url, headers).await
}

/// Sends a single HTTP request; a non-2xx status counts as a failure.
/// Exactly one attempt is made per call.
async fn send(method: Method, url: &str, headers: Option<header::HeaderMap>) -> Result<Response> {
    let visit_log = format!("{method}:{url}");
    let client = get_client()?;
    let mut rb = client.request(method, url);

    if let Some(h) = headers {
        rb = rb.headers(h);
    }

    let start = Instant::now();
    let res = rb.send().await;
    let elapsed = start.elapsed().as_millis();

    match res {
        Ok(response) => match response.error_for_status() {
            Ok(response) => {
                LOGGER.info(format!("{} {} ms", visit_log, elapsed));
                Ok(response)
            }
            Err(why) => {
                LOGGER.error(format!("{} failed because {:?}. {} ms", visit_log, why, elapsed));
                Err(anyhow!("Request to {} returned an error status: {}", url, why))
            }
        },
        Err(why) => {
            LOGGER.error(format!("{} failed because {:?}. {} ms", visit_log, why, elapsed));
            Err(anyhow!("Failed to send request to {}: {}", url, why))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_refused_connection() {
        // Port 9 on loopback rejects immediately on any sane test host.
        let result = get("http://127.0.0.1:9/simple/price", None).await;
        assert!(result.is_err());
    }
}
