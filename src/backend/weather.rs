#![cfg(feature = "server")]
use anyhow::{anyhow, Context, Result};
use dioxus::logger::tracing::{info, warn};
use once_cell::sync::Lazy;
use reqwest::Client;
use std::error::Error as _;

use crate::backend::config::SETTINGS;
use crate::shared::types::WeatherReport;
use crate::shared::weather::WeatherResponse;

static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .connect_timeout(std::time::Duration::from_secs(3))
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .expect("client")
});

/// Current conditions and the two-day forecast for the configured city.
pub async fn fetch_weather() -> Result<WeatherReport> {
    let key = SETTINGS
        .weather_api_key
        .as_deref()
        .ok_or_else(|| anyhow!("WEATHER_API_KEY not set"))?;
    fetch_weather_from(&SETTINGS.weather_api_url, key, &SETTINGS.weather_city).await
}

pub async fn fetch_weather_from(base_url: &str, api_key: &str, city: &str) -> Result<WeatherReport> {
    let url = format!("{}/india/weather", base_url);
    info!("[weather] GET {} city={}", url, city);
    let res = match CLIENT
        .get(&url)
        .query(&[("city", city)])
        .header("x-api-key", api_key)
        .header("Accept", "application/json")
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) => {
            if e.is_timeout() {
                warn!("[weather] hint: request timed out (client timeout ~10s)");
            }
            if e.is_connect() {
                warn!("[weather] hint: connection failed. Check WEATHER_API_URL and network reachability");
            }
            let mut chain = Vec::new();
            let mut src: Option<&dyn std::error::Error> = e.source();
            while let Some(s) = src {
                chain.push(s.to_string());
                src = s.source();
            }
            if !chain.is_empty() {
                warn!("[weather] error chain: {}", chain.join(" -> "));
            }
            return Err(anyhow!("sending GET {}: {}", url, e));
        }
    };
    if !res.status().is_success() {
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        let snip = text.chars().take(300).collect::<String>();
        warn!("[weather] request failed: status={} body={}", status, snip);
        return Err(anyhow!("GET {} failed with status {}", url, status));
    }
    let bytes = res
        .bytes()
        .await
        .with_context(|| format!("reading body from GET {}", url))?;
    let data: WeatherResponse = serde_json::from_slice(&bytes).map_err(|e| {
        let snip = String::from_utf8_lossy(&bytes);
        let snip = snip.chars().take(300).collect::<String>();
        anyhow!(
            "decoding JSON from GET {} failed: {}\nBody snippet: {}",
            url,
            e,
            snip
        )
    })?;
    data.into_report()
        .ok_or_else(|| anyhow!("GET {}: forecast has fewer than two days", url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    const BODY: &str = r#"{"city":"Delhi","weather":{"current":{"temperature":{"max":{"value":"38","departure":"1"},"min":{"value":"27","departure":"0"}},"rainfall":null,"humidity":{"morning":"60","evening":"40"}},"astronomical":{"sunset":"19:05","sunrise":"05:24","moonset":"02:11","moonrise":"14:48"},"forecast":[{"date":"d1","min_temp":"27","max_temp":"38.4","description":"Clear sky"},{"date":"d2","min_temp":"26","max_temp":"36","description":"Thunderstorm"}]}}"#;

    /// Serves one canned HTTP response and hands back the raw request head.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = sock.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let _ = tx.send(String::from_utf8_lossy(&buf).to_string());
            let resp = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            sock.write_all(resp.as_bytes()).await.unwrap();
            let _ = sock.shutdown().await;
        });
        (format!("http://{addr}"), rx)
    }

    #[tokio::test]
    async fn fetches_and_trims_report() {
        let (base, head) = serve_once("200 OK", BODY).await;
        let report = fetch_weather_from(&base, "secret", "Delhi").await.unwrap();
        assert_eq!(report.city, "Delhi");
        assert_eq!(report.today.max_temp, "38.4");
        assert_eq!(report.tomorrow.description, "Thunderstorm");

        let head = head.await.unwrap().to_lowercase();
        assert!(head.starts_with("get /india/weather?city=delhi http/1.1"));
        assert!(head.contains("x-api-key: secret"));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (base, _head) = serve_once("401 Unauthorized", r#"{"error":"bad key"}"#).await;
        let err = fetch_weather_from(&base, "nope", "Delhi").await.unwrap_err();
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let (base, _head) = serve_once("200 OK", r#"{"city":"Delhi"}"#).await;
        let err = fetch_weather_from(&base, "k", "Delhi").await.unwrap_err();
        assert!(err.to_string().contains("decoding JSON"));
    }

    #[tokio::test]
    async fn unreachable_host_is_an_error() {
        // Bind then drop to get a port nothing listens on
        let addr = TcpListener::bind("127.0.0.1:0").await.unwrap().local_addr().unwrap();
        let res = fetch_weather_from(&format!("http://{addr}"), "k", "Delhi").await;
        assert!(res.is_err());
    }
}
