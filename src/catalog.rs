//! APIs.guru catalog client.
//!
//! Two endpoints, both plain GET + JSON:
//!
//! - `{base}/v2/providers.json` - `{"data": ["adyen.com", ...]}`
//! - `{base}/v2/{provider}.json` - `{"apis": {"<version>": {"info": {...}}}}`
//!
//! The provider segment goes into the URL exactly as listed by the catalog;
//! no escaping or normalization is applied.

use crate::types::SpecSummary;
use crate::util_text::normalize_newlines;
use anyhow::{anyhow, Result};
use serde_json::Value;
use std::sync::OnceLock;

static HTTP: OnceLock<reqwest::Client> = OnceLock::new();

fn http_client() -> &'static reqwest::Client {
    HTTP.get_or_init(|| {
        reqwest::Client::builder()
            .pool_max_idle_per_host(4)
            .tcp_nodelay(true)
            .build()
            .expect("reqwest client")
    })
}

/// GET a JSON document. No timeout: a request either completes or the
/// connection dies; slow responses are simply delivered late.
async fn get_json(url: &str) -> Result<Value> {
    let res = http_client().get(url).send().await?;
    if !res.status().is_success() {
        return Err(anyhow!("http {}", res.status()));
    }
    let v: Value = res.json().await?;
    Ok(v)
}

/// List every provider identifier in the catalog.
pub async fn list_providers(base_url: &str) -> Result<Vec<String>> {
    let url = format!("{}/v2/providers.json", base_url.trim_end_matches('/'));
    log::debug!("GET {url}");
    let v = get_json(&url).await?;
    Ok(extract_providers(&v))
}

/// Fetch one provider's spec document and summarize its first version entry.
pub async fn fetch_provider_spec(base_url: &str, provider: &str) -> Result<SpecSummary> {
    // Provider id is inserted verbatim; ids like "adyen.com" are plain
    // path segments as far as the catalog is concerned
    let url = format!("{}/v2/{}.json", base_url.trim_end_matches('/'), provider);
    log::debug!("GET {url}");
    let v = get_json(&url).await?;
    extract_summary(&v).ok_or_else(|| anyhow!("no usable spec entry for {provider}"))
}

/// Pull the provider id list out of a providers.json document.
fn extract_providers(v: &Value) -> Vec<String> {
    v.get("data")
        .and_then(|d| d.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|x| x.as_str())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Summarize the FIRST entry of the `apis` version map.
///
/// serde_json is built with `preserve_order`, so "first" means first in the
/// document, matching how the catalog orders versions.
fn extract_summary(v: &Value) -> Option<SpecSummary> {
    let apis = v.get("apis")?.as_object()?;
    let (version, spec) = apis.iter().next()?;
    let info = spec.get("info")?;
    let title = info
        .get("title")
        .and_then(|t| t.as_str())
        .unwrap_or("")
        .to_string();
    let description = info
        .get("description")
        .and_then(|d| d.as_str())
        .map(normalize_newlines)
        .unwrap_or_default();
    Some(SpecSummary {
        version: version.clone(),
        title,
        description,
    })
}
