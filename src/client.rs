use anyhow::{Context, bail};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::API_BASE_URL_ENV;
use crate::error::{GtransError, GtransResult};

const API_KEY_HEADER: &str = "X-Goog-Api-Key";

/// The two remote operations the translation flow depends on.
pub trait Translator {
    /// Best-guess language code of `text`.
    async fn detect(&self, text: &str) -> GtransResult<String>;
    /// `text` translated into `target`, as plain text.
    async fn translate(&self, text: &str, target: &str) -> GtransResult<String>;
}

/// Client for the Google Translate v2 REST API (`detect` and `translate`, one text per call).
#[derive(Debug, Clone)]
pub struct GoogleTranslateClient {
    http: Client,
    api_key: String,
    translate_url: Url,
    detect_url: Url,
}

#[derive(Serialize)]
struct DetectRequest<'a> {
    q: [&'a str; 1],
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: [&'a str; 1],
    target: &'a str,
    format: &'static str,
}

#[derive(Deserialize)]
struct DetectResponse {
    data: DetectData,
}

#[derive(Deserialize)]
struct DetectData {
    #[serde(default)]
    detections: Vec<Vec<Detection>>,
}

#[derive(Deserialize)]
struct Detection {
    language: String,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Deserialize)]
struct TranslateData {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

fn endpoint_urls(base_url: &str) -> anyhow::Result<(Url, Url)> {
    let mut translate =
        Url::parse(base_url).with_context(|| format!("invalid {API_BASE_URL_ENV}: {base_url}"))?;
    if translate.cannot_be_a_base() {
        bail!("invalid {API_BASE_URL_ENV}: {base_url}");
    }
    let path = translate.path().trim_end_matches('/').to_string();
    translate.set_path(&path);

    let mut detect = translate.clone();
    detect.set_path(&format!("{path}/detect"));
    Ok((translate, detect))
}

impl GoogleTranslateClient {
    pub fn new(api_key: impl Into<String>, base_url: &str) -> GtransResult<Self> {
        let (translate_url, detect_url) = endpoint_urls(base_url)
            .map_err(|e| GtransError::ConfigurationMissing(format!("{e:#}")))?;
        Ok(Self {
            http: Client::new(),
            api_key: api_key.into(),
            translate_url,
            detect_url,
        })
    }

    async fn post_json<B, T>(&self, url: &Url, body: &B) -> anyhow::Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let resp = self
            .http
            .post(url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;
        let status = resp.status();
        debug!(%status, %url, "translation API responded");

        let bytes = resp
            .bytes()
            .await
            .context("failed to read response body")?;
        if !status.is_success() {
            let message = serde_json::from_slice::<ApiErrorBody>(&bytes)
                .ok()
                .and_then(|b| b.error.message)
                .filter(|m| !m.trim().is_empty());
            match message {
                Some(message) => bail!("HTTP {status}: {message}"),
                None => bail!("HTTP {status}"),
            }
        }
        serde_json::from_slice(&bytes).context("malformed response body")
    }
}

impl Translator for GoogleTranslateClient {
    async fn detect(&self, text: &str) -> GtransResult<String> {
        let resp: DetectResponse = self
            .post_json(&self.detect_url, &DetectRequest { q: [text] })
            .await
            .map_err(|e| GtransError::upstream("detection", e))?;

        resp.data
            .detections
            .into_iter()
            .next()
            .and_then(|candidates| candidates.into_iter().next())
            .map(|d| d.language)
            .ok_or_else(|| {
                GtransError::upstream("detection", anyhow::anyhow!("response has no detections"))
            })
    }

    async fn translate(&self, text: &str, target: &str) -> GtransResult<String> {
        let body = TranslateRequest {
            q: [text],
            target,
            format: "text",
        };
        let resp: TranslateResponse = self
            .post_json(&self.translate_url, &body)
            .await
            .map_err(|e| GtransError::upstream("translate", e))?;

        resp.data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| {
                GtransError::upstream("translate", anyhow::anyhow!("response has no translations"))
            })
    }
}
