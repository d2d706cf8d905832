//! HTTP emotion models.
//!
//! Talks to Hugging Face style inference endpoints
//! (`POST {base}/models/{model_id}` with `{"inputs": "..."}`), which answer a
//! `text-classification` request with every label's score.

use crate::provider::{EmotionModel, LabelScore, ModelError, ModelFuture, ModelSource};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Text sent once at load time to confirm the model answers.
const PROBE_TEXT: &str = "hello";

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    options: InferenceOptions,
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

/// Endpoints answer either `[[{label, score}, ..]]` (batched) or a flat list.
#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batched(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl InferenceResponse {
    fn into_scores(self) -> Vec<LabelScore> {
        match self {
            Self::Batched(batches) => batches.into_iter().next().unwrap_or_default(),
            Self::Flat(scores) => scores,
        }
    }
}

/// Parse a raw response body into label scores.
pub fn parse_scores(body: &str) -> Result<Vec<LabelScore>, ModelError> {
    let parsed: InferenceResponse =
        serde_json::from_str(body).map_err(|e| ModelError::InvalidResponse(e.to_string()))?;
    let scores = parsed.into_scores();
    if scores.is_empty() {
        return Err(ModelError::InvalidResponse("no labels in response".into()));
    }
    Ok(scores)
}

/// Map an error status: 429 is rate limiting, 503 means the model is not
/// (yet) servable.
fn check_error(status: reqwest::StatusCode, body: String) -> ModelError {
    match status.as_u16() {
        429 => ModelError::RateLimited,
        503 => ModelError::Unavailable(body),
        _ => ModelError::RequestFailed(format!("{status}: {body}")),
    }
}

/// A remote classification model.
pub struct HttpEmotionModel {
    model_id: String,
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpEmotionModel {
    pub fn new(model_id: String, api_key: String, base_url: Option<String>) -> Self {
        Self::with_client(model_id, api_key, base_url, reqwest::Client::new())
    }

    fn with_client(
        model_id: String,
        api_key: String,
        base_url: Option<String>,
        client: reqwest::Client,
    ) -> Self {
        let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        Self {
            model_id,
            client,
            base_url: base.trim_end_matches('/').to_owned(),
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model_id)
    }

    async fn infer(&self, text: &str) -> Result<Vec<LabelScore>, ModelError> {
        let body = InferenceRequest {
            inputs: text,
            options: InferenceOptions { wait_for_model: true },
        };

        let resp = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ModelError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(check_error(status, text));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| ModelError::RequestFailed(e.to_string()))?;
        parse_scores(&text)
    }
}

impl EmotionModel for HttpEmotionModel {
    fn id(&self) -> &str {
        &self.model_id
    }

    fn classify<'a>(&'a self, text: &'a str) -> ModelFuture<'a, Vec<LabelScore>> {
        Box::pin(self.infer(text))
    }
}

/// Loads [`HttpEmotionModel`]s, probing each one before handing it out.
pub struct HttpModelSource {
    client: reqwest::Client,
    base_url: Option<String>,
    api_key: String,
}

impl HttpModelSource {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self { client: reqwest::Client::new(), base_url, api_key }
    }

    fn build(&self, model_id: &str) -> HttpEmotionModel {
        HttpEmotionModel::with_client(
            model_id.to_owned(),
            self.api_key.clone(),
            self.base_url.clone(),
            self.client.clone(),
        )
    }
}

impl ModelSource for HttpModelSource {
    fn load<'a>(&'a self, model_id: &'a str) -> ModelFuture<'a, Box<dyn EmotionModel>> {
        Box::pin(async move {
            let model = self.build(model_id);
            model.infer(PROBE_TEXT).await?;
            Ok(Box::new(model) as Box<dyn EmotionModel>)
        })
    }
}

/// Build a model source from the environment.
/// Reads `MOODLINE_HF_API_KEY`, optionally `MOODLINE_HF_BASE_URL`.
/// Returns `None` if no key is set.
pub fn from_env() -> Option<HttpModelSource> {
    let api_key = std::env::var("MOODLINE_HF_API_KEY").ok()?;
    let base_url = std::env::var("MOODLINE_HF_BASE_URL").ok();
    Some(HttpModelSource::new(api_key, base_url))
}
