use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value as JsonValue;

use crate::{config::ApiConfig, error::ErrorBody, PodsiteError, Result};

/// Immutable description of one API request, constructed per call.
#[derive(Clone, Debug)]
pub struct RequestSpec {
    pub method: Method,
    /// Endpoint path relative to the configured base URL.
    pub path: String,
    /// Caller-supplied headers, merged over the JSON defaults.
    pub headers: HeaderMap,
    pub body: Option<JsonValue>,
}

impl RequestSpec {
    /// Builds a GET request for `path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_body(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

/// Executes one HTTP round trip per call and classifies its failures.
///
/// The transport never recovers an error; retrying is the client's job.
#[derive(Clone, Debug)]
pub struct Transport {
    http: reqwest::Client,
    config: ApiConfig,
}

impl Transport {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// One request with the configured timeout, returning the parsed JSON
    /// body.
    ///
    /// A non-2xx status is not a transport failure: the body is best-effort
    /// decoded into [`ErrorBody`] (empty when unparsable) and reported as
    /// [`PodsiteError::Http`]. A 2xx body that is not valid JSON reports
    /// [`PodsiteError::Decode`].
    pub async fn send(&self, spec: &RequestSpec) -> Result<JsonValue> {
        let timeout = self.config.timeout;
        let response = self.execute(spec, timeout).await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| classify(err, timeout))?;

        if !status.is_success() {
            let body = serde_json::from_str::<ErrorBody>(&body).unwrap_or_default();
            return Err(PodsiteError::Http {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body)
            .map_err(|err| PodsiteError::Decode(format!("invalid response JSON: {err}")))
    }

    /// One request with an explicit timeout, stopping at the status line.
    ///
    /// The health probe uses this to check liveness without touching the
    /// body. The response timer and the in-flight request are scoped
    /// together by reqwest's per-request timeout, released on whichever
    /// side finishes first.
    pub(crate) async fn execute(
        &self,
        spec: &RequestSpec,
        timeout: Duration,
    ) -> Result<reqwest::Response> {
        let url = self.config.endpoint_url(&spec.path);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &spec.headers {
            headers.insert(name.clone(), value.clone());
        }

        let mut request = self
            .http
            .request(spec.method.clone(), url)
            .headers(headers)
            .timeout(timeout);
        if let Some(body) = &spec.body {
            request = request.json(body);
        }

        request.send().await.map_err(|err| classify(err, timeout))
    }
}

/// Maps a reqwest failure onto the crate taxonomy: deadline expiry is
/// reported as Timeout, distinguishable from caller-side cancellation and
/// other connection failures, which report Network.
fn classify(err: reqwest::Error, timeout: Duration) -> PodsiteError {
    if err.is_timeout() {
        PodsiteError::Timeout {
            timeout_ms: timeout.as_millis() as u64,
        }
    } else {
        PodsiteError::Network(err)
    }
}
