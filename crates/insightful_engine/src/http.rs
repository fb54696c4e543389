use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{EngineConfig, FailureKind, RemoteError};

pub(crate) fn build_client(config: &EngineConfig) -> Result<reqwest::Client, RemoteError> {
    reqwest::Client::builder()
        .connect_timeout(config.connect_timeout())
        .timeout(config.request_timeout())
        .build()
        .map_err(|err| RemoteError::new(FailureKind::Network, err.to_string()))
}

pub(crate) fn parse_endpoint(raw: &str) -> Result<Url, RemoteError> {
    let url = Url::parse(raw)
        .map_err(|err| RemoteError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(RemoteError::new(
            FailureKind::InvalidEndpoint,
            format!("unsupported scheme {other}"),
        )),
    }
}

/// POSTs `body` as JSON and decodes the JSON answer.
pub(crate) async fn post_json<B, R>(
    client: &reqwest::Client,
    endpoint: &Url,
    body: &B,
) -> Result<R, RemoteError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = client
        .post(endpoint.clone())
        .json(body)
        .send()
        .await
        .map_err(map_reqwest_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(RemoteError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ));
    }

    let bytes = response.bytes().await.map_err(map_reqwest_error)?;
    serde_json::from_slice(&bytes)
        .map_err(|err| RemoteError::new(FailureKind::Malformed, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> RemoteError {
    if err.is_timeout() {
        return RemoteError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return RemoteError::new(FailureKind::Malformed, err.to_string());
    }
    RemoteError::new(FailureKind::Network, err.to_string())
}
