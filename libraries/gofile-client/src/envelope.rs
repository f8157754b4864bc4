//! The `{status, data}` envelope wrapping every Gofile response.

use crate::error::{GofileError, Result};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

const STATUS_OK: &str = "ok";

#[derive(Debug, Deserialize)]
struct Envelope {
    status: String,
    #[serde(default)]
    data: Option<Value>,
}

/// Send `request` and unwrap the envelope.
///
/// Returns `data` (if any) when the status is `"ok"`. HTTP failures are
/// reported before the body is parsed.
pub(crate) async fn send(request: RequestBuilder, endpoint: &str) -> Result<Option<Value>> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        warn!(endpoint, status = status.as_u16(), "HTTP request failed");
        return Err(GofileError::HttpStatus {
            status: status.as_u16(),
            message,
        });
    }

    let body = response.text().await?;
    let envelope: Envelope = serde_json::from_str(&body).map_err(|e| {
        GofileError::Parse(format!("Failed to parse {} response: {}", endpoint, e))
    })?;

    if envelope.status != STATUS_OK {
        warn!(endpoint, status = %envelope.status, "Request rejected by server");
        return Err(GofileError::Remote {
            status: envelope.status,
        });
    }

    debug!(endpoint, "Request succeeded");
    Ok(envelope.data)
}

/// Pull a single field out of `data`.
pub(crate) fn field<T: DeserializeOwned>(
    data: Option<Value>,
    name: &str,
    endpoint: &str,
) -> Result<T> {
    let value = data
        .and_then(|mut data| data.get_mut(name).map(Value::take))
        .ok_or_else(|| GofileError::Parse(format!("{} response has no {}", endpoint, name)))?;

    serde_json::from_value(value)
        .map_err(|e| GofileError::Parse(format!("Invalid {} in {} response: {}", name, endpoint, e)))
}
