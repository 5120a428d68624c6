//! Response decoding.
//!
//! Non-2xx responses are routed to [`Error::from_response`] before any decoding
//! is attempted; error bodies are JSON text even on the audio endpoint.

use crate::error_code::ErrorKind;
use crate::transport::HttpResponse;
use crate::types::{AudioFormat, TtsResponse};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub const AUDIO_DURATION_HEADER: &str = "x-audio-duration";

/// Turn a non-2xx response into its mapped error.
pub fn error_for_status(response: HttpResponse) -> Result<HttpResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        let err = Error::from_response(response.status, &response.body);
        debug!(status = response.status, kind = %err.kind(), "API error response");
        Err(err)
    }
}

/// Parse `x-audio-duration`. Absent, unparsable, negative or non-finite values give 0.0.
pub fn parse_duration(value: Option<&str>) -> f64 {
    let Some(raw) = value else {
        return 0.0;
    };
    match raw.trim().parse::<f64>() {
        Ok(secs) if secs.is_finite() && secs >= 0.0 => secs,
        _ => {
            warn!(value = raw, "unparsable {} header, using 0.0", AUDIO_DURATION_HEADER);
            0.0
        }
    }
}

/// Decode a synthesis response: status check, then audio bytes plus the two
/// metadata headers. Header problems never fail the call.
pub fn decode_audio(response: HttpResponse) -> Result<TtsResponse> {
    let response = error_for_status(response)?;
    let duration = parse_duration(response.header(AUDIO_DURATION_HEADER));
    let format = AudioFormat::from_content_type(response.header("content-type"));
    Ok(TtsResponse {
        audio_data: response.body.to_vec(),
        duration,
        format,
    })
}

/// Decode a JSON body. A parse failure on a 2xx is a decode error, not an API error.
pub fn decode_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T> {
    let response = error_for_status(response)?;
    serde_json::from_slice(&response.body).map_err(|e| {
        Error::decode(
            format!("unexpected response body: {}", e),
            response.status,
            &response.body,
            Some(e),
        )
    })
}

/// Decode a V1 single-voice lookup, which arrives as an array.
///
/// An empty array means the voice does not exist even though the status was 2xx.
pub fn decode_first<T: DeserializeOwned>(response: HttpResponse, voice_id: &str) -> Result<T> {
    let body = response.body.clone();
    let items: Vec<T> = decode_json(response)?;
    items.into_iter().next().ok_or_else(|| {
        Error::api(
            ErrorKind::NotFound,
            404,
            format!("Voice not found: {}", voice_id),
            Some(String::from_utf8_lossy(&body).into_owned()),
        )
    })
}
