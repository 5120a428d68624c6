//! Speech synthesis.

use super::core::TypecastClient;
use super::{decode, validation};
use crate::types::{TtsRequest, TtsResponse};
use crate::{Error, ErrorContext, Result};
use reqwest::Method;
use tracing::debug;

impl TypecastClient {
    /// Synthesize `request` into audio.
    ///
    /// Validation runs first; an invalid request fails without touching the
    /// network. On success the returned audio bytes are owned by the caller.
    ///
    /// ```rust,no_run
    /// use typecast::{TypecastClient, TtsModel, TtsRequest};
    ///
    /// # async fn run() -> typecast::Result<()> {
    /// let client = TypecastClient::from_env()?;
    /// let request = TtsRequest::new("tc_60e5426de8b95f1d3000d7b5", "Hello, world!", TtsModel::SsfmV30);
    /// let audio = client.text_to_speech(&request).await?;
    /// println!("{} bytes, {:.2}s", audio.audio_data.len(), audio.duration);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn text_to_speech(&self, request: &TtsRequest) -> Result<TtsResponse> {
        validation::validate_tts_request(request, &self.limits)?;

        let body = serde_json::to_vec(request).map_err(|e| {
            Error::validation_with_context(
                format!("request could not be serialized: {}", e),
                ErrorContext::new().with_source("serializer"),
            )
        })?;
        debug!(
            voice_id = %request.voice_id,
            model = %request.model,
            chars = request.text.chars().count(),
            "text_to_speech"
        );

        let url = self.endpoint(&["v1", "text-to-speech"], &[])?;
        let response = self.execute(Method::POST, url, Some(body)).await?;
        decode::decode_audio(response)
    }
}
