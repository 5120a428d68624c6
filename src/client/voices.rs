//! Voice discovery, V1 (deprecated) and V2.
//!
//! The two generations share only the transport and the error mapping. V1
//! answers single-voice lookups with an array, and an empty array is how it
//! says "not found"; that quirk is preserved.

use super::core::TypecastClient;
use super::decode;
use crate::types::{TtsModel, VoiceV1, VoiceV2, VoicesFilter};
use crate::{Error, ErrorContext, Result};
use reqwest::Method;

fn require_voice_id(voice_id: &str) -> Result<()> {
    if voice_id.trim().is_empty() {
        return Err(Error::validation_with_context(
            "voice_id must not be empty",
            ErrorContext::new()
                .with_field_path("voice_id")
                .with_source("validation"),
        ));
    }
    Ok(())
}

fn model_query(model: Option<TtsModel>) -> Vec<(&'static str, &'static str)> {
    model.map(|m| vec![("model", m.as_str())]).unwrap_or_default()
}

impl TypecastClient {
    /// `GET /v1/voices[?model=]`
    #[deprecated(note = "use `get_voices_v2` for per-model emotions and filtering")]
    pub async fn get_voices(&self, model: Option<TtsModel>) -> Result<Vec<VoiceV1>> {
        let url = self.endpoint(&["v1", "voices"], &model_query(model))?;
        let response = self.execute(Method::GET, url, None).await?;
        decode::decode_json(response)
    }

    /// `GET /v1/voices/{voice_id}[?model=]`, unwrapped to the first entry.
    ///
    /// An empty array yields a `NotFound` error with status 404.
    #[deprecated(note = "use `get_voice_v2`")]
    pub async fn get_voice(&self, voice_id: &str, model: Option<TtsModel>) -> Result<VoiceV1> {
        require_voice_id(voice_id)?;
        let url = self.endpoint(&["v1", "voices", voice_id], &model_query(model))?;
        let response = self.execute(Method::GET, url, None).await?;
        decode::decode_first(response, voice_id)
    }

    /// `GET /v2/voices[?model=&gender=&age=&use_cases=]`
    ///
    /// Filtering happens on the server; the result is returned as received.
    pub async fn get_voices_v2(&self, filter: Option<VoicesFilter>) -> Result<Vec<VoiceV2>> {
        let query = filter.map(|f| f.query_pairs()).unwrap_or_default();
        let url = self.endpoint(&["v2", "voices"], &query)?;
        let response = self.execute(Method::GET, url, None).await?;
        decode::decode_json(response)
    }

    /// `GET /v2/voices/{voice_id}`
    pub async fn get_voice_v2(&self, voice_id: &str) -> Result<VoiceV2> {
        require_voice_id(voice_id)?;
        let url = self.endpoint(&["v2", "voices", voice_id], &[])?;
        let response = self.execute(Method::GET, url, None).await?;
        decode::decode_json(response)
    }
}
