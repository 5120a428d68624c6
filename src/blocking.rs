//! Blocking facade over the async client.
//!
//! Each call drives exactly one future to completion on a private
//! current-thread runtime. Do not call these methods from inside an async
//! context; use [`crate::TypecastClient`] there instead.

use crate::client::TypecastClientBuilder;
use crate::types::{TtsModel, TtsRequest, TtsResponse, VoiceV1, VoiceV2, VoicesFilter};
use crate::{Error, Result};
use tokio::runtime::{Builder, Runtime};

pub struct TypecastClient {
    inner: crate::TypecastClient,
    runtime: Runtime,
}

impl TypecastClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_builder(TypecastClientBuilder::new().api_key(api_key))
    }

    pub fn from_env() -> Result<Self> {
        Self::from_builder(TypecastClientBuilder::new())
    }

    pub fn from_builder(builder: TypecastClientBuilder) -> Result<Self> {
        let inner = builder.build()?;
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::configuration(format!("Failed to start runtime: {}", e)))?;
        Ok(Self { inner, runtime })
    }

    /// The async client this facade drives.
    pub fn inner(&self) -> &crate::TypecastClient {
        &self.inner
    }

    pub fn text_to_speech(&self, request: &TtsRequest) -> Result<TtsResponse> {
        self.runtime.block_on(self.inner.text_to_speech(request))
    }

    #[deprecated(note = "use `get_voices_v2` for per-model emotions and filtering")]
    #[allow(deprecated)]
    pub fn get_voices(&self, model: Option<TtsModel>) -> Result<Vec<VoiceV1>> {
        self.runtime.block_on(self.inner.get_voices(model))
    }

    #[deprecated(note = "use `get_voice_v2`")]
    #[allow(deprecated)]
    pub fn get_voice(&self, voice_id: &str, model: Option<TtsModel>) -> Result<VoiceV1> {
        self.runtime.block_on(self.inner.get_voice(voice_id, model))
    }

    pub fn get_voices_v2(&self, filter: Option<VoicesFilter>) -> Result<Vec<VoiceV2>> {
        self.runtime.block_on(self.inner.get_voices_v2(filter))
    }

    pub fn get_voice_v2(&self, voice_id: &str) -> Result<VoiceV2> {
        self.runtime.block_on(self.inner.get_voice_v2(voice_id))
    }

    /// See [`crate::TypecastClient::close`].
    pub fn close(&self) {
        self.inner.close();
    }
}

impl std::fmt::Debug for TypecastClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("blocking::TypecastClient")
            .field(&self.inner)
            .finish()
    }
}
