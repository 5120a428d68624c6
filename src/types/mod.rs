//! Request and response models for the Typecast API.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TtsRequest`] | Synthesis input; serializes directly to the wire body |
//! | [`Prompt`] | Emotion control, one of Basic / Preset / Smart |
//! | [`Output`] | Volume, pitch, tempo and container |
//! | [`TtsResponse`] | Audio bytes with duration and format |
//! | [`VoiceV1`] / [`VoiceV2`] | Voice listings (V1 is deprecated) |
//! | [`VoicesFilter`] | Query constraints for V2 listings |
//!
//! All of these are plain values built once per call; nothing here holds
//! connections or shared state.

pub mod model;
pub mod tts;
pub mod voice;

pub use model::{AudioFormat, EmotionPreset, LanguageCode, TtsModel};
pub use tts::{EmotionPrompt, Output, Prompt, SmartPrompt, TtsRequest, TtsResponse};
pub use voice::{Age, Gender, ModelInfo, UseCase, VoiceV1, VoiceV2, VoicesFilter};
