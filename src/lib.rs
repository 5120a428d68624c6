//! # typecast
//!
//! Rust client for the Typecast Text-to-Speech API.
//!
//! ## Overview
//!
//! The crate is a single-layer client: every public call validates its input,
//! sends at most one HTTP request and returns a typed result or a typed error.
//! There is no retry, caching or streaming layer.
//!
//! - **Synthesis**: [`TypecastClient::text_to_speech`] turns a [`TtsRequest`] into audio bytes
//! - **Voices**: V2 listing with server-side filters, plus the deprecated V1 endpoints
//! - **Errors**: one [`Error`] type with an [`ErrorKind`] discriminant, HTTP status and raw body
//! - **Configuration**: explicit values > `TYPECAST_API_KEY` / `TYPECAST_API_HOST` > defaults
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use typecast::{EmotionPreset, Prompt, TtsModel, TtsRequest, TypecastClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TypecastClient::from_env()?;
//!
//!     let request = TtsRequest::new("tc_60e5426de8b95f1d3000d7b5", "Hello, world!", TtsModel::SsfmV30)
//!         .prompt(Prompt::preset(EmotionPreset::Happy, 1.2));
//!     let audio = client.text_to_speech(&request).await?;
//!
//!     std::fs::write(format!("out.{}", audio.format.extension()), &audio.audio_data)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Async client, builder, validation and response decoding |
//! | [`blocking`] | Synchronous facade |
//! | [`types`] | Request/response models |
//! | [`config`] | API key / host resolution |
//! | [`transport`] | Injectable HTTP transport |
//! | [`error_code`] | Error kinds and status mapping |

pub mod blocking;
pub mod client;
pub mod config;
pub mod error_code;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{TypecastClient, TypecastClientBuilder};
pub use config::{EnvSource, ProcessEnv, DEFAULT_HOST};
pub use error_code::ErrorKind;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Transport};
pub use types::{
    Age, AudioFormat, EmotionPreset, EmotionPrompt, Gender, LanguageCode, ModelInfo, Output,
    Prompt, SmartPrompt, TtsModel, TtsRequest, TtsResponse, UseCase, VoiceV1, VoiceV2,
    VoicesFilter,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
