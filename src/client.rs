//! Typecast API client.
//!
//! The client type lives in `core`; each endpoint family adds its methods from
//! its own submodule (`tts`, `voices`).

pub mod builder;
pub mod core;
pub mod decode;
mod tts;
pub mod validation;
mod voices;

pub use builder::TypecastClientBuilder;
pub use core::{TypecastClient, API_KEY_HEADER};
pub use validation::{RequestLimits, DEFAULT_MAX_TEXT_LENGTH, MAX_CONTEXT_TEXT_LENGTH};
