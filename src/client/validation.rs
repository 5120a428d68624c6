//! Pre-flight request validation.
//!
//! Out-of-bounds fields fail here with a validation error so the request never
//! reaches the network. The server still validates everything and answers 422
//! for anything this layer does not know about.

use crate::types::{EmotionPrompt, Output, Prompt, TtsRequest};
use crate::{Error, ErrorContext, Result};
use std::ops::RangeInclusive;

/// Default upper bound on `text`, in characters.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 5000;

/// Upper bound on each smart-prompt context text, in characters.
pub const MAX_CONTEXT_TEXT_LENGTH: usize = 2000;

pub const EMOTION_INTENSITY_RANGE: RangeInclusive<f64> = 0.0..=2.0;
pub const VOLUME_RANGE: RangeInclusive<i32> = 0..=200;
pub const AUDIO_PITCH_RANGE: RangeInclusive<i32> = -12..=12;
pub const AUDIO_TEMPO_RANGE: RangeInclusive<f64> = 0.5..=2.0;

/// Client-side limits applied before serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLimits {
    pub max_text_length: usize,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }
}

fn invalid(field: &str, msg: String, details: Option<String>) -> Error {
    let mut ctx = ErrorContext::new()
        .with_field_path(field)
        .with_source("validation");
    if let Some(d) = details {
        ctx = ctx.with_details(d);
    }
    Error::validation_with_context(msg, ctx)
}

fn check_text(field: &str, text: &str, max: usize) -> Result<()> {
    let len = text.chars().count();
    if len > max {
        return Err(invalid(
            field,
            format!("{} is {} characters long, maximum is {}", field, len, max),
            None,
        ));
    }
    Ok(())
}

fn check_range<T>(field: &str, value: T, range: &RangeInclusive<T>) -> Result<()>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    // NaN fails `contains`, so it is rejected here as well.
    if !range.contains(&value) {
        return Err(invalid(
            field,
            format!("{} {} is out of range", field, value),
            Some(format!("expected {} to {}", range.start(), range.end())),
        ));
    }
    Ok(())
}

fn check_emotion(field: &str, prompt: &EmotionPrompt) -> Result<()> {
    if let Some(intensity) = prompt.emotion_intensity {
        check_range(
            &format!("{}.emotion_intensity", field),
            intensity,
            &EMOTION_INTENSITY_RANGE,
        )?;
    }
    Ok(())
}

fn check_output(output: &Output) -> Result<()> {
    if let Some(volume) = output.volume {
        check_range("output.volume", volume, &VOLUME_RANGE)?;
    }
    if let Some(pitch) = output.audio_pitch {
        check_range("output.audio_pitch", pitch, &AUDIO_PITCH_RANGE)?;
    }
    if let Some(tempo) = output.audio_tempo {
        check_range("output.audio_tempo", tempo, &AUDIO_TEMPO_RANGE)?;
    }
    Ok(())
}

/// Validate a synthesis request against `limits` and the fixed field bounds.
pub fn validate_tts_request(request: &TtsRequest, limits: &RequestLimits) -> Result<()> {
    if request.text.trim().is_empty() {
        return Err(invalid("text", "text must not be empty".to_string(), None));
    }
    check_text("text", &request.text, limits.max_text_length)?;

    if request.voice_id.trim().is_empty() {
        return Err(invalid(
            "voice_id",
            "voice_id must not be empty".to_string(),
            None,
        ));
    }

    match &request.prompt {
        Some(Prompt::Basic(p)) | Some(Prompt::Preset(p)) => check_emotion("prompt", p)?,
        Some(Prompt::Smart(p)) => {
            if let Some(text) = &p.previous_text {
                check_text("prompt.previous_text", text, MAX_CONTEXT_TEXT_LENGTH)?;
            }
            if let Some(text) = &p.next_text {
                check_text("prompt.next_text", text, MAX_CONTEXT_TEXT_LENGTH)?;
            }
        }
        None => {}
    }

    if let Some(output) = &request.output {
        check_output(output)?;
    }

    Ok(())
}
