//! Synthesis request and response types.
//!
//! The request serializes straight to the wire body: unset optional fields are
//! omitted (never `null`), and an `output` block with no fields set is dropped
//! entirely so the server applies its own defaults.

use super::model::{AudioFormat, EmotionPreset, LanguageCode, TtsModel};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Emotion fields shared by the basic and preset prompt shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EmotionPrompt {
    pub emotion_preset: Option<EmotionPreset>,
    /// 0.0 to 2.0, server default 1.0
    pub emotion_intensity: Option<f64>,
}

impl EmotionPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emotion_preset(mut self, preset: EmotionPreset) -> Self {
        self.emotion_preset = Some(preset);
        self
    }

    pub fn emotion_intensity(mut self, intensity: f64) -> Self {
        self.emotion_intensity = Some(intensity);
        self
    }
}

/// Context for smart emotion inference: the text around the synthesized text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmartPrompt {
    pub previous_text: Option<String>,
    pub next_text: Option<String>,
}

impl SmartPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous_text(mut self, text: impl Into<String>) -> Self {
        self.previous_text = Some(text.into());
        self
    }

    pub fn next_text(mut self, text: impl Into<String>) -> Self {
        self.next_text = Some(text.into());
        self
    }
}

/// Emotion control payload. Exactly one shape per request.
///
/// | Variant  | `emotion_type` on the wire | Fields                         |
/// |----------|----------------------------|--------------------------------|
/// | `Basic`  | absent                     | preset, intensity              |
/// | `Preset` | `"preset"`                 | preset, intensity              |
/// | `Smart`  | `"smart"`                  | previous_text, next_text       |
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    /// Works with both models.
    Basic(EmotionPrompt),
    /// Explicit preset control, intended for ssfm-v30.
    Preset(EmotionPrompt),
    /// Context-aware inference, ssfm-v30.
    Smart(SmartPrompt),
}

impl Prompt {
    pub fn basic(preset: EmotionPreset, intensity: f64) -> Self {
        Prompt::Basic(EmotionPrompt::new().emotion_preset(preset).emotion_intensity(intensity))
    }

    pub fn preset(preset: EmotionPreset, intensity: f64) -> Self {
        Prompt::Preset(EmotionPrompt::new().emotion_preset(preset).emotion_intensity(intensity))
    }

    pub fn smart(previous_text: Option<String>, next_text: Option<String>) -> Self {
        Prompt::Smart(SmartPrompt {
            previous_text,
            next_text,
        })
    }

    /// Value of the wire `emotion_type` tag, if the shape has one.
    pub fn emotion_type(&self) -> Option<&'static str> {
        match self {
            Prompt::Basic(_) => None,
            Prompt::Preset(_) => Some("preset"),
            Prompt::Smart(_) => Some("smart"),
        }
    }
}

impl From<SmartPrompt> for Prompt {
    fn from(prompt: SmartPrompt) -> Self {
        Prompt::Smart(prompt)
    }
}

fn write_emotion<M: SerializeMap>(map: &mut M, prompt: &EmotionPrompt) -> Result<(), M::Error> {
    if let Some(preset) = &prompt.emotion_preset {
        map.serialize_entry("emotion_preset", preset)?;
    }
    if let Some(intensity) = &prompt.emotion_intensity {
        map.serialize_entry("emotion_intensity", intensity)?;
    }
    Ok(())
}

impl Serialize for Prompt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(tag) = self.emotion_type() {
            map.serialize_entry("emotion_type", tag)?;
        }
        match self {
            Prompt::Basic(p) | Prompt::Preset(p) => write_emotion(&mut map, p)?,
            Prompt::Smart(p) => {
                if let Some(text) = &p.previous_text {
                    map.serialize_entry("previous_text", text)?;
                }
                if let Some(text) = &p.next_text {
                    map.serialize_entry("next_text", text)?;
                }
            }
        }
        map.end()
    }
}

#[derive(Deserialize)]
struct RawPrompt {
    emotion_type: Option<String>,
    emotion_preset: Option<EmotionPreset>,
    emotion_intensity: Option<f64>,
    previous_text: Option<String>,
    next_text: Option<String>,
}

impl<'de> Deserialize<'de> for Prompt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawPrompt::deserialize(deserializer)?;
        let emotion = EmotionPrompt {
            emotion_preset: raw.emotion_preset,
            emotion_intensity: raw.emotion_intensity,
        };
        let has_context = raw.previous_text.is_some() || raw.next_text.is_some();
        match raw.emotion_type.as_deref() {
            None | Some("preset") if has_context => Err(de::Error::custom(
                "context text requires emotion_type \"smart\"",
            )),
            None => Ok(Prompt::Basic(emotion)),
            Some("preset") => Ok(Prompt::Preset(emotion)),
            Some("smart") => {
                if emotion != EmotionPrompt::default() {
                    return Err(de::Error::custom(
                        "smart prompts cannot carry emotion preset or intensity",
                    ));
                }
                Ok(Prompt::Smart(SmartPrompt {
                    previous_text: raw.previous_text,
                    next_text: raw.next_text,
                }))
            }
            Some(other) => Err(de::Error::unknown_variant(other, &["preset", "smart"])),
        }
    }
}

/// Audio post-processing. Every field is optional and omitted when unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Output {
    /// 0 to 200, server default 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<i32>,
    /// Semitones, -12 to 12, server default 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_pitch: Option<i32>,
    /// 0.5 to 2.0, server default 1.0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_tempo: Option<f64>,
    /// Server default wav
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_format: Option<AudioFormat>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn volume(mut self, volume: i32) -> Self {
        self.volume = Some(volume);
        self
    }

    pub fn audio_pitch(mut self, pitch: i32) -> Self {
        self.audio_pitch = Some(pitch);
        self
    }

    pub fn audio_tempo(mut self, tempo: f64) -> Self {
        self.audio_tempo = Some(tempo);
        self
    }

    pub fn audio_format(mut self, format: AudioFormat) -> Self {
        self.audio_format = Some(format);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.volume.is_none()
            && self.audio_pitch.is_none()
            && self.audio_tempo.is_none()
            && self.audio_format.is_none()
    }
}

fn skip_output(output: &Option<Output>) -> bool {
    output.as_ref().map_or(true, Output::is_empty)
}

/// Input to `text_to_speech`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtsRequest {
    pub text: String,
    /// Opaque voice identifier (`tc_...` platform voice, `uc_...` user voice).
    pub voice_id: String,
    pub model: TtsModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Prompt>,
    #[serde(default, skip_serializing_if = "skip_output")]
    pub output: Option<Output>,
    /// Same seed and parameters reproduce the same audio (server guarantee).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

impl TtsRequest {
    pub fn new(voice_id: impl Into<String>, text: impl Into<String>, model: TtsModel) -> Self {
        Self {
            text: text.into(),
            voice_id: voice_id.into(),
            model,
            language: None,
            prompt: None,
            output: None,
            seed: None,
        }
    }

    pub fn language(mut self, language: LanguageCode) -> Self {
        self.language = Some(language);
        self
    }

    pub fn prompt(mut self, prompt: impl Into<Prompt>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn output(mut self, output: Output) -> Self {
        self.output = Some(output);
        self
    }

    pub fn seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Result of a successful synthesis. The audio bytes belong to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct TtsResponse {
    pub audio_data: Vec<u8>,
    /// Seconds, from `x-audio-duration`; 0.0 when absent or unparsable.
    pub duration: f64,
    /// From `content-type`; `Wav` when unrecognized.
    pub format: AudioFormat,
}
