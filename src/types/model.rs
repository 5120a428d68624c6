//! Models, emotion presets, languages and audio formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// TTS synthesis engine version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TtsModel {
    /// Stable production model (27 languages, four emotion presets).
    #[serde(rename = "ssfm-v21")]
    SsfmV21,
    /// Latest model (37 languages, seven presets, smart prompts).
    #[serde(rename = "ssfm-v30")]
    SsfmV30,
}

impl TtsModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SsfmV21 => "ssfm-v21",
            Self::SsfmV30 => "ssfm-v30",
        }
    }
}

impl fmt::Display for TtsModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TtsModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ssfm-v21" => Ok(Self::SsfmV21),
            "ssfm-v30" => Ok(Self::SsfmV30),
            other => Err(format!("unknown TTS model: {}", other)),
        }
    }
}

/// Emotion preset applied by basic and preset prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionPreset {
    #[default]
    Normal,
    Happy,
    Sad,
    Angry,
    /// ssfm-v30 only
    Whisper,
    /// ssfm-v30 only
    #[serde(rename = "toneup")]
    ToneUp,
    /// ssfm-v30 only
    #[serde(rename = "tonedown")]
    ToneDown,
}

impl EmotionPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Whisper => "whisper",
            Self::ToneUp => "toneup",
            Self::ToneDown => "tonedown",
        }
    }

    pub fn is_supported_by(&self, model: TtsModel) -> bool {
        match model {
            TtsModel::SsfmV30 => true,
            TtsModel::SsfmV21 => matches!(
                self,
                Self::Normal | Self::Happy | Self::Sad | Self::Angry
            ),
        }
    }
}

impl fmt::Display for EmotionPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audio container of the synthesized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// 16-bit mono PCM, 44.1 kHz
    #[default]
    Wav,
    /// 320 kbps MPEG layer III, 44.1 kHz
    Mp3,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mp3",
        }
    }

    /// Map a `content-type` header value to a format.
    ///
    /// `*/mp3` and `*/mpeg` map to `Mp3`; anything else, including a missing or
    /// malformed value, maps to `Wav`.
    pub fn from_content_type(value: Option<&str>) -> Self {
        let subtype = value
            .and_then(|v| v.split(';').next())
            .and_then(|mime| mime.split('/').nth(1))
            .map(|s| s.trim().to_ascii_lowercase());
        match subtype.as_deref() {
            Some("mp3") | Some("mpeg") => Self::Mp3,
            _ => Self::Wav,
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! language_codes {
    ($( $(#[$doc:meta])* $variant:ident => $code:literal, v21: $v21:literal; )+) => {
        /// ISO 639-3 language code accepted by the synthesis endpoint.
        ///
        /// When no language is sent the server detects it from the text.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum LanguageCode {
            $( $(#[$doc])* #[serde(rename = $code)] $variant, )+
        }

        impl LanguageCode {
            /// Every known code, in documentation order.
            pub const ALL: &'static [LanguageCode] = &[ $( LanguageCode::$variant, )+ ];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $code, )+
                }
            }

            /// `ssfm-v30` accepts every code; `ssfm-v21` a 27-code subset.
            pub fn is_supported_by(&self, model: TtsModel) -> bool {
                match model {
                    TtsModel::SsfmV30 => true,
                    TtsModel::SsfmV21 => match self {
                        $( Self::$variant => $v21, )+
                    },
                }
            }
        }

        impl FromStr for LanguageCode {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $( $code => Ok(Self::$variant), )+
                    other => Err(format!("unknown language code: {}", other)),
                }
            }
        }
    };
}

language_codes! {
    /// English
    Eng => "eng", v21: true;
    /// Korean
    Kor => "kor", v21: true;
    /// Spanish
    Spa => "spa", v21: true;
    /// German
    Deu => "deu", v21: true;
    /// French
    Fra => "fra", v21: true;
    /// Italian
    Ita => "ita", v21: true;
    /// Polish
    Pol => "pol", v21: true;
    /// Dutch
    Nld => "nld", v21: true;
    /// Russian
    Rus => "rus", v21: true;
    /// Japanese
    Jpn => "jpn", v21: true;
    /// Greek
    Ell => "ell", v21: true;
    /// Tamil
    Tam => "tam", v21: true;
    /// Tagalog
    Tgl => "tgl", v21: true;
    /// Finnish
    Fin => "fin", v21: true;
    /// Chinese (Mandarin)
    Zho => "zho", v21: true;
    /// Slovak
    Slk => "slk", v21: true;
    /// Arabic
    Ara => "ara", v21: true;
    /// Croatian
    Hrv => "hrv", v21: true;
    /// Ukrainian
    Ukr => "ukr", v21: true;
    /// Indonesian
    Ind => "ind", v21: true;
    /// Danish
    Dan => "dan", v21: true;
    /// Swedish
    Swe => "swe", v21: true;
    /// Malay
    Msa => "msa", v21: true;
    /// Czech
    Ces => "ces", v21: true;
    /// Portuguese
    Por => "por", v21: true;
    /// Bulgarian
    Bul => "bul", v21: true;
    /// Romanian
    Ron => "ron", v21: true;
    /// Bengali
    Ben => "ben", v21: false;
    /// Hindi
    Hin => "hin", v21: false;
    /// Hungarian
    Hun => "hun", v21: false;
    /// Min Nan Chinese
    Nan => "nan", v21: false;
    /// Norwegian
    Nor => "nor", v21: false;
    /// Punjabi
    Pan => "pan", v21: false;
    /// Thai
    Tha => "tha", v21: false;
    /// Turkish
    Tur => "tur", v21: false;
    /// Vietnamese
    Vie => "vie", v21: false;
    /// Cantonese
    Yue => "yue", v21: false;
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
