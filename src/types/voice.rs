//! Voice listing types for the V1 (deprecated) and V2 endpoints.
//!
//! V1 reports one model per entry; V2 groups every supported model with its
//! own emotion list.

use super::model::TtsModel;
use serde::{Deserialize, Serialize};

/// Voice entry returned by `/v1/voices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceV1 {
    pub voice_id: String,
    pub voice_name: String,
    pub model: String,
    #[serde(default)]
    pub emotions: Vec<String>,
}

/// One model supported by a V2 voice, with the emotions it offers there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub version: TtsModel,
    #[serde(default)]
    pub emotions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Age {
    Child,
    Teenager,
    YoungAdult,
    MiddleAge,
    Elder,
}

impl Age {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Child => "child",
            Self::Teenager => "teenager",
            Self::YoungAdult => "young_adult",
            Self::MiddleAge => "middle_age",
            Self::Elder => "elder",
        }
    }
}

/// Use-case category accepted by the V2 filter.
///
/// Voices themselves report use cases as free-form strings, so new server-side
/// categories never break decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UseCase {
    Announcer,
    Anime,
    Audiobook,
    Conversational,
    Documentary,
    #[serde(rename = "E-learning")]
    ELearning,
    Rapper,
    Game,
    #[serde(rename = "Tiktok/Reels")]
    TikTokReels,
    News,
    Podcast,
    Voicemail,
    Ads,
}

impl UseCase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Announcer => "Announcer",
            Self::Anime => "Anime",
            Self::Audiobook => "Audiobook",
            Self::Conversational => "Conversational",
            Self::Documentary => "Documentary",
            Self::ELearning => "E-learning",
            Self::Rapper => "Rapper",
            Self::Game => "Game",
            Self::TikTokReels => "Tiktok/Reels",
            Self::News => "News",
            Self::Podcast => "Podcast",
            Self::Voicemail => "Voicemail",
            Self::Ads => "Ads",
        }
    }
}

/// Voice entry returned by `/v2/voices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceV2 {
    pub voice_id: String,
    pub voice_name: String,
    pub models: Vec<ModelInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Age>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_cases: Option<Vec<String>>,
}

impl VoiceV2 {
    pub fn supports(&self, model: TtsModel) -> bool {
        self.models.iter().any(|m| m.version == model)
    }

    /// Emotions available for `model`, if the voice supports it.
    pub fn emotions_for(&self, model: TtsModel) -> Option<&[String]> {
        self.models
            .iter()
            .find(|m| m.version == model)
            .map(|m| m.emotions.as_slice())
    }
}

/// Server-side filter for `/v2/voices`. Constraints combine with AND; the client
/// only builds the query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoicesFilter {
    pub model: Option<TtsModel>,
    pub gender: Option<Gender>,
    pub age: Option<Age>,
    pub use_cases: Option<UseCase>,
}

impl VoicesFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: TtsModel) -> Self {
        self.model = Some(model);
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn age(mut self, age: Age) -> Self {
        self.age = Some(age);
        self
    }

    pub fn use_cases(mut self, use_case: UseCase) -> Self {
        self.use_cases = Some(use_case);
        self
    }

    /// Query parameters for the set constraints, unset ones left out.
    pub fn query_pairs(&self) -> Vec<(&'static str, &'static str)> {
        let mut pairs = Vec::new();
        if let Some(model) = self.model {
            pairs.push(("model", model.as_str()));
        }
        if let Some(gender) = self.gender {
            pairs.push(("gender", gender.as_str()));
        }
        if let Some(age) = self.age {
            pairs.push(("age", age.as_str()));
        }
        if let Some(use_case) = self.use_cases {
            pairs.push(("use_cases", use_case.as_str()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_query_pairs() {
        let filter = VoicesFilter::new()
            .model(TtsModel::SsfmV30)
            .gender(Gender::Female)
            .age(Age::YoungAdult);
        let pairs = filter.query_pairs();
        assert!(pairs.contains(&("model", "ssfm-v30")));
        assert!(pairs.contains(&("gender", "female")));
        assert!(pairs.contains(&("age", "young_adult")));
        assert!(pairs.iter().all(|(k, _)| *k != "use_cases"));
        assert!(VoicesFilter::default().query_pairs().is_empty());
    }

    #[test]
    fn test_wire_names_match_serde() {
        for age in [Age::Child, Age::Teenager, Age::YoungAdult, Age::MiddleAge, Age::Elder] {
            assert_eq!(serde_json::to_value(age).unwrap(), age.as_str());
        }
        for use_case in [UseCase::ELearning, UseCase::TikTokReels, UseCase::Ads] {
            assert_eq!(serde_json::to_value(use_case).unwrap(), use_case.as_str());
        }
    }

    #[test]
    fn test_decode_v2_voice() {
        let voice: VoiceV2 = serde_json::from_str(
            r#"{
                "voice_id": "tc_1",
                "voice_name": "Olivia",
                "models": [
                    {"version": "ssfm-v21", "emotions": ["normal", "happy"]},
                    {"version": "ssfm-v30", "emotions": ["normal", "whisper"]}
                ],
                "gender": "female",
                "age": "young_adult",
                "use_cases": ["Audiobook", "Something New"]
            }"#,
        )
        .unwrap();
        assert!(voice.supports(TtsModel::SsfmV30));
        assert_eq!(
            voice.emotions_for(TtsModel::SsfmV30),
            Some(&["normal".to_string(), "whisper".to_string()][..])
        );
        assert_eq!(voice.age, Some(Age::YoungAdult));
        assert_eq!(voice.use_cases.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_decode_v2_voice_without_optionals() {
        let voice: VoiceV2 =
            serde_json::from_str(r#"{"voice_id":"uc_1","voice_name":"Me","models":[]}"#).unwrap();
        assert!(voice.gender.is_none());
        assert!(voice.age.is_none());
        assert!(voice.use_cases.is_none());
    }
}
