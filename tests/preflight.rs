//! Local checks that must run before any network I/O, plus the exact shape of
//! what reaches the transport.

mod support;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use support::{client_with, RecordingTransport, TEST_API_KEY};
use tokio::sync::Notify;
use typecast::transport::TransportError;
use typecast::{
    Age, EmotionPreset, Error, ErrorKind, Gender, HttpRequest, HttpResponse, LanguageCode,
    Output, Prompt, Transport, TtsModel, TtsRequest, VoicesFilter,
};

#[tokio::test]
async fn test_intensity_out_of_range_never_sends() {
    let transport = RecordingTransport::audio();
    let client = client_with(transport.clone());

    let request = TtsRequest::new("tc_1", "Hello", TtsModel::SsfmV30)
        .prompt(Prompt::preset(EmotionPreset::Happy, 2.5));
    let err = client.text_to_speech(&request).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(
        err.context().and_then(|c| c.field_path.as_deref()),
        Some("prompt.emotion_intensity")
    );
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_bad_inputs_never_send() {
    let transport = RecordingTransport::audio();
    let client = client_with(transport.clone());

    let requests = [
        TtsRequest::new("tc_1", "", TtsModel::SsfmV21),
        TtsRequest::new("", "Hello", TtsModel::SsfmV21),
        TtsRequest::new("tc_1", "x".repeat(5001), TtsModel::SsfmV21),
        TtsRequest::new("tc_1", "Hello", TtsModel::SsfmV21).output(Output::new().volume(201)),
        TtsRequest::new("tc_1", "Hello", TtsModel::SsfmV21).output(Output::new().audio_pitch(13)),
        TtsRequest::new("tc_1", "Hello", TtsModel::SsfmV21).output(Output::new().audio_tempo(f64::NAN)),
    ];
    for request in &requests {
        let err = client.text_to_speech(request).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "{:?}", request);
        assert_eq!(err.status(), 0);
    }

    assert_eq!(client.get_voice_v2("").await.unwrap_err().kind(), ErrorKind::Validation);
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_closed_client_never_sends() {
    let transport = RecordingTransport::audio();
    let client = client_with(transport.clone());
    client.close();

    let err = client
        .text_to_speech(&TtsRequest::new("tc_1", "Hello", TtsModel::SsfmV21))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Closed));
    assert_eq!(err.kind(), ErrorKind::Closed);

    let err = client.get_voices_v2(None).await.unwrap_err();
    assert!(matches!(err, Error::Closed));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_synthesis_request_shape() {
    let transport = RecordingTransport::audio();
    let client = client_with(transport.clone());

    let request = TtsRequest::new("tc_1", "Hello", TtsModel::SsfmV30).language(LanguageCode::Kor);
    let audio = client.text_to_speech(&request).await.unwrap();
    assert_eq!(audio.duration, 1.0);
    assert_eq!(transport.calls(), 1);

    let sent = transport.last_request().unwrap();
    assert_eq!(sent.method, reqwest::Method::POST);
    assert_eq!(sent.url.as_str(), "https://api.typecast.ai/v1/text-to-speech");
    assert_eq!(sent.headers.get("x-api-key").unwrap(), TEST_API_KEY);
    assert_eq!(sent.headers.get("content-type").unwrap(), "application/json");

    let body: Value = serde_json::from_slice(&sent.body.unwrap()).unwrap();
    let mut keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["language", "model", "text", "voice_id"]);
    assert_eq!(body["language"], "kor");
}

#[tokio::test]
async fn test_filter_query_shape() {
    let transport = RecordingTransport::new(200, &[], b"[]");
    let client = client_with(transport.clone());

    let filter = VoicesFilter::new()
        .model(TtsModel::SsfmV30)
        .gender(Gender::Female)
        .age(Age::YoungAdult);
    client.get_voices_v2(Some(filter)).await.unwrap();

    let sent = transport.last_request().unwrap();
    assert_eq!(sent.method, reqwest::Method::GET);
    assert_eq!(sent.url.path(), "/v2/voices");
    assert!(sent.body.is_none());

    let pairs: Vec<(String, String)> = sent.url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("model".to_string(), "ssfm-v30".to_string()),
            ("gender".to_string(), "female".to_string()),
            ("age".to_string(), "young_adult".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_unfiltered_listing_has_no_query() {
    let transport = RecordingTransport::new(200, &[], b"[]");
    let client = client_with(transport.clone());

    client.get_voices_v2(None).await.unwrap();
    assert_eq!(transport.last_request().unwrap().url.query(), None);
}

/// Holds every request until released.
struct GatedTransport {
    entered: Notify,
    release: Notify,
}

#[async_trait]
impl Transport for GatedTransport {
    async fn send(&self, _request: HttpRequest) -> typecast::Result<HttpResponse> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(HttpResponse {
            status: 200,
            headers: Default::default(),
            body: bytes::Bytes::from_static(b"RIFF"),
        })
    }
}

#[tokio::test]
async fn test_in_flight_call_survives_close() {
    let transport = Arc::new(GatedTransport {
        entered: Notify::new(),
        release: Notify::new(),
    });
    let client = Arc::new(client_with(transport.clone()));

    let task = {
        let client = client.clone();
        tokio::spawn(async move {
            client
                .text_to_speech(&TtsRequest::new("tc_1", "Hello", TtsModel::SsfmV21))
                .await
        })
    };

    transport.entered.notified().await;
    client.close();
    transport.release.notify_one();

    let audio = task.await.unwrap().unwrap();
    assert_eq!(audio.audio_data, b"RIFF");

    let err = client.get_voices_v2(None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Closed);
}

struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn send(&self, _request: HttpRequest) -> typecast::Result<HttpResponse> {
        Err(TransportError::Other("socket reset".into()).into())
    }
}

#[tokio::test]
async fn test_custom_transport_failure_is_network_error() {
    let client = client_with(Arc::new(FailingTransport));
    let err = client.get_voice_v2("tc_1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(err.status(), 0);
    assert!(!err.is_timeout());
    assert!(err.to_string().contains("socket reset"));
}
