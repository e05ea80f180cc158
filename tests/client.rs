#![allow(clippy::unwrap_used)]
//! Library-level tests for the translation client.

mod common;

use common::{MockServer, refused_url};
use trad::credential::ApiKey;
use trad::translation::{TranslationClient, TranslationRequest};

fn client(endpoint: String) -> TranslationClient {
    TranslationClient::new(endpoint, ApiKey::parse("lib-key").unwrap())
}

#[tokio::test]
async fn test_translate_returns_first_text() {
    let server = MockServer::respond(
        200,
        r#"{"translations":[{"detected_source_language":"EN","text":"Hola"},{"text":"Buenas"}]}"#,
    );

    let text = client(server.url.clone())
        .translate(&TranslationRequest::new("hello", Some("es")))
        .await
        .unwrap();

    assert_eq!(text, "Hola");
    let request = server.request();
    assert_eq!(request.header("authorization"), Some("DeepL-Auth-Key lib-key"));
    assert_eq!(request.json()["target_lang"], "ES");
}

#[tokio::test]
async fn test_translate_connection_refused() {
    let err = client(refused_url())
        .translate(&TranslationRequest::new("hello", None))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Failed to connect to API endpoint"));
}

#[tokio::test]
async fn test_translate_error_status() {
    let server = MockServer::respond(456, r#"{"message":"Quota exceeded"}"#);

    let err = client(server.url.clone())
        .translate(&TranslationRequest::new("hello", None))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("456"));
    assert!(err.to_string().contains("Quota exceeded"));
    server.request();
}
