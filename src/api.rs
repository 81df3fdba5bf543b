//! Typed client for the storefront's suggestion endpoint.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::error::{js_message, WebstoreError};

/// `<endpoint>?q=<query>` with the query percent-encoded.
pub fn suggestion_url(endpoint: &str, query: &str) -> String {
    let sep = if endpoint.contains('?') { '&' } else { '?' };
    format!("{}{}q={}", endpoint, sep, urlencoding::encode(query))
}

/// Decode a response body that must be a JSON array of strings.
pub fn parse_suggestions(body: &str) -> Result<Vec<String>, WebstoreError> {
    serde_json::from_str(body).map_err(|e| WebstoreError::Decode(e.to_string()))
}

pub async fn fetch_suggestions(url: &str) -> Result<Vec<String>, WebstoreError> {
    let window =
        web_sys::window().ok_or_else(|| WebstoreError::Dom("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| WebstoreError::Network(js_message(&e)))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| WebstoreError::Network(js_message(&e)))?;

    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| WebstoreError::Network(js_message(&e)))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| WebstoreError::Network("fetch did not return a Response".to_string()))?;

    if !response.ok() {
        return Err(WebstoreError::Status(response.status()));
    }

    let text = response
        .text()
        .map_err(|e| WebstoreError::Decode(js_message(&e)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| WebstoreError::Decode(js_message(&e)))?
        .as_string()
        .ok_or_else(|| WebstoreError::Decode("response body is not text".to_string()))?;

    parse_suggestions(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encodes_query() {
        assert_eq!(
            suggestion_url("/api/search-suggestions", "red shoes & co"),
            "/api/search-suggestions?q=red%20shoes%20%26%20co"
        );
    }

    #[test]
    fn test_url_appends_to_existing_query_string() {
        assert_eq!(
            suggestion_url("/api/search-suggestions?limit=5", "hat"),
            "/api/search-suggestions?limit=5&q=hat"
        );
    }

    #[test]
    fn test_url_encodes_non_ascii() {
        assert_eq!(suggestion_url("/s", "café"), "/s?q=caf%C3%A9");
    }

    #[test]
    fn test_parse_keeps_order() {
        assert_eq!(
            parse_suggestions(r#"["foo","bar"]"#).unwrap(),
            vec!["foo".to_string(), "bar".to_string()]
        );
        assert!(parse_suggestions("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_string_arrays() {
        assert!(matches!(parse_suggestions("<html>"), Err(WebstoreError::Decode(_))));
        assert!(matches!(parse_suggestions(r#"{"q":"x"}"#), Err(WebstoreError::Decode(_))));
        assert!(matches!(parse_suggestions("[1,2]"), Err(WebstoreError::Decode(_))));
    }
}
