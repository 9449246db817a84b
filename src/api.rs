use serde::Deserialize;

use crate::error::HasteError;
use crate::transport::Transport;

// Unknown fields are rejected so a server speaking a different dialect fails
// loudly instead of returning a half-parsed key.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CreateHasteResponse {
    key: String,
}

/// Retrieves a haste from the server and returns its content as text.
pub fn get_haste(transport: &dyn Transport, server: &str, key: &str) -> Result<String, HasteError> {
    let response = transport.get(&format!("{}/raw/{}", server, key))?;

    if response.status == 404 {
        return Err(HasteError::NotFound {
            key: key.to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&response.body).into_owned())
}

/// Stores content on the server and returns the assigned key.
pub fn create_haste(
    transport: &dyn Transport,
    server: &str,
    content: Vec<u8>,
) -> Result<String, HasteError> {
    let response = transport.post(&format!("{}/documents", server), "text/plain", content)?;

    let haste: CreateHasteResponse =
        serde_json::from_slice(&response.body).map_err(|e| HasteError::MalformedResponse {
            reason: e.to_string(),
        })?;

    Ok(haste.key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::HttpResponse;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct SeenRequest {
        method: &'static str,
        url: String,
        content_type: Option<String>,
        body: Vec<u8>,
    }

    /// Transport double that answers every request with one canned response
    /// and records what it was asked.
    struct CannedTransport {
        status: u16,
        body: Vec<u8>,
        fail: bool,
        seen: RefCell<Vec<SeenRequest>>,
    }

    impl CannedTransport {
        fn respond_with(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.as_bytes().to_vec(),
                fail: false,
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            let mut transport = Self::respond_with(200, "");
            transport.fail = true;
            transport
        }

        fn respond(&self, url: &str) -> Result<HttpResponse, HasteError> {
            if self.fail {
                return Err(HasteError::Transport {
                    url: url.to_string(),
                    reason: "connection refused".to_string(),
                });
            }

            Ok(HttpResponse {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    impl Transport for CannedTransport {
        fn get(&self, url: &str) -> Result<HttpResponse, HasteError> {
            self.seen.borrow_mut().push(SeenRequest {
                method: "GET",
                url: url.to_string(),
                content_type: None,
                body: Vec::new(),
            });

            self.respond(url)
        }

        fn post(
            &self,
            url: &str,
            content_type: &str,
            body: Vec<u8>,
        ) -> Result<HttpResponse, HasteError> {
            self.seen.borrow_mut().push(SeenRequest {
                method: "POST",
                url: url.to_string(),
                content_type: Some(content_type.to_string()),
                body,
            });

            self.respond(url)
        }
    }

    /// Minimal stand-in for an actual haste server: stores documents on POST
    /// and serves them back on GET.
    #[derive(Default)]
    struct InMemoryPasteService {
        documents: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl Transport for InMemoryPasteService {
        fn get(&self, url: &str) -> Result<HttpResponse, HasteError> {
            let key = url.rsplit('/').next().unwrap_or_default();

            match self.documents.borrow().get(key) {
                Some(body) => Ok(HttpResponse {
                    status: 200,
                    body: body.clone(),
                }),
                None => Ok(HttpResponse {
                    status: 404,
                    body: Vec::new(),
                }),
            }
        }

        fn post(
            &self,
            _url: &str,
            _content_type: &str,
            body: Vec<u8>,
        ) -> Result<HttpResponse, HasteError> {
            self.documents.borrow_mut().insert("abcdef".to_string(), body);

            Ok(HttpResponse {
                status: 200,
                body: br#"{"key":"abcdef"}"#.to_vec(),
            })
        }
    }

    #[test]
    fn get_requests_the_raw_document() {
        let transport = CannedTransport::respond_with(200, "Test haste");

        let haste = get_haste(&transport, "https://hastebin.local", "abcdef").unwrap();

        assert_eq!(haste, "Test haste");
        let seen = transport.seen.borrow();
        assert_eq!(seen[0].method, "GET");
        assert_eq!(seen[0].url, "https://hastebin.local/raw/abcdef");
    }

    #[test]
    fn get_maps_404_to_not_found() {
        let transport = CannedTransport::respond_with(404, "");

        let error = get_haste(&transport, "https://hastebin.local", "abcdef").unwrap_err();

        assert_eq!(error.to_string(), "No document found: abcdef");
    }

    #[test]
    fn get_propagates_transport_failures() {
        let transport = CannedTransport::failing();

        let error = get_haste(&transport, "https://hastebin.local", "abcdef").unwrap_err();

        assert!(matches!(error, HasteError::Transport { .. }));
    }

    #[test]
    fn create_posts_the_content_as_plain_text() {
        let transport = CannedTransport::respond_with(200, r#"{"key":"abcdef"}"#);

        let key = create_haste(
            &transport,
            "https://hastebin.local",
            b"Test haste".to_vec(),
        )
        .unwrap();

        assert_eq!(key, "abcdef");
        let seen = transport.seen.borrow();
        assert_eq!(seen[0].method, "POST");
        assert_eq!(seen[0].url, "https://hastebin.local/documents");
        assert_eq!(seen[0].content_type.as_deref(), Some("text/plain"));
        assert_eq!(seen[0].body, b"Test haste");
    }

    #[test]
    fn create_accepts_empty_content() {
        let transport = CannedTransport::respond_with(200, r#"{"key":"abcdef"}"#);

        let key = create_haste(&transport, "https://hastebin.local", Vec::new()).unwrap();

        assert_eq!(key, "abcdef");
    }

    #[test]
    fn create_rejects_invalid_json() {
        let transport = CannedTransport::respond_with(200, "{invalid: json}");

        let error = create_haste(&transport, "https://hastebin.local", Vec::new()).unwrap_err();

        assert!(matches!(error, HasteError::MalformedResponse { .. }));
    }

    #[test]
    fn create_rejects_unknown_response_fields() {
        let transport = CannedTransport::respond_with(
            200,
            r#"{"key":"abcdef","url":"https://hastebin.local/abcdef"}"#,
        );

        let error = create_haste(&transport, "https://hastebin.local", Vec::new()).unwrap_err();

        assert!(matches!(error, HasteError::MalformedResponse { .. }));
    }

    #[test]
    fn stored_hastes_round_trip_byte_identical() {
        let service = InMemoryPasteService::default();
        let content = "This is a test.\n🙃";

        let key = create_haste(&service, "https://hastebin.local", content.as_bytes().to_vec())
            .unwrap();
        let haste = get_haste(&service, "https://hastebin.local", &key).unwrap();

        assert_eq!(haste, content);
    }

    #[test]
    fn retrieving_a_missing_key_is_not_found() {
        let service = InMemoryPasteService::default();

        let error = get_haste(&service, "https://hastebin.local", "missing").unwrap_err();

        assert!(matches!(error, HasteError::NotFound { .. }));
    }
}
