//! Authenticated form POSTs to cPanel's `json-api/cpanel` endpoint.

use crate::config::Credentials;
use crate::error::Error;
use crate::log_sanitizer::truncate_for_log;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use std::time::Duration;

const API_VERSION: &str = "2";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A single cPanel API v2 call: the `cpanel_jsonapi_module` / `cpanel_jsonapi_func` pair plus
/// the zone it targets, which is also used to label errors.
#[derive(Debug, Clone, Copy)]
pub struct Call<'a> {
    pub module: &'static str,
    pub func: &'static str,
    pub zone: &'a str,
}

#[derive(Clone)]
pub struct Transport {
    client: Client,
    endpoint: String,
    credentials: Credentials,
}

impl Transport {
    /// Build a transport whose every request gives up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if the TLS backend can't be initialised.
    pub fn new(credentials: Credentials, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::HttpClient)?;
        Ok(Self::with_client(client, credentials))
    }

    pub fn with_client(client: Client, credentials: Credentials) -> Self {
        let endpoint = format!(
            "{}/json-api/cpanel",
            credentials.base_url.trim_end_matches('/')
        );
        Transport {
            client,
            endpoint,
            credentials,
        }
    }

    /// POST `call` with `params` and return the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if cPanel can't be reached or the body can't be read, and
    /// [`Error::ApiStatus`] for any status other than 200.
    pub async fn call(&self, call: Call<'_>, params: &[(&str, &str)]) -> Result<Vec<u8>, Error> {
        let mut form: Vec<(&str, &str)> = vec![
            ("cpanel_jsonapi_user", self.credentials.user.as_str()),
            ("cpanel_jsonapi_apiversion", API_VERSION),
            ("cpanel_jsonapi_module", call.module),
            ("cpanel_jsonapi_func", call.func),
        ];
        form.extend_from_slice(params);

        tracing::debug!(
            module = call.module,
            func = call.func,
            zone = call.zone,
            "POST {}",
            self.endpoint
        );

        let transport_err = |source| Error::Transport {
            func: call.func,
            zone: call.zone.to_string(),
            source,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, self.authorization())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .form(&form)
            .send()
            .await
            .map_err(transport_err)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport_err)?;
        let text = String::from_utf8_lossy(&body);
        tracing::debug!(func = call.func, %status, "response: {}", truncate_for_log(&text));

        if status != StatusCode::OK {
            return Err(Error::ApiStatus {
                func: call.func,
                zone: call.zone.to_string(),
                status: status.as_u16(),
                body: text.into_owned(),
            });
        }
        Ok(body.to_vec())
    }

    fn authorization(&self) -> String {
        format!(
            "cpanel {}:{}",
            self.credentials.user, self.credentials.api_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport(server: &MockServer) -> Transport {
        Transport::new(
            Credentials {
                base_url: format!("{}/", server.uri()),
                user: "example".into(),
                api_key: "token".into(),
            },
            Duration::from_secs(5),
        )
        .unwrap()
    }

    const FETCH: Call<'static> = Call {
        module: "ZoneEdit",
        func: "fetchzone",
        zone: "example.com",
    };

    #[tokio::test]
    async fn sends_authenticated_form() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/json-api/cpanel"))
            .and(header("Authorization", "cpanel example:token"))
            .and(header("Content-Type", FORM_CONTENT_TYPE))
            .and(body_string_contains("cpanel_jsonapi_user=example"))
            .and(body_string_contains("cpanel_jsonapi_apiversion=2"))
            .and(body_string_contains("cpanel_jsonapi_module=ZoneEdit"))
            .and(body_string_contains("cpanel_jsonapi_func=fetchzone"))
            .and(body_string_contains("domain=example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let body = transport(&server)
            .call(FETCH, &[("domain", "example.com")])
            .await
            .unwrap();
        assert_eq!(body, b"{}");
    }

    #[tokio::test]
    async fn non_200_is_api_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Access denied"))
            .mount(&server)
            .await;

        let err = transport(&server).call(FETCH, &[]).await.unwrap_err();
        match err {
            Error::ApiStatus {
                func, status, body, ..
            } => {
                assert_eq!(func, "fetchzone");
                assert_eq!(status, 401);
                assert_eq!(body, "Access denied");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn api_status_error_keeps_whole_body() {
        let server = MockServer::start().await;
        let page = format!("<html>{}</html>", "denied ".repeat(100));
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string(page.clone()))
            .mount(&server)
            .await;

        let err = transport(&server).call(FETCH, &[]).await.unwrap_err();
        assert!(matches!(err, Error::ApiStatus { status: 403, ref body, .. } if *body == page));
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        let transport = Transport::new(
            Credentials {
                base_url: "http://127.0.0.1:1".into(),
                user: "example".into(),
                api_key: "token".into(),
            },
            Duration::from_secs(5),
        )
        .unwrap();
        let err = transport.call(FETCH, &[]).await.unwrap_err();
        assert!(matches!(err, Error::Transport { func: "fetchzone", .. }));
    }
}
