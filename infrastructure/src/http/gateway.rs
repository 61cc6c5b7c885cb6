//! [`CouncilGateway`] implementation over HTTP.
//!
//! One call is one `POST <endpoint>` with a JSON body `{"prompt": ...}`.
//! Network errors, non-success statuses and undecodable bodies all surface
//! as a [`RequestFailure`].

use async_trait::async_trait;
use council_application::{BehaviorConfig, CouncilGateway, RequestFailure};
use council_domain::{CouncilReply, Prompt};
use serde::Serialize;
use tracing::debug;

/// Request body sent to the council endpoint
#[derive(Debug, Serialize)]
struct ConsultRequest<'a> {
    prompt: &'a str,
}

/// Council gateway backed by a `reqwest::Client`
pub struct HttpCouncilGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCouncilGateway {
    /// Build a gateway posting to `endpoint`
    ///
    /// The optional timeout in `behavior` bounds the whole request,
    /// body included.
    pub fn new(
        endpoint: impl Into<String>,
        behavior: &BehaviorConfig,
    ) -> Result<Self, reqwest::Error> {
        Self::from_builder(endpoint, behavior, reqwest::Client::builder())
    }

    fn from_builder(
        endpoint: impl Into<String>,
        behavior: &BehaviorConfig,
        builder: reqwest::ClientBuilder,
    ) -> Result<Self, reqwest::Error> {
        let mut builder =
            builder.user_agent(concat!("llm-council/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = behavior.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    fn classify(error: reqwest::Error) -> RequestFailure {
        if error.is_timeout() {
            RequestFailure::timeout(error.to_string())
        } else if error.is_decode() {
            RequestFailure::decode(error.to_string())
        } else {
            RequestFailure::network(error.to_string())
        }
    }
}

#[async_trait]
impl CouncilGateway for HttpCouncilGateway {
    async fn consult(&self, prompt: &Prompt) -> Result<CouncilReply, RequestFailure> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ConsultRequest {
                prompt: prompt.content(),
            })
            .send()
            .await
            .map_err(Self::classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestFailure::status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
            ));
        }

        let body = response.bytes().await.map_err(Self::classify)?;
        debug!("Council reply body: {} bytes", body.len());

        serde_json::from_slice(&body).map_err(|e| RequestFailure::decode(e.to_string()))
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_application::FailureKind;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Read one HTTP/1.1 request (headers plus Content-Length body)
    async fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        line.to_ascii_lowercase()
                            .strip_prefix("content-length:")
                            .map(|v| v.trim().parse::<usize>().unwrap())
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8(buf).unwrap()
    }

    /// Serve exactly one canned response; the handle yields the raw request
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
            request
        });
        (format!("http://{}/ask-council", addr), handle)
    }

    // Loopback servers must not be routed through an ambient HTTP proxy
    fn local_gateway(url: String, behavior: &BehaviorConfig) -> HttpCouncilGateway {
        HttpCouncilGateway::from_builder(url, behavior, reqwest::Client::builder().no_proxy())
            .unwrap()
    }

    fn prompt(text: &str) -> Prompt {
        Prompt::try_new(text).unwrap()
    }

    #[tokio::test]
    async fn test_posts_json_prompt_and_decodes_reply() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"individual_responses":[{"model":"A","answer":"x"}],"council_verdict":"V"}"#,
        )
        .await;
        let gateway = local_gateway(url, &BehaviorConfig::default());

        let reply = gateway.consult(&prompt("Is Pluto a planet?")).await.unwrap();

        assert_eq!(reply.individual_responses.len(), 1);
        assert_eq!(reply.individual_responses[0].model, "A");
        assert_eq!(reply.individual_responses[0].answer, "x");
        assert_eq!(reply.council_verdict.as_str(), "V");

        let request = server.await.unwrap();
        let lower = request.to_ascii_lowercase();
        assert!(request.starts_with("POST /ask-council HTTP/1.1"));
        assert!(lower.contains("content-type: application/json"));
        assert!(request.ends_with(r#"{"prompt":"Is Pluto a planet?"}"#));
    }

    #[tokio::test]
    async fn test_error_status_is_request_failure() {
        let (url, server) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#).await;
        let gateway = local_gateway(url, &BehaviorConfig::default());

        let err = gateway.consult(&prompt("q")).await.unwrap_err();

        assert_eq!(err.kind, FailureKind::Status(500));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_non_json_body_is_request_failure() {
        let (url, server) = serve_once("200 OK", "<html>gateway</html>").await;
        let gateway = local_gateway(url, &BehaviorConfig::default());

        let err = gateway.consult(&prompt("q")).await.unwrap_err();

        assert_eq!(err.kind, FailureKind::Decode);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_request_failure() {
        // Grab a free port, then close it so nothing is listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = local_gateway(
            format!("http://{}/ask-council", addr),
            &BehaviorConfig::default(),
        );

        let err = gateway.consult(&prompt("q")).await.unwrap_err();
        assert_eq!(err.kind, FailureKind::Network);
    }

    #[tokio::test]
    async fn test_timeout_is_request_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(stream);
        });

        let behavior = BehaviorConfig {
            timeout: Some(Duration::from_millis(200)),
        };
        let gateway = local_gateway(format!("http://{}/ask-council", addr), &behavior);

        let err = gateway.consult(&prompt("q")).await.unwrap_err();
        assert_eq!(err.kind, FailureKind::Timeout);
        server.abort();
    }

    #[test]
    fn test_endpoint_is_reported() {
        let gateway =
            HttpCouncilGateway::new("http://127.0.0.1:8000/ask-council", &BehaviorConfig::default())
                .unwrap();
        assert_eq!(gateway.endpoint(), "http://127.0.0.1:8000/ask-council");
    }
}
