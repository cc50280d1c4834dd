//! HTTP implementation of the `AdminTransport` port.
//!
//! Each operation is a blocking `POST {endpoint}/admin/{operation}` with body
//! `{"args": [...]}`; the endpoint answers `{"result": <value>}`.

use std::io;

use serde::Deserialize;
use serde_json::{Value, json};

use crate::application::ports::AdminTransport;
use crate::domain::{AdminConfig, TransportError};

#[derive(Deserialize)]
struct Envelope {
    result: Value,
}

pub struct HttpAdminTransport {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpAdminTransport {
    #[must_use]
    pub fn new(config: &AdminConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout())
            .user_agent(concat!("berth-admin/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            agent,
            base_url: config.base_url().to_string(),
        }
    }

    #[must_use]
    pub fn url_for(&self, operation: &str) -> String {
        format!("{}/admin/{operation}", self.base_url)
    }
}

impl AdminTransport for HttpAdminTransport {
    fn invoke(&self, operation: &str, args: &[Value]) -> Result<Value, TransportError> {
        let url = self.url_for(operation);
        tracing::debug!(%url, args = args.len(), "admin request");

        let response = match self.agent.post(&url).send_json(json!({ "args": args })) {
            Ok(resp) => resp,
            Err(ureq::Error::Status(code, _)) => return Err(TransportError::Status(code)),
            Err(ureq::Error::Transport(t)) => return Err(classify(&t)),
        };

        let envelope: Envelope = response.into_json().map_err(|e| match e.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TransportError::Timeout,
            io::ErrorKind::InvalidData => TransportError::Protocol(e.to_string()),
            _ => TransportError::Io(e.to_string()),
        })?;
        Ok(envelope.result)
    }
}

fn classify(t: &ureq::Transport) -> TransportError {
    match t.kind() {
        ureq::ErrorKind::Dns | ureq::ErrorKind::ConnectionFailed => {
            TransportError::Connect(t.to_string())
        }
        ureq::ErrorKind::Io => {
            let timed_out = std::error::Error::source(t)
                .and_then(|s| s.downcast_ref::<io::Error>())
                .is_some_and(|e| {
                    matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
                });
            if timed_out {
                TransportError::Timeout
            } else {
                TransportError::Io(t.to_string())
            }
        }
        _ => TransportError::Protocol(t.to_string()),
    }
}
