use std::collections::HashMap;

use super::error::RequestError;

/// An inbound HTTP-shaped event, independent of the hosting platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundEvent {
    pub method: String,
    pub path: String,
    pub query_parameters: HashMap<String, String>,
    /// Raw body bytes as delivered by the platform.
    pub body: Option<Vec<u8>>,
}

impl InboundEvent {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_query_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_parameters.insert(key.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn query_parameter(&self, key: &str) -> Option<&str> {
        self.query_parameters.get(key).map(String::as_str)
    }

    /// The body as UTF-8 text.
    ///
    /// Bytes that are not valid UTF-8 are rejected rather than replaced.
    pub fn body_text(&self) -> Result<Option<&str>, RequestError> {
        self.body
            .as_deref()
            .map(std::str::from_utf8)
            .transpose()
            .map_err(|e| RequestError::InvalidEncoding(e.to_string()))
    }
}
