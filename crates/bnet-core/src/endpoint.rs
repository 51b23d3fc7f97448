//! Endpoint descriptors.
//!
//! An [`Endpoint`] names one API resource: its path segments below the host
//! root, any resource-specific query parameters and the part of the response
//! document the caller wants. The session adds the host, `locale` and
//! `apikey` when the request is made.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ApiError, Result};

/// Which part of a response document is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// The whole document
    Document,
    /// One top-level key of the document
    Field(&'static str),
}

impl Shape {
    /// Decode a response body into `T` according to this shape.
    ///
    /// A body that is not a JSON object, or lacks the selected key, is a
    /// retrieval failure just like malformed JSON.
    pub fn decode<T: DeserializeOwned>(self, body: &[u8], path: &str) -> Result<T> {
        match self {
            Self::Document => {
                serde_json::from_slice(body).map_err(|e| ApiError::decode(path, e))
            }
            Self::Field(name) => {
                let mut document: Map<String, Value> =
                    serde_json::from_slice(body).map_err(|e| ApiError::decode(path, e))?;
                let value = document
                    .remove(name)
                    .ok_or_else(|| ApiError::missing_field(path, name))?;
                serde_json::from_value(value).map_err(|e| ApiError::decode(path, e))
            }
        }
    }
}

/// Immutable description of one API resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
    shape: Shape,
    trailing_slash: bool,
}

impl Endpoint {
    /// Endpoint for the given path segments, decoding the whole document.
    ///
    /// Segments are percent-encoded when the URL is built, so realm and
    /// character names can be passed as-is.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            shape: Shape::Document,
            trailing_slash: false,
        }
    }

    /// Append a path segment, typically a numeric id.
    #[must_use]
    pub fn segment(mut self, segment: impl ToString) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Request `fields=<name>` and decode only that key.
    #[must_use]
    pub fn field(self, name: &'static str) -> Self {
        self.query("fields", name).extract(name)
    }

    /// Decode only the top-level key `name`.
    #[must_use]
    pub fn extract(mut self, name: &'static str) -> Self {
        self.shape = Shape::Field(name);
        self
    }

    /// Add a resource-specific query parameter.
    #[must_use]
    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// End the path with `/`, as some collection endpoints expect.
    #[must_use]
    pub fn with_trailing_slash(mut self) -> Self {
        self.trailing_slash = true;
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query_pairs(&self) -> &[(&'static str, String)] {
        &self.query
    }

    pub const fn shape(&self) -> Shape {
        self.shape
    }

    pub const fn has_trailing_slash(&self) -> bool {
        self.trailing_slash
    }

    /// Unencoded path, used in logs and error messages.
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            path.push_str(segment);
        }
        if self.trailing_slash || path.is_empty() {
            path.push('/');
        }
        path
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Guild {
        name: String,
        members: u32,
    }

    #[test]
    fn test_path() {
        let endpoint = Endpoint::new(["wow", "character", "Stormrage", "Thrall"]);
        assert_eq!(endpoint.path(), "/wow/character/Stormrage/Thrall");
        assert_eq!(endpoint.shape(), Shape::Document);

        let endpoint = Endpoint::new(["wow", "pet"]).with_trailing_slash();
        assert_eq!(endpoint.path(), "/wow/pet/");

        let endpoint = Endpoint::new(["wow", "pet", "species"]).segment(258);
        assert_eq!(endpoint.path(), "/wow/pet/species/258");
    }

    #[test]
    fn test_field_adds_query_and_shape() {
        let endpoint = Endpoint::new(["wow", "character", "Stormrage", "Thrall"]).field("guild");
        assert_eq!(endpoint.shape(), Shape::Field("guild"));
        assert_eq!(
            endpoint.query_pairs(),
            &[("fields", "guild".to_string())][..]
        );
    }

    #[test]
    fn test_decode_field() {
        let body = br#"{"name":"Thrall","guild":{"name":"Horde","members":42}}"#;
        let guild: Guild = Shape::Field("guild")
            .decode(body, "/wow/character/x/y")
            .expect("Operation should succeed");
        assert_eq!(
            guild,
            Guild {
                name: "Horde".to_string(),
                members: 42
            }
        );
    }

    #[test]
    fn test_decode_missing_field() {
        let body = br#"{"name":"Thrall"}"#;
        let err = Shape::Field("guild")
            .decode::<Guild>(body, "/wow/character/x/y")
            .expect_err("Test operation should fail");
        assert!(matches!(err, ApiError::MissingField { field: "guild", .. }));
    }

    #[test]
    fn test_decode_schema_mismatch() {
        let body = br#"{"name":"Horde","members":"many"}"#;
        let err = Shape::Document
            .decode::<Guild>(body, "/wow/guild/x/y")
            .expect_err("Test operation should fail");
        assert!(matches!(err, ApiError::Decode { .. }));
        assert!(err.is_retrieval_failure());
    }

    #[test]
    fn test_decode_malformed_json() {
        let err = Shape::Document
            .decode::<Value>(b"<html>maintenance</html>", "/wow/pet/")
            .expect_err("Test operation should fail");
        assert!(matches!(err, ApiError::Decode { .. }));
    }
}
