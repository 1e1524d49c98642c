//! GraphQL request and response envelopes.

use serde::{Deserialize, Serialize};

/// JSON body of a GraphQL `POST` request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GraphqlRequest<'a, V> {
    /// Full query document.
    pub query: &'a str,
    /// Operation to run within the document.
    pub operation_name: &'a str,
    /// Variables object.
    pub variables: &'a V,
}

/// JSON body of a GraphQL response, with `data` left undecoded.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlResponse {
    /// Operation result (may be `null` when errors are reported).
    pub data: Option<serde_json::Value>,
    /// GraphQL-level errors.
    pub errors: Option<Vec<GraphqlError>>,
}

/// A single entry of the `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct GraphqlError {
    /// Human-readable message.
    pub message: String,
    /// HTTP-like status AniList attaches to some errors (e.g. 404).
    pub status: Option<u16>,
    /// Source locations within the query document.
    pub locations: Option<Vec<GraphqlLocation>>,
}

/// Location of a GraphQL error within the query document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct GraphqlLocation {
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_request_serializes_operation_name_in_camel_case() {
        // Arrange
        let variables = serde_json::json!({ "id": 1 });
        let request = GraphqlRequest {
            query: "query GetAnimeById { x }",
            operation_name: "GetAnimeById",
            variables: &variables,
        };

        // Act
        let value = serde_json::to_value(&request).unwrap();

        // Assert
        assert_eq!(value["operationName"], "GetAnimeById");
        assert_eq!(value["variables"]["id"], 1);
        assert!(value.get("operation_name").is_none());
    }

    #[test]
    fn test_parse_error_response_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/anilist/error_not_found.json");

        // Act
        let response: GraphqlResponse = serde_json::from_str(json).unwrap();

        // Assert
        let errors = response.errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Not Found.");
        assert_eq!(errors[0].status, Some(404));
        assert_eq!(
            errors[0].locations.as_deref(),
            Some(&[GraphqlLocation { line: 2, column: 3 }][..])
        );
        assert_eq!(response.data.unwrap()["Media"], serde_json::Value::Null);
    }
}
