//! Named GraphQL operations and reusable fragments.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A named fragment definition that operations can spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    /// Fragment name as referenced by `...Name`.
    pub name: &'static str,
    /// Full `fragment Name on Type { ... }` text.
    pub definition: &'static str,
}

/// A predefined GraphQL request template bound to typed variables and a
/// typed response.
///
/// Implementors are unit types passed by reference to
/// [`LocalGraphqlApi::execute`](super::LocalGraphqlApi::execute).
pub trait Operation: Sync {
    /// Operation name, sent as `operationName`.
    const NAME: &'static str;

    /// Operation text without fragment definitions.
    const BODY: &'static str;

    /// Fragments spread by [`Self::BODY`].
    const FRAGMENTS: &'static [Fragment];

    /// Variables object serialized into the request.
    type Variables: Serialize + Sync;

    /// Shape of the `data` payload.
    type Response: DeserializeOwned;

    /// Returns the full document: fragment definitions followed by the body.
    #[must_use]
    fn document() -> String {
        compose_document(Self::BODY, Self::FRAGMENTS)
    }
}

/// Joins fragment definitions and an operation body into one document.
///
/// Fragments listed more than once are emitted only once, in first-seen order.
#[must_use]
pub fn compose_document(body: &str, fragments: &[Fragment]) -> String {
    let mut seen: Vec<&str> = Vec::with_capacity(fragments.len());
    let mut document = String::new();

    for fragment in fragments {
        if seen.contains(&fragment.name) {
            continue;
        }
        seen.push(fragment.name);
        document.push_str(fragment.definition.trim());
        document.push('\n');
    }

    document.push_str(body.trim());
    document
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Fragment = Fragment {
        name: "A",
        definition: "fragment A on Media { id }",
    };
    const B: Fragment = Fragment {
        name: "B",
        definition: "\n  fragment B on Staff { id }\n",
    };

    #[test]
    fn test_compose_document_orders_fragments_before_body() {
        // Arrange & Act
        let document = compose_document("query Q { x }", &[A, B]);

        // Assert
        assert_eq!(
            document,
            "fragment A on Media { id }\nfragment B on Staff { id }\nquery Q { x }"
        );
    }

    #[test]
    fn test_compose_document_deduplicates_fragments() {
        // Arrange & Act
        let document = compose_document("query Q { x }", &[A, B, A]);

        // Assert
        assert_eq!(document.matches("fragment A on").count(), 1);
        assert_eq!(document.matches("fragment B on").count(), 1);
    }

    #[test]
    fn test_compose_document_without_fragments() {
        // Arrange & Act
        let document = compose_document("  query Q { x }  ", &[]);

        // Assert
        assert_eq!(document, "query Q { x }");
    }
}
