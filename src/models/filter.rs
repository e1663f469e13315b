//! Equality filters for list and delete
//!
//! Query parameters map onto a closed set of filterable fields instead of
//! being passed to the database verbatim, so a request cannot smuggle
//! operators into the query (`?email[$ne]=...`). Unknown parameters are
//! rejected at the handler boundary.

use mongodb::bson::Document;
use serde::Deserialize;

/// Equality filter over user fields, parsed from the query string.
///
/// Absent fields are unconstrained; an entirely empty filter matches every
/// user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserFilter {
    /// Build the equality-match document for the collection query.
    pub fn into_document(self) -> Document {
        let mut filter = Document::new();

        if let Some(name) = self.name {
            filter.insert("name", name);
        }
        if let Some(email) = self.email {
            filter.insert("email", email);
        }
        if let Some(password) = self.password {
            filter.insert("password", password);
        }

        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_filter_matches_everything() {
        assert!(UserFilter::default().into_document().is_empty());
    }

    #[test]
    fn supplied_fields_become_equality_matches() {
        let filter = UserFilter {
            name: Some("Bob".into()),
            email: Some("bob@x.com".into()),
            password: None,
        };
        let doc = filter.into_document();
        assert_eq!(doc.get_str("name").unwrap(), "Bob");
        assert_eq!(doc.get_str("email").unwrap(), "bob@x.com");
        assert!(!doc.contains_key("password"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<UserFilter, _> = serde_json::from_value(json!({ "role": "admin" }));
        assert!(result.is_err());
    }
}
