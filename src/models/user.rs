//! User payload types

use mongodb::bson::Document;
use serde::Deserialize;

use super::ValidationError;

/// Create request body: all fields required.
///
/// A missing field fails JSON decoding before validation runs; an empty
/// field is caught by [`NewUser::validate`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    /// Check that every required field is non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("email", &self.email)?;
        require_non_empty("password", &self.password)?;
        Ok(())
    }
}

/// Update request body: any subset of the mutable fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserPatch {
    /// Validate the supplied fields and build the update document.
    ///
    /// Clearing a required field to the empty string is rejected, and so is
    /// a patch that supplies no recognized field at all.
    pub fn into_set_document(self) -> Result<Document, ValidationError> {
        let mut set = Document::new();

        if let Some(name) = self.name {
            require_non_empty("name", &name)?;
            set.insert("name", name);
        }
        if let Some(email) = self.email {
            require_non_empty("email", &email)?;
            set.insert("email", email);
        }
        if let Some(password) = self.password {
            require_non_empty("password", &password)?;
            set.insert("password", password);
        }

        if set.is_empty() {
            return Err(ValidationError::NoFields);
        }

        Ok(set)
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Empty { field })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_user() -> NewUser {
        NewUser {
            name: "Bob".into(),
            email: "bob@x.com".into(),
            password: "pw".into(),
        }
    }

    #[test]
    fn valid_user_passes() {
        assert!(valid_user().validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut user = valid_user();
        user.name = String::new();
        let err = user.validate().unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "name" });
    }

    #[test]
    fn whitespace_email_is_rejected() {
        let mut user = valid_user();
        user.email = "   ".into();
        let err = user.validate().unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "email" });
    }

    #[test]
    fn patch_builds_set_document_for_supplied_fields() {
        let patch = UserPatch {
            name: Some("Bobby".into()),
            ..Default::default()
        };
        let set = patch.into_set_document().unwrap();
        assert_eq!(set.get_str("name").unwrap(), "Bobby");
        assert!(!set.contains_key("email"));
        assert!(!set.contains_key("password"));
    }

    #[test]
    fn patch_rejects_clearing_a_required_field() {
        let patch = UserPatch {
            email: Some(String::new()),
            ..Default::default()
        };
        let err = patch.into_set_document().unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "email" });
    }

    #[test]
    fn empty_patch_is_rejected() {
        let err = UserPatch::default().into_set_document().unwrap_err();
        assert_eq!(err, ValidationError::NoFields);
    }
}
