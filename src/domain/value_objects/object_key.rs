use crate::domain::errors::ValidationError;

const MAX_KEY_BYTES: usize = 1024;

/// An object key that maps onto an `object_store` path without loss
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Create a new ObjectKey with validation
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyObjectKey);
        }

        if value.len() > MAX_KEY_BYTES {
            return Err(ValidationError::ObjectKeyTooLong {
                actual: value.len(),
                max: MAX_KEY_BYTES,
            });
        }

        if let Some(c) = value.chars().find(|c| c.is_control()) {
            return Err(ValidationError::InvalidObjectKeyCharacter(c));
        }

        if value.starts_with('/') {
            return Err(ValidationError::ObjectKeyStartsWithSlash);
        }

        // object_store drops a trailing delimiter, which would alias `a/` with `a`
        if value.ends_with('/') {
            return Err(ValidationError::ObjectKeyEndsWithSlash);
        }

        if value.contains("//") {
            return Err(ValidationError::ObjectKeyContainsDoubleSlash);
        }

        if let Some(segment) = value.split('/').find(|s| *s == "." || *s == "..") {
            return Err(ValidationError::ObjectKeyRelativeSegment(segment.to_string()));
        }

        Ok(Self(value))
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the file name part of the key (everything after the last '/')
    pub fn file_name(&self) -> &str {
        self.0.rfind('/').map_or(&self.0, |idx| &self.0[idx + 1..])
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_object_key() {
        assert!(ObjectKey::new("file.txt".to_string()).is_ok());
        assert!(ObjectKey::new("folder/file.txt".to_string()).is_ok());
        assert!(ObjectKey::new("deep/folder/structure/file name.md".to_string()).is_ok());
    }

    #[test]
    fn test_invalid_object_key() {
        assert_eq!(
            ObjectKey::new("".to_string()),
            Err(ValidationError::EmptyObjectKey)
        );
        assert_eq!(
            ObjectKey::new("/leading-slash".to_string()),
            Err(ValidationError::ObjectKeyStartsWithSlash)
        );
        assert_eq!(
            ObjectKey::new("double//slash".to_string()),
            Err(ValidationError::ObjectKeyContainsDoubleSlash)
        );
        assert_eq!(
            ObjectKey::new("folder/".to_string()),
            Err(ValidationError::ObjectKeyEndsWithSlash)
        );
        assert_eq!(
            ObjectKey::new("a/../b".to_string()),
            Err(ValidationError::ObjectKeyRelativeSegment("..".to_string()))
        );
        assert_eq!(
            ObjectKey::new("./b".to_string()),
            Err(ValidationError::ObjectKeyRelativeSegment(".".to_string()))
        );
        assert_eq!(
            ObjectKey::new("tab\there".to_string()),
            Err(ValidationError::InvalidObjectKeyCharacter('\t'))
        );
        assert!(ObjectKey::new("null\0byte".to_string()).is_err());
        assert!(ObjectKey::new("a/.hidden/..x".to_string()).is_ok());
        assert!(ObjectKey::new("x".repeat(1025)).is_err());
    }

    #[test]
    fn test_object_key_parts() {
        let key = ObjectKey::new("folder/subfolder/file.txt".to_string()).unwrap();
        assert_eq!(key.file_name(), "file.txt");

        let root_key = ObjectKey::new("file.txt".to_string()).unwrap();
        assert_eq!(root_key.file_name(), "file.txt");
    }
}
