use crate::domain::error::DomainError;

/// Centralized request validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// A project name is used verbatim as the target directory and as the new
    /// module identity. It may be a `/`-separated module path such as
    /// `github.com/acme/svc`, but must stay relative: no leading `/`, no
    /// backslashes, and no empty or hidden (`.`, `..`, `.git`) segments.
    pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: name.into(),
            reason: reason.into(),
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(invalid("name cannot contain whitespace"));
        }
        if name.contains('\\') {
            return Err(invalid("name cannot contain '\\'"));
        }
        if name.starts_with('/') {
            return Err(invalid("name must be a relative path"));
        }
        for segment in name.split('/') {
            if segment.is_empty() {
                return Err(invalid("name cannot contain empty path segments"));
            }
            if segment.starts_with('.') {
                return Err(invalid("path segments cannot start with '.'"));
            }
        }
        Ok(())
    }

    pub fn validate_template_field(field: &'static str, value: &str) -> Result<(), DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::InvalidTemplateSpec {
                field,
                reason: "value cannot be empty".into(),
            });
        }
        Ok(())
    }
}
