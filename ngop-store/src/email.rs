use std::fmt;

use thiserror::Error;

/// An email address that passed shape validation. Login and registration
/// accept only these; the registry stores the plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

#[derive(Debug, Error, PartialEq)]
pub enum EmailError {
    #[error("invalid email '{0}': expected exactly one '@'")]
    AtCount(String),
    #[error("invalid email '{0}': empty name before '@'")]
    EmptyLocal(String),
    #[error("invalid email '{0}': bad domain after '@'")]
    BadDomain(String),
}

impl Email {
    pub fn parse(value: &str) -> Result<Self, EmailError> {
        let value = value.trim();
        let Some((local, domain)) = value.split_once('@') else {
            return Err(EmailError::AtCount(value.to_string()));
        };
        if domain.contains('@') {
            return Err(EmailError::AtCount(value.to_string()));
        }
        if local.is_empty() {
            return Err(EmailError::EmptyLocal(value.to_string()));
        }
        if domain.is_empty()
            || !domain.contains('.')
            || domain.starts_with('.')
            || domain.ends_with('.')
        {
            return Err(EmailError::BadDomain(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Email {
    type Error = EmailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_addresses_are_accepted() {
        assert!(Email::parse("admin.dtb@gmail.com").is_ok());
        assert!(Email::parse("opd.dtb@gmail.com").is_ok());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            Email::parse("  user@example.com ").unwrap().as_str(),
            "user@example.com"
        );
    }

    #[test]
    fn missing_at_is_rejected() {
        assert_eq!(
            Email::parse("userexample.com").unwrap_err(),
            EmailError::AtCount("userexample.com".to_string())
        );
    }

    #[test]
    fn double_at_is_rejected() {
        assert!(matches!(
            Email::parse("user@@example.com").unwrap_err(),
            EmailError::AtCount(_)
        ));
    }

    #[test]
    fn empty_local_part_is_rejected() {
        assert!(matches!(
            Email::parse("@example.com").unwrap_err(),
            EmailError::EmptyLocal(_)
        ));
    }

    #[test]
    fn dotless_or_dot_edged_domain_is_rejected() {
        for bad in ["user@example", "user@.example.com", "user@example.com."] {
            assert!(matches!(
                Email::parse(bad).unwrap_err(),
                EmailError::BadDomain(_)
            ));
        }
    }
}
