//! Validated string types that enforce invariants at construction time

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Validation errors for string types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("interface name cannot be empty or contain whitespace")]
    InvalidInterfaceName,

    #[error("invalid category name '{0}': use lowercase letters, digits, '_' or '-'")]
    InvalidCategoryName(String),

    #[error("config path cannot be empty")]
    EmptyConfigPath,
}

/// Generate a validated string newtype.
///
/// Each type gets a validating `new()`, `as_str()`, `AsRef<str>`, `Deref`,
/// `Display`, `FromStr`, `TryFrom<String>` and serde support that rejects
/// invalid input during deserialization.
macro_rules! validated_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident(String) {
            validation: |$s_param:ident| $validation:expr,
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        $vis struct $name(String);

        impl $name {
            #[doc = concat!("Create a new ", stringify!($name), " after validation")]
            pub fn new($s_param: String) -> Result<Self, ValidationError> {
                let validate = || $validation;
                validate()?;
                Ok(Self($s_param))
            }

            #[doc = concat!("Get the ", stringify!($name), " as a string slice")]
            #[must_use]
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s.to_string())
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from($s_param: String) -> Result<Self, Self::Error> {
                Self::new($s_param)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::new(s).map_err(serde::de::Error::custom)
            }
        }
    };
}

validated_string! {
    /// Capture interface identifier (e.g. `eth0`, `rvi0`)
    ///
    /// # Examples
    /// ```
    /// use netpulse::types::InterfaceName;
    ///
    /// assert!(InterfaceName::new("eth0".to_string()).is_ok());
    /// assert!(InterfaceName::new("".to_string()).is_err());
    /// assert!(InterfaceName::new("eth 0".to_string()).is_err());
    /// ```
    #[doc(alias = "iface")]
    pub struct InterfaceName(String) {
        validation: |s| {
            if s.is_empty() || s.chars().any(char::is_whitespace) {
                Err(ValidationError::InvalidInterfaceName)
            } else {
                Ok(())
            }
        },
    }
}

validated_string! {
    /// DNS traffic category identifier
    ///
    /// The name doubles as the classifier's search term and as the last
    /// segment of the `dns_requests.<category>` metric, so it is restricted
    /// to characters that are safe in both places.
    pub struct CategoryName(String) {
        validation: |s| {
            let valid = !s.is_empty()
                && s.bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-');
            if valid {
                Ok(())
            } else {
                Err(ValidationError::InvalidCategoryName(s.clone()))
            }
        },
    }
}

validated_string! {
    /// Path to the TOML configuration file
    pub struct ConfigPath(String) {
        validation: |s| {
            if s.trim().is_empty() {
                Err(ValidationError::EmptyConfigPath)
            } else {
                Ok(())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_name_valid() {
        let iface = InterfaceName::new("rvi0".to_string()).unwrap();
        assert_eq!(iface.as_str(), "rvi0");
    }

    #[test]
    fn test_interface_name_whitespace_rejected() {
        assert_eq!(
            InterfaceName::new(" ".to_string()),
            Err(ValidationError::InvalidInterfaceName)
        );
        assert_eq!(
            InterfaceName::new("en0\n".to_string()),
            Err(ValidationError::InvalidInterfaceName)
        );
    }

    #[test]
    fn test_category_name_valid() {
        for name in ["instagram", "google", "x", "tik-tok", "web_3", "365"] {
            assert!(CategoryName::new(name.to_string()).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_category_name_rejects_uppercase_and_dots() {
        for name in ["", "Instagram", "google.com", "my app", "/dns"] {
            assert!(
                matches!(
                    CategoryName::new(name.to_string()),
                    Err(ValidationError::InvalidCategoryName(_))
                ),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_category_name_deserialize_validates() {
        #[derive(Debug, Deserialize)]
        struct Holder {
            #[allow(dead_code)]
            name: CategoryName,
        }
        assert!(toml::from_str::<Holder>("name = \"spotify\"").is_ok());
        let err = toml::from_str::<Holder>("name = \"Spotify\"").unwrap_err();
        assert!(err.to_string().contains("invalid category name"));
    }

    #[test]
    fn test_config_path_from_str() {
        let path: ConfigPath = "netpulse.toml".parse().unwrap();
        assert_eq!(&*path, "netpulse.toml");
        assert!("  ".parse::<ConfigPath>().is_err());
    }

    #[test]
    fn test_display_matches_inner() {
        let name = CategoryName::new("apple".to_string()).unwrap();
        assert_eq!(format!("{}", name), "apple");
    }
}
