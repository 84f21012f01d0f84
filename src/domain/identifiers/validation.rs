/// Validates a type identifier for a generated class or view.
///
/// Checks:
/// - Non-empty
/// - First character is a letter or '_'
/// - Remaining characters are alphanumeric or '_'
pub fn validate_type_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Validates a user-provided relative folder for output placement.
///
/// Only null bytes are rejected. Parent components and absolute paths are
/// joined onto the project base path exactly as the platform joins them.
pub fn validate_relative_folder(folder: &str) -> bool {
    !folder.contains('\0')
}

#[macro_export]
macro_rules! impl_validated_name {
    ($name:ident) => {
        impl $name {
            /// Validate and create a new instance.
            pub fn new(name: &str) -> Result<Self, $crate::domain::AppError> {
                if $crate::domain::identifiers::validation::validate_type_name(name) {
                    Ok(Self(name.to_string()))
                } else {
                    Err($crate::domain::AppError::InvalidName(name.to_string()))
                }
            }

            /// Return the inner string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_type_names() {
        assert!(validate_type_name("HomeController"));
        assert!(validate_type_name("_Layout"));
        assert!(validate_type_name("Orders2Controller"));
    }

    #[test]
    fn invalid_type_names() {
        assert!(!validate_type_name(""));
        assert!(!validate_type_name("2Fast"));
        assert!(!validate_type_name("Home-Controller"));
        assert!(!validate_type_name("Home Controller"));
        assert!(!validate_type_name("../Home"));
        assert!(!validate_type_name("Home.cs"));
    }

    #[test]
    fn relative_folder_accepts_nested_parent_and_absolute() {
        assert!(validate_relative_folder("Controllers"));
        assert!(validate_relative_folder("Areas/Admin/Controllers"));
        assert!(validate_relative_folder("Areas\\Admin"));
        assert!(validate_relative_folder("/srv/out"));
        assert!(validate_relative_folder("../Shared/Controllers"));
        assert!(validate_relative_folder(""));
    }

    #[test]
    fn relative_folder_rejects_null_bytes() {
        assert!(!validate_relative_folder("null\0byte"));
    }
}
