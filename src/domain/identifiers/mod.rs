pub mod validation;

use crate::impl_validated_name;

/// A validated controller class name.
///
/// Guarantees:
/// - Non-empty
/// - Starts with a letter or `_`
/// - Contains only letters, digits, or `_`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControllerName(String);

impl_validated_name!(ControllerName);

/// A validated view name. Same rules as [`ControllerName`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewName(String);

impl_validated_name!(ViewName);
