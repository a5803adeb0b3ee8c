//! Validated application names used as the tenant-side lookup key.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

/// Error returned when application name validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum NameError {
	/// The name was empty.
	#[error("Application name cannot be empty.")]
	Empty,
	/// The name contains whitespace characters.
	#[error("Application name contains whitespace.")]
	ContainsWhitespace,
}

/// Logical application name; the tenant filter `name eq <name>` keys on it.
///
/// The filter value is unquoted, so whitespace would split it into extra filter tokens and
/// select the wrong records (or none). Empty names would match nothing. Both are rejected
/// before any request is sent. No other restriction applies.
///
/// The tenant does not enforce uniqueness, so the client treats the name as the identity of
/// at most one live application.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApplicationName(String);
impl ApplicationName {
	/// Creates a new name after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, NameError> {
		let view = value.as_ref();

		validate_view(view)?;

		Ok(Self(view.to_owned()))
	}

	/// Returns the name as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Builds the tenant list filter selecting this name.
	pub fn filter(&self) -> String {
		format!("name eq {}", self.0)
	}
}
impl Deref for ApplicationName {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for ApplicationName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<ApplicationName> for String {
	fn from(value: ApplicationName) -> Self {
		value.0
	}
}
impl TryFrom<String> for ApplicationName {
	type Error = NameError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_view(&value)?;

		Ok(Self(value))
	}
}
impl Borrow<str> for ApplicationName {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl Debug for ApplicationName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "ApplicationName({})", self.0)
	}
}
impl Display for ApplicationName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for ApplicationName {
	type Err = NameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

fn validate_view(view: &str) -> Result<(), NameError> {
	if view.is_empty() {
		return Err(NameError::Empty);
	}
	if view.chars().any(char::is_whitespace) {
		return Err(NameError::ContainsWhitespace);
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn names_reject_blank_and_whitespace() {
		assert_eq!(ApplicationName::new(""), Err(NameError::Empty));
		assert_eq!(ApplicationName::new(" svc-a"), Err(NameError::ContainsWhitespace));
		assert_eq!(ApplicationName::new("svc a"), Err(NameError::ContainsWhitespace));

		let nbsp = format!("svc{}a", '\u{00A0}');

		assert_eq!(ApplicationName::new(&nbsp), Err(NameError::ContainsWhitespace));

		let name = ApplicationName::new("svc-a").expect("Fixture name should be valid.");

		assert_eq!(name.as_str(), "svc-a");
		assert_eq!(name.filter(), "name eq svc-a");
	}

	#[test]
	fn long_and_punctuated_names_are_accepted() {
		let long = "a".repeat(1024);

		assert_eq!(ApplicationName::new(&long).map(|name| name.len()), Ok(1024));
		assert_eq!(
			ApplicationName::new("kyma/runtime_42.ünïcode").map(String::from),
			Ok("kyma/runtime_42.ünïcode".to_owned())
		);
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let name: ApplicationName =
			serde_json::from_str("\"kyma-runtime-42\"").expect("Name should deserialize.");

		assert_eq!(name.as_ref(), "kyma-runtime-42");
		assert!(serde_json::from_str::<ApplicationName>("\"with space\"").is_err());
		assert!(serde_json::from_str::<ApplicationName>("\"\"").is_err());
	}

	#[test]
	fn borrow_supports_fast_lookup() {
		let map: HashMap<ApplicationName, u8> = HashMap::from_iter([(
			ApplicationName::new("svc-b").expect("Name used for lookup should be valid."),
			7_u8,
		)]);

		assert_eq!(map.get("svc-b"), Some(&7));
	}
}
