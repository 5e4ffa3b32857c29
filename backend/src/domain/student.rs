//! Student data model.
//!
//! [`Student`] is the persisted record; [`NewStudent`] is the validated
//! input shape for create and update. The record id never appears in
//! [`NewStudent`]: it is assigned exactly once, by the storage layer, on
//! create.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum accepted length for a student name, in characters.
pub const NAME_MAX: usize = 100;
/// Lowest age accepted on create and update.
pub const AGE_MIN: i64 = 1;
/// Highest age accepted on create and update.
pub const AGE_MAX: i64 = 150;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Anchored local@domain.tld shape; full RFC address grammar is out of scope.
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Machine-readable code identifying one kind of field violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// A required field was absent from the payload.
    MissingField,
    /// The name was present but blank.
    EmptyName,
    /// The name exceeded [`NAME_MAX`] characters.
    NameTooLong,
    /// The email did not match the accepted address shape.
    InvalidEmail,
    /// The age fell outside [`AGE_MIN`]..=[`AGE_MAX`].
    AgeOutOfRange,
}

/// One failing field reported by [`NewStudent::try_from_parts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// JSON field the violation refers to.
    pub field: &'static str,
    /// Stable violation code.
    pub code: ViolationCode,
    /// Human-readable description.
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            field,
            code,
            message: message.into(),
        }
    }
}

/// Validation failure carrying one entry per failing field.
///
/// Construction never stops at the first problem: a payload with an invalid
/// email and an out-of-range age reports both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentValidationError {
    violations: Vec<FieldViolation>,
}

impl StudentValidationError {
    fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Every failing field, in payload order.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }
}

impl fmt::Display for StudentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.violations.iter().map(|v| v.field).collect();
        write!(f, "student payload failed validation: {}", fields.join(", "))
    }
}

impl std::error::Error for StudentValidationError {}

fn missing_field(field: &'static str) -> FieldViolation {
    FieldViolation::new(
        field,
        ViolationCode::MissingField,
        format!("missing required field: {field}"),
    )
}

fn validate_name(name: &str) -> Option<FieldViolation> {
    if name.trim().is_empty() {
        return Some(FieldViolation::new(
            "name",
            ViolationCode::EmptyName,
            "name must not be empty",
        ));
    }
    if name.chars().count() > NAME_MAX {
        return Some(FieldViolation::new(
            "name",
            ViolationCode::NameTooLong,
            format!("name must be at most {NAME_MAX} characters"),
        ));
    }
    None
}

fn validate_email(email: &str) -> Option<FieldViolation> {
    if email_regex().is_match(email) {
        None
    } else {
        Some(FieldViolation::new(
            "email",
            ViolationCode::InvalidEmail,
            "email must be a valid address",
        ))
    }
}

fn validate_age(age: i64) -> Option<FieldViolation> {
    if (AGE_MIN..=AGE_MAX).contains(&age) {
        None
    } else {
        Some(FieldViolation::new(
            "age",
            ViolationCode::AgeOutOfRange,
            format!("age must be between {AGE_MIN} and {AGE_MAX}"),
        ))
    }
}

/// Validated input fields for create and update operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    name: String,
    email: String,
    age: i64,
}

impl NewStudent {
    /// Validate raw request fields, collecting every violation.
    ///
    /// Absent fields are reported as [`ViolationCode::MissingField`];
    /// present fields are checked against the entity constraints. The value
    /// is only constructed when no field fails.
    pub fn try_from_parts(
        name: Option<String>,
        email: Option<String>,
        age: Option<i64>,
    ) -> Result<Self, StudentValidationError> {
        let mut violations = Vec::new();

        match &name {
            Some(value) => violations.extend(validate_name(value)),
            None => violations.push(missing_field("name")),
        }
        match &email {
            Some(value) => violations.extend(validate_email(value)),
            None => violations.push(missing_field("email")),
        }
        match age {
            Some(value) => violations.extend(validate_age(value)),
            None => violations.push(missing_field("age")),
        }

        match (name, email, age) {
            (Some(name), Some(email), Some(age)) if violations.is_empty() => {
                Ok(Self { name, email, age })
            }
            _ => Err(StudentValidationError::new(violations)),
        }
    }

    /// The student's name, exactly as submitted.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The student's email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The student's age in years.
    pub fn age(&self) -> i64 {
        self.age
    }
}

/// One enrolled individual as stored in the `students` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Student {
    /// Storage-assigned identifier, immutable once created.
    pub id: i64,
    /// Non-empty name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Age in years.
    pub age: i64,
}

impl Student {
    /// Assemble a record from a storage-assigned id and validated fields.
    pub fn from_new(id: i64, new: &NewStudent) -> Self {
        Self {
            id,
            name: new.name().to_owned(),
            email: new.email().to_owned(),
            age: new.age(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;
    use rstest::rstest;

    fn parts(name: &str, email: &str, age: i64) -> (Option<String>, Option<String>, Option<i64>) {
        (Some(name.to_owned()), Some(email.to_owned()), Some(age))
    }

    #[rstest]
    #[case("Alice", "alice@example.com", 21)]
    #[case("Bo", "b@uni.edu", 1)]
    #[case("Centenarian", "old@example.org", 150)]
    fn accepts_valid_parts(#[case] name: &str, #[case] email: &str, #[case] age: i64) {
        let (name, email, age) = parts(name, email, age);
        let student = NewStudent::try_from_parts(name, email, age).expect("valid parts");
        assert!(!student.name().is_empty());
    }

    #[test]
    fn preserves_submitted_values() {
        let (name, email, age) = parts("Alice", "alice@example.com", 21);
        let student = NewStudent::try_from_parts(name, email, age).expect("valid parts");
        assert_eq!(student.name(), "Alice");
        assert_eq!(student.email(), "alice@example.com");
        assert_eq!(student.age(), 21);
    }

    #[rstest]
    #[case("", ViolationCode::EmptyName)]
    #[case("   ", ViolationCode::EmptyName)]
    fn rejects_blank_names(#[case] name: &str, #[case] expected: ViolationCode) {
        let (name, email, age) = parts(name, "alice@example.com", 21);
        let err = NewStudent::try_from_parts(name, email, age).expect_err("blank name");
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].code, expected);
    }

    #[test]
    fn rejects_overlong_name() {
        let long = "x".repeat(NAME_MAX + 1);
        let (name, email, age) = parts(&long, "alice@example.com", 21);
        let err = NewStudent::try_from_parts(name, email, age).expect_err("overlong name");
        assert_eq!(err.violations()[0].code, ViolationCode::NameTooLong);
    }

    #[rstest]
    #[case("plainaddress")]
    #[case("missing@tld")]
    #[case("two words@example.com")]
    #[case("@example.com")]
    fn rejects_malformed_emails(#[case] email: &str) {
        let (name, email, age) = parts("Alice", email, 21);
        let err = NewStudent::try_from_parts(name, email, age).expect_err("bad email");
        assert_eq!(err.violations()[0].code, ViolationCode::InvalidEmail);
        assert_eq!(err.violations()[0].field, "email");
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    #[case(151)]
    fn rejects_implausible_ages(#[case] age: i64) {
        let (name, email, age) = parts("Alice", "alice@example.com", age);
        let err = NewStudent::try_from_parts(name, email, age).expect_err("bad age");
        assert_eq!(err.violations()[0].code, ViolationCode::AgeOutOfRange);
    }

    #[test]
    fn collects_every_failing_field() {
        let (name, email, age) = parts("Alice", "not-an-email", 200);
        let err = NewStudent::try_from_parts(name, email, age).expect_err("two violations");
        let fields: Vec<&str> = err.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["email", "age"]);
    }

    #[test]
    fn reports_missing_fields_individually() {
        let err = NewStudent::try_from_parts(None, None, None).expect_err("all missing");
        assert_eq!(err.violations().len(), 3);
        assert!(
            err.violations()
                .iter()
                .all(|v| v.code == ViolationCode::MissingField)
        );
    }

    #[test]
    fn from_new_copies_all_fields() {
        let (name, email, age) = parts("Alice", "alice@example.com", 21);
        let new = NewStudent::try_from_parts(name, email, age).expect("valid parts");
        let student = Student::from_new(7, &new);
        assert_eq!(student.id, 7);
        assert_eq!(student.name, "Alice");
        assert_eq!(student.email, "alice@example.com");
        assert_eq!(student.age, 21);
    }
}
