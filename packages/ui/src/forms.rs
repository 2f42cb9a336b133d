//! # Form state and validators
//!
//! A [`Form`] is an ordered set of named text fields, each with its own
//! [`Rule`]s and a `touched` flag. Validation is synchronous and local; errors
//! are only reported for touched fields, and a failed submit marks every field
//! touched so all problems show at once.
//!
//! Rules other than [`Rule::Required`] accept an empty value, so an empty
//! required field reports exactly one error.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// A validation rule on a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Required,
    Email,
    MinLength(usize),
    /// Exactly this many ASCII digits.
    Digits(usize),
    /// Numeric value of at least this much.
    Min(f64),
}

/// Why a field failed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    Required,
    Email,
    MinLength { required: usize },
    Pattern,
    Min { min: f64 },
}

pub fn is_valid_email(value: &str) -> bool {
    let local_len = value.split('@').next().map_or(0, str::len);
    value.len() <= 254 && local_len <= 64 && EMAIL.is_match(value)
}

impl Rule {
    pub fn check(&self, value: &str) -> Option<FieldError> {
        if value.is_empty() {
            return matches!(self, Rule::Required).then_some(FieldError::Required);
        }
        match self {
            Rule::Required => None,
            Rule::Email => (!is_valid_email(value)).then_some(FieldError::Email),
            Rule::MinLength(required) => (value.chars().count() < *required)
                .then_some(FieldError::MinLength { required: *required }),
            Rule::Digits(count) => {
                let ok = value.len() == *count && value.bytes().all(|b| b.is_ascii_digit());
                (!ok).then_some(FieldError::Pattern)
            }
            // Non-numeric or non-finite input cannot satisfy a minimum.
            Rule::Min(min) => match value.trim().parse::<f64>() {
                Ok(n) if n.is_finite() && n >= *min => None,
                _ => Some(FieldError::Min { min: *min }),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Field {
    name: &'static str,
    initial: String,
    value: String,
    rules: Vec<Rule>,
    touched: bool,
}

impl Field {
    fn first_error(&self) -> Option<FieldError> {
        self.rules.iter().find_map(|rule| rule.check(&self.value))
    }
}

/// An ordered collection of validated text fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a field with its initial value and rules.
    pub fn field(mut self, name: &'static str, initial: &str, rules: Vec<Rule>) -> Self {
        self.fields.push(Field {
            name,
            initial: initial.to_string(),
            value: initial.to_string(),
            rules,
            touched: false,
        });
        self
    }

    fn find(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Current value; unknown fields read as empty.
    pub fn value(&self, name: &str) -> &str {
        self.find(name).map_or("", |f| f.value.as_str())
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.find_mut(name) {
            field.value = value.into();
        }
    }

    /// Set several values at once, leaving touched flags alone.
    pub fn patch(&mut self, values: &[(&str, String)]) {
        for (name, value) in values {
            self.set(name, value.clone());
        }
    }

    pub fn touch(&mut self, name: &str) {
        if let Some(field) = self.find_mut(name) {
            field.touched = true;
        }
    }

    pub fn mark_all_touched(&mut self) {
        for field in &mut self.fields {
            field.touched = true;
        }
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.find(name).is_some_and(|f| f.touched)
    }

    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|f| f.first_error().is_none())
    }

    /// The error to display for `name`: only once the field is touched.
    pub fn error(&self, name: &str) -> Option<FieldError> {
        self.find(name)
            .filter(|f| f.touched)
            .and_then(Field::first_error)
    }

    /// Back to initial values, nothing touched.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value = field.initial.clone();
            field.touched = false;
        }
    }
}
