//! Field-rule validation with per-field error state
//!
//! Validation never fails: every rule violation becomes a message stored on
//! the field and rendered next to it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("email regex should compile")
});

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PATTERN_MESSAGE: &str = "Invalid format";

/// Extra check run after the built-in rules. Returns an error message.
pub type CustomRule = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Rules for one field. Checked in declaration order; the first violation
/// wins.
#[derive(Clone, Default)]
pub struct FieldRules {
    pub required: bool,
    pub email: bool,
    /// Minimum length in characters.
    pub min_length: Option<usize>,
    /// Maximum length in characters.
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub custom: Option<CustomRule>,
}

impl fmt::Debug for FieldRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRules")
            .field("required", &self.required)
            .field("email", &self.email)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

impl FieldRules {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn with_email(mut self) -> Self {
        self.email = true;
        self
    }

    pub fn with_length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    pub fn with_pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn with_custom(
        mut self,
        rule: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.custom = Some(Arc::new(rule));
        self
    }
}

/// Check `value` against `rules`. Only `required` applies to an empty value.
pub fn validate_field(value: &str, rules: &FieldRules) -> Option<String> {
    if rules.required && value.trim().is_empty() {
        return Some(REQUIRED_MESSAGE.to_string());
    }
    if value.is_empty() {
        return None;
    }

    if rules.email && !EMAIL_PATTERN.is_match(value) {
        return Some(EMAIL_MESSAGE.to_string());
    }

    let len = value.chars().count();
    if let Some(min) = rules.min_length
        && min > 0
        && len < min
    {
        return Some(format!("Must be at least {min} characters"));
    }
    if let Some(max) = rules.max_length
        && max > 0
        && len > max
    {
        return Some(format!("Must be no more than {max} characters"));
    }

    if let Some(pattern) = &rules.pattern
        && !pattern.is_match(value)
    {
        return Some(PATTERN_MESSAGE.to_string());
    }

    rules.custom.as_ref().and_then(|rule| rule(value))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub value: String,
    pub error: Option<String>,
    pub touched: bool,
}

/// What an input binds to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub value: String,
    pub error: Option<String>,
    /// Only true once the field has been touched.
    pub has_error: bool,
}

/// Values, errors and touched flags of one form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: BTreeMap<String, FormField>,
    rules: BTreeMap<String, FieldRules>,
}

impl FormState {
    /// A form with one empty field per rule set.
    pub fn new<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = (S, FieldRules)>,
        S: Into<String>,
    {
        let rules: BTreeMap<String, FieldRules> =
            rules.into_iter().map(|(k, r)| (k.into(), r)).collect();
        let fields = rules
            .keys()
            .map(|k| (k.clone(), FormField::default()))
            .collect();
        Self { fields, rules }
    }

    /// Set a field's value and revalidate it immediately.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        let error = self
            .rules
            .get(name)
            .and_then(|rules| validate_field(&value, rules));
        let field = self.fields.entry(name.to_string()).or_default();
        field.value = value;
        field.error = error;
        field.touched = true;
    }

    /// Mark a field touched without changing its value.
    pub fn blur(&mut self, name: &str) {
        if let Some(field) = self.fields.get_mut(name) {
            field.touched = true;
        }
    }

    /// Validate every ruled field, mark them touched, and report whether the
    /// whole form is valid.
    pub fn validate_form(&mut self) -> bool {
        let mut valid = true;
        for (name, rules) in &self.rules {
            if let Some(field) = self.fields.get_mut(name) {
                field.error = validate_field(&field.value, rules);
                field.touched = true;
                valid &= field.error.is_none();
            }
        }
        valid
    }

    /// Whether the form would pass [`validate_form`](Self::validate_form),
    /// without touching any field.
    pub fn is_valid(&self) -> bool {
        self.rules.iter().all(|(name, rules)| {
            self.fields
                .get(name)
                .is_none_or(|f| validate_field(&f.value, rules).is_none())
        })
    }

    /// Clear every value, error and touched flag.
    pub fn reset_form(&mut self) {
        for field in self.fields.values_mut() {
            *field = FormField::default();
        }
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.get(name)
    }

    pub fn value(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", |f| f.value.as_str())
    }

    pub fn field_props(&self, name: &str) -> FieldView {
        let Some(field) = self.fields.get(name) else {
            return FieldView::default();
        };
        FieldView {
            value: field.value.clone(),
            error: field.error.clone(),
            has_error: field.error.is_some() && field.touched,
        }
    }
}
