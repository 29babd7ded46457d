//! Form handling shared by the storefront's input surfaces

pub mod validation;

pub use validation::{
    CustomRule, FieldRules, FieldView, FormField, FormState, validate_field,
};
