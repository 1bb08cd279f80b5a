//! The form: an ordered arena of fields plus cross-field rules.

use std::fmt;

use log::debug;

use crate::console::Console;
use crate::error::FormError;
use crate::field::Field;
use crate::rule::CrossRule;
use crate::value::Value;

/// Stable handle to a field in its form's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(pub(crate) usize);

/// An ordered collection of fields plus cross-field rules, with a
/// fill / validate / render lifecycle.
///
/// The form owns its fields; rules refer to fields only through [`FieldId`]
/// handles, so there are no dangling references to manage. Registration
/// order is display and fill order, and is fixed once filling starts.
#[derive(Default)]
pub struct Form {
    fields: Vec<Field>,
    rules: Vec<Box<dyn CrossRule>>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field; the returned handle stays valid for the form's life.
    pub fn add_field(&mut self, field: Field) -> FieldId {
        self.fields.push(field);
        FieldId(self.fields.len() - 1)
    }

    /// Append a cross-field rule. Both referenced fields must already be
    /// registered on this form.
    pub fn add_rule(&mut self, rule: Box<dyn CrossRule>) -> Result<(), FormError> {
        let (a, b) = rule.fields();
        for id in [a, b] {
            if id.0 >= self.fields.len() {
                return Err(FormError::UnknownField(id));
            }
        }
        self.rules.push(rule);
        Ok(())
    }

    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.get(id.0)
    }

    pub fn value(&self, id: FieldId) -> Option<&Value> {
        self.fields.get(id.0).map(Field::value)
    }

    /// Prompt every field that is not currently marked valid, in order.
    ///
    /// A field becomes skip-worthy only once a validate pass marks it valid;
    /// empty, invalid, and never-validated fields are all prompted.
    pub fn fill(&mut self, console: &mut dyn Console) -> Result<(), FormError> {
        for field in &mut self.fields {
            if field.is_valid() {
                continue;
            }
            field.read_input(console)?;
        }
        Ok(())
    }

    /// Run every field validator, then every cross-field rule.
    ///
    /// No short-circuiting: every check runs so a subsequent render can show
    /// all errors at once. A failed rule marks both of its fields invalid so
    /// the next fill re-prompts them. Returns the global AND.
    pub fn validate(&mut self) -> bool {
        let mut all_valid = true;
        for field in &mut self.fields {
            all_valid &= field.validate();
        }

        for rule in &self.rules {
            let (a, b) = rule.fields();
            let ok = match (self.fields.get(a.0), self.fields.get(b.0)) {
                (Some(fa), Some(fb)) => rule.check(fa.value(), fb.value()),
                _ => false,
            };
            if !ok {
                all_valid = false;
                debug!("cross rule failed: {}", rule.message());
                for id in [a, b] {
                    // Keep the field's own error message when it failed its
                    // own validator; the rule only downgrades valid fields.
                    if let Some(field) = self.fields.get_mut(id.0)
                        && field.is_valid()
                    {
                        field.mark_invalid(rule.message());
                    }
                }
            }
        }

        debug!("form validate -> {all_valid}");
        all_valid
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in &self.fields {
            writeln!(f, "{field}")?;
            writeln!(f)?;
        }
        write!(f, "----------------------------------------------------------")
    }
}
