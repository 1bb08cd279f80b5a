//! Cross-field rules: joint checks over two fields' current values.

use crate::form::FieldId;
use crate::value::Value;

/// A compatibility rule between two fields.
///
/// Rules hold field handles, never the fields themselves; the form resolves
/// the handles to current values on every validate call. If either value is
/// missing or not evaluable the rule fails, which forces both fields to be
/// (re-)filled before the form can pass.
pub trait CrossRule {
    /// The two fields this rule reads, in (subject, object) order.
    fn fields(&self) -> (FieldId, FieldId);
    fn check(&self, a: &Value, b: &Value) -> bool;
    fn message(&self) -> &str;
}

/// Table-driven compatibility between two enumeration fields: for each code
/// of the first field, the set of acceptable codes in the second.
pub struct CompatRule {
    a: FieldId,
    b: FieldId,
    table: Vec<(u32, Vec<u32>)>,
    message: String,
}

impl CompatRule {
    pub fn new(
        a: FieldId,
        b: FieldId,
        table: &[(u32, &[u32])],
        message: impl Into<String>,
    ) -> Self {
        let table = table
            .iter()
            .map(|(code, allowed)| (*code, allowed.to_vec()))
            .collect();
        Self {
            a,
            b,
            table,
            message: message.into(),
        }
    }
}

impl CrossRule for CompatRule {
    fn fields(&self) -> (FieldId, FieldId) {
        (self.a, self.b)
    }

    fn check(&self, a: &Value, b: &Value) -> bool {
        let (Some(code_a), Some(code_b)) = (a.as_code(), b.as_code()) else {
            return false;
        };
        self.table
            .iter()
            .find(|(code, _)| *code == code_a)
            .is_some_and(|(_, allowed)| allowed.contains(&code_b))
    }

    fn message(&self) -> &str {
        &self.message
    }
}
