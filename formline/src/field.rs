//! A single named, typed, user-supplied value with an optional validity rule.

use std::fmt;

use log::debug;

use crate::choice::Choices;
use crate::console::Console;
use crate::error::FormError;
use crate::validator::Validator;
use crate::value::{Value, ValueKind};

/// Validity as of the last `validate` call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Validity {
    /// Never validated (or re-read since the last validate).
    #[default]
    Unchecked,
    Valid,
    /// Failed, with the message to show next to the field.
    Invalid(String),
}

pub struct Field {
    prompt: String,
    kind: ValueKind,
    choices: Option<Choices>,
    value: Value,
    validator: Option<Box<dyn Validator>>,
    validity: Validity,
}

impl Field {
    /// A free-text field.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self::new(prompt.into(), ValueKind::Text, None)
    }

    /// An integer field.
    pub fn int(prompt: impl Into<String>) -> Self {
        Self::new(prompt.into(), ValueKind::Int, None)
    }

    /// An enumeration field. The table's listing is appended to the prompt
    /// so the user sees the available codes.
    pub fn choice(prompt: impl Into<String>, choices: Choices) -> Self {
        let prompt = format!("{}\n{}", prompt.into(), choices.listing());
        Self::new(prompt, ValueKind::Code, Some(choices))
    }

    fn new(prompt: String, kind: ValueKind, choices: Option<Choices>) -> Self {
        Self {
            prompt,
            kind,
            choices,
            value: Value::Empty,
            validator: None,
            validity: Validity::Unchecked,
        }
    }

    /// Attach the field's single validator.
    ///
    /// A field has exactly one validator slot; a second attach is an error
    /// rather than a silent overwrite.
    pub fn add_validator(&mut self, validator: Box<dyn Validator>) -> Result<(), FormError> {
        if self.validator.is_some() {
            return Err(FormError::ValidatorAlreadyAttached {
                prompt: self.prompt.clone(),
            });
        }
        self.validator = Some(validator);
        Ok(())
    }

    /// Prompt and read one value, overwriting the previous one.
    ///
    /// No validation happens here; a line that does not parse as this
    /// field's kind stores the `Empty` sentinel.
    pub fn read_input(&mut self, console: &mut dyn Console) -> Result<(), FormError> {
        let raw = console.prompt(&self.prompt)?;
        self.value = Value::parse(self.kind, &raw);
        self.validity = Validity::Unchecked;
        debug!("field read: {:?} -> {:?}", first_line(&self.prompt), self.value);
        Ok(())
    }

    /// Recompute and store validity. A field with no validator is always
    /// valid; an empty value with a validator attached always fails.
    pub fn validate(&mut self) -> bool {
        let ok = match &self.validator {
            None => true,
            Some(v) => !self.value.is_empty() && v.validate(&self.value),
        };
        self.validity = if ok {
            Validity::Valid
        } else {
            let msg = self
                .validator
                .as_ref()
                .map(|v| v.message().to_string())
                .unwrap_or_default();
            Validity::Invalid(msg)
        };
        ok
    }

    /// Mark the field invalid from outside its own validator, used by
    /// cross-field rules so the next fill re-prompts it.
    pub(crate) fn mark_invalid(&mut self, message: &str) {
        self.validity = Validity::Invalid(message.to_string());
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn validity(&self) -> &Validity {
        &self.validity
    }

    pub fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }

    fn render_value(&self) -> String {
        match &self.value {
            Value::Empty => String::new(),
            Value::Text(s) => s.clone(),
            Value::Int(n) => n.to_string(),
            Value::Code(c) => match self.choices.as_ref().and_then(|t| t.label(*c)) {
                Some(name) => name.to_string(),
                // Unknown code: show the raw number
                None => c.to_string(),
            },
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.prompt)?;
        write!(f, "{}", self.render_value())?;
        if let Validity::Invalid(msg) = &self.validity {
            write!(f, "\n  !! invalid: {msg}")?;
        }
        Ok(())
    }
}

fn first_line(prompt: &str) -> &str {
    prompt.lines().next().unwrap_or("")
}
