pub mod choice;
pub mod console;
pub mod error;
pub mod field;
pub mod form;
pub mod rule;
pub mod validator;
pub mod value;

pub use choice::Choices;
pub use console::Console;
pub use error::FormError;
pub use field::{Field, Validity};
pub use form::{FieldId, Form};
pub use rule::{CompatRule, CrossRule};
pub use validator::{IdValidator, NoDigitValidator, RangeValidator, Validator};
pub use value::{Value, ValueKind};
