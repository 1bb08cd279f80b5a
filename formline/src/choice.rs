//! Named-value enumerations: code -> display-name tables.

/// An ordered, immutable table mapping small integer codes to display names.
///
/// Codes are assigned contiguously starting at 1, in the order the names are
/// given. Built once at form-setup time; a code outside the table is not an
/// error here - rendering falls back to the raw number, and a range validator
/// rejects it at validate time.
#[derive(Debug, Clone)]
pub struct Choices {
    entries: Vec<(u32, String)>,
}

impl Choices {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| (i as u32 + 1, name.into()))
            .collect();
        Self { entries }
    }

    /// Display name for a code, or `None` when the code is not in the table.
    pub fn label(&self, code: u32) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| name.as_str())
    }

    /// Multi-line "code - name" text, one entry per line, for prompts.
    pub fn listing(&self) -> String {
        let mut out = String::new();
        for (code, name) in &self.entries {
            out.push_str(&format!("{code} - {name}\n"));
        }
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest code in the table (0 for an empty table).
    pub fn last_code(&self) -> u32 {
        self.entries.last().map(|(c, _)| *c).unwrap_or(0)
    }
}
