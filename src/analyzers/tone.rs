use std::fmt;

/// Categorical sentiment label derived from a company's overall rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Mixed,
    Negative,
}

impl Tone {
    /// Classifies an unrounded overall rating.
    ///
    /// | Range              | Tone               |
    /// |--------------------|--------------------|
    /// | >= 3.0             | generally positive |
    /// | >= 2.5 and < 3.0   | mixed / neutral    |
    /// | < 2.5              | generally negative |
    pub fn from_overall(overall: f64) -> Self {
        match overall {
            o if o >= 3.0 => Tone::Positive,
            o if o >= 2.5 => Tone::Mixed,
            _ => Tone::Negative,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Positive => "generally positive",
            Tone::Mixed => "mixed / neutral",
            Tone::Negative => "generally negative",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
