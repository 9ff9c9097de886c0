use std::fmt;

/// Client identifier (CPF), kept exactly as typed apart from surrounding whitespace
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaxId(String);

impl TaxId {
    pub fn new(value: impl AsRef<str>) -> Self {
        return Self(value.as_ref().trim().to_string());
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
