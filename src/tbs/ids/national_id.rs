use std::fmt;

/// Client identity. Assumed unique, never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NationalId(String);

impl From<&str> for NationalId {
    fn from(id: &str) -> Self {
        Self(id.trim().to_string())
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
