use std::fmt;

/// Account identifier, unique within a client
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountNumber {
    fn from(number: &str) -> Self {
        Self(number.trim().to_string())
    }
}

impl From<String> for AccountNumber {
    fn from(number: String) -> Self {
        Self::from(number.as_str())
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
