use serde::{Deserialize, Serialize};

/// Direction of an attendance sign event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryType {
    In,
    Out,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::In => "IN",
            EntryType::Out => "OUT",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "IN" => Some(EntryType::In),
            "OUT" => Some(EntryType::Out),
            _ => None,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EntryType::In)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_strings_are_uppercase() {
        assert_eq!(EntryType::In.to_db_str(), "IN");
        assert_eq!(EntryType::from_db_str("OUT"), Some(EntryType::Out));
        assert_eq!(EntryType::from_db_str("out"), None);
    }
}
