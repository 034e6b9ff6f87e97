use clap::ValueEnum;

/// Named bulk-deletion window applied to the attendance ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RetentionScope {
    /// Entries on the current calendar date
    Day,
    /// Rolling window: now minus 6 days
    Week,
    /// Rolling window: now minus 29 days
    Month,
    /// Every entry
    All,
}

impl RetentionScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            RetentionScope::Day => "day",
            RetentionScope::Week => "week",
            RetentionScope::Month => "month",
            RetentionScope::All => "all",
        }
    }
}
