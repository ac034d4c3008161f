use std::{fmt, ops::Add};

use im::{HashMap, Vector};

#[derive(Default, Hash, Eq, PartialEq, Clone, Debug)]
pub struct MemberId(String);

impl MemberId {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Default, Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct MonetaryAmount(f64);

impl MonetaryAmount {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Add for MonetaryAmount {
    type Output = MonetaryAmount;

    fn add(self, rhs: Self) -> Self::Output {
        MonetaryAmount(self.value() + rhs.value())
    }
}

/// Shortest text that parses back to the same value, padded to at least two
/// decimals. Digits are never dropped.
impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        if !self.0.is_finite() {
            return f.write_str(&digits);
        }
        match digits.split_once('.') {
            Some((_, fraction)) if fraction.len() >= 2 => f.write_str(&digits),
            Some((_, fraction)) => write!(f, "{}{}", digits, "0".repeat(2 - fraction.len())),
            None => write!(f, "{}.00", digits),
        }
    }
}

/// Member id to display name. Built once per run and only read afterwards.
pub type MemberLookup = HashMap<MemberId, String>;

/// A ledger row whose amount parsed. The id is not yet known to be valid.
#[derive(Clone, PartialEq, Debug)]
pub struct TransactionRecord {
    pub id: MemberId,
    pub name: String,
    pub amount: MonetaryAmount,
}

impl TransactionRecord {
    pub fn new<S: Into<String>>(id: MemberId, name: S, amount: MonetaryAmount) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
        }
    }
}

/// Parsed ledger plus the number of rows dropped for an unparsable amount.
#[derive(Default, Debug)]
pub struct Payments {
    pub records: Vec<TransactionRecord>,
    pub skipped: usize,
}

/// A transaction that matched a registered member.
#[derive(Clone, PartialEq, Debug)]
pub struct CleanEntry {
    pub id: MemberId,
    pub name: String,
    pub amount: MonetaryAmount,
}

/// Largest accepted payment. Stays at its default (no name, no id, zero) until
/// a payment strictly exceeds the current amount.
#[derive(Default, Clone, PartialEq, Debug)]
pub struct HighestPayer {
    pub name: Option<String>,
    pub id: Option<MemberId>,
    pub amount: MonetaryAmount,
}

impl fmt::Display for HighestPayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, ID: {}, Amount: {}",
            self.name.as_deref().unwrap_or("None"),
            self.id.as_ref().map(MemberId::value).unwrap_or("None"),
            self.amount
        )
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rejection {
    /// The id does not appear in the member registry.
    UnknownId,
    /// The id is registered under a different name.
    NameMismatch,
}

#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct RejectionTally {
    pub unknown_id: usize,
    pub name_mismatch: usize,
}

impl RejectionTally {
    pub fn record(&self, rejection: Rejection) -> Self {
        match rejection {
            Rejection::UnknownId => Self {
                unknown_id: self.unknown_id + 1,
                ..*self
            },
            Rejection::NameMismatch => Self {
                name_mismatch: self.name_mismatch + 1,
                ..*self
            },
        }
    }
}

/// Running state threaded through the reconciliation fold.
#[derive(Default, Clone)]
pub struct ReconState {
    pub entries: Vector<CleanEntry>,
    pub total: MonetaryAmount,
    pub highest: HighestPayer,
    pub rejected: RejectionTally,
}

impl ReconState {
    pub fn map_entries<F: FnOnce(&Vector<CleanEntry>) -> Vector<CleanEntry>>(&self, f: F) -> Self {
        Self {
            entries: f(&self.entries),
            ..self.clone()
        }
    }

    pub fn map_total<F: FnOnce(MonetaryAmount) -> MonetaryAmount>(&self, f: F) -> Self {
        Self {
            total: f(self.total),
            ..self.clone()
        }
    }

    pub fn map_highest<F: FnOnce(&HighestPayer) -> HighestPayer>(&self, f: F) -> Self {
        Self {
            highest: f(&self.highest),
            ..self.clone()
        }
    }

    pub fn map_rejected<F: FnOnce(RejectionTally) -> RejectionTally>(&self, f: F) -> Self {
        Self {
            rejected: f(self.rejected),
            ..self.clone()
        }
    }
}

/// Final output of the reconciler, in source ledger order.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub entries: Vec<CleanEntry>,
    pub total: MonetaryAmount,
    pub highest: HighestPayer,
    pub rejected: RejectionTally,
}

impl Reconciliation {
    pub fn from_state(state: ReconState) -> Self {
        Self {
            entries: state.entries.into_iter().collect(),
            total: state.total,
            highest: state.highest,
            rejected: state.rejected,
        }
    }
}

/// What a finished run reports. `Display` renders the three stdout lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub clean_rows: usize,
    pub total: MonetaryAmount,
    pub highest: HighestPayer,
    pub skipped_rows: usize,
    pub rejected: RejectionTally,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total clean rows: {}", self.clean_rows)?;
        writeln!(f, "Total Paid Amount: ${}", self.total)?;
        write!(f, "Highest Payer: {}", self.highest)
    }
}

#[cfg(test)]
mod tests {
    use super::{HighestPayer, MemberId, MonetaryAmount, Rejection, RejectionTally, Summary};

    #[test]
    fn amounts_render_with_at_least_two_decimals() {
        assert_eq!(MonetaryAmount::new(25.5).to_string(), "25.50");
        assert_eq!(MonetaryAmount::new(40.0).to_string(), "40.00");
        assert_eq!(MonetaryAmount::new(0.0).to_string(), "0.00");
        assert_eq!(MonetaryAmount::new(12.25).to_string(), "12.25");
    }

    #[test]
    fn amounts_keep_every_digit() {
        assert_eq!(MonetaryAmount::new(0.004).to_string(), "0.004");
        assert_eq!(MonetaryAmount::new(10.125).to_string(), "10.125");
        let total = MonetaryAmount::new(0.1) + MonetaryAmount::new(0.2);
        assert_eq!(total.to_string(), "0.30000000000000004");
        assert_eq!(total.to_string().parse::<f64>().unwrap(), total.value());
    }

    #[test]
    fn placeholder_highest_payer_renders_none() {
        assert_eq!(HighestPayer::default().to_string(), "None, ID: None, Amount: 0.00");
    }

    #[test]
    fn tally_counts_each_reason() {
        let tally = RejectionTally::default()
            .record(Rejection::UnknownId)
            .record(Rejection::NameMismatch)
            .record(Rejection::UnknownId);
        assert_eq!(tally.unknown_id, 2);
        assert_eq!(tally.name_mismatch, 1);
    }

    #[test]
    fn summary_prints_three_lines() {
        let summary = Summary {
            clean_rows: 1,
            total: MonetaryAmount::new(25.5),
            highest: HighestPayer {
                name: Some("Jane Doe".to_string()),
                id: Some(MemberId::new("1")),
                amount: MonetaryAmount::new(25.5),
            },
            skipped_rows: 0,
            rejected: RejectionTally::default(),
        };
        assert_eq!(
            summary.to_string(),
            "Total clean rows: 1\nTotal Paid Amount: $25.50\nHighest Payer: Jane Doe, ID: 1, Amount: 25.50"
        );
    }
}
