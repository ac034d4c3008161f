mod config;
mod error;
mod guard;
mod io;
mod reconcile;
mod types;
mod utils;

pub use config::{Config, MemberColumns, NameColumns, PaymentColumns};
pub use error::{ReconError, Result};
pub use types::{HighestPayer, MemberId, MonetaryAmount, RejectionTally, Summary};

use guard::check_directories;
use io::{load_members, load_payments, write_clean_data};
use reconcile::reconcile;

/// Runs one pass: guard the directories, load both tables, reconcile and
/// write the clean table. Nothing is written unless every stage before the
/// write succeeded.
pub fn reconcile_payments(config: &Config) -> Result<Summary> {
    check_directories(config)?;

    let members = load_members(config)?;
    let payments = load_payments(config)?;

    let result = reconcile(&members, Box::new(payments.records.into_iter()));

    write_clean_data(config, &result.entries)?;
    Ok(Summary {
        clean_rows: result.entries.len(),
        total: result.total,
        highest: result.highest,
        skipped_rows: payments.skipped,
        rejected: result.rejected,
    })
}
