use std::{fs, fs::File, io::Read};

use ::serde::{Serialize, Serializer};
use csv::StringRecord;
use log::{debug, info};

use crate::config::{Config, MemberColumns, NameColumns, PaymentColumns};
use crate::error::{ReconError, Result};
use crate::types::{
    CleanEntry, MemberId, MemberLookup, MonetaryAmount, Payments, TransactionRecord,
};

const CLEAN_HEADER: [&str; 3] = ["member_id", "member_name", "paid_amount"];

fn round_trip<S: Serializer>(x: &MonetaryAmount, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(&x.to_string())
}

#[derive(Debug, Serialize)]
pub struct CleanEntryEntity {
    member_id: String,
    member_name: String,
    #[serde(serialize_with = "round_trip")]
    paid_amount: MonetaryAmount,
}

impl CleanEntryEntity {
    pub fn from_entry(entry: &CleanEntry) -> Self {
        Self {
            member_id: entry.id.value().to_string(),
            member_name: entry.name.clone(),
            paid_amount: entry.amount,
        }
    }
}

fn reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::Fields)
        .from_reader(source)
}

fn column_index(headers: &StringRecord, column: &str, origin: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| ReconError::MissingColumn {
            file: origin.to_string(),
            column: column.to_string(),
        })
}

fn field<'r>(record: &'r StringRecord, idx: usize, column: &str, origin: &str) -> Result<&'r str> {
    record.get(idx).ok_or_else(|| ReconError::MissingColumn {
        file: origin.to_string(),
        column: column.to_string(),
    })
}

/// Header positions of the name column(s), with the column names kept for errors.
#[derive(Clone, Copy)]
enum NameIdx<'c> {
    Full(usize, &'c str),
    Split((usize, &'c str), (usize, &'c str)),
}

/// Builds the id -> display name lookup. A later row with an already seen id
/// replaces the earlier one.
pub fn read_members<R: Read>(source: R, origin: &str, columns: &MemberColumns) -> Result<MemberLookup> {
    let mut reader = reader(source);
    let headers = reader.headers()?.clone();
    let id_idx = column_index(&headers, &columns.id, origin)?;
    let name_idx = match &columns.name {
        NameColumns::Full(name) => NameIdx::Full(column_index(&headers, name, origin)?, name),
        NameColumns::Split { first, last } => NameIdx::Split(
            (column_index(&headers, first, origin)?, first),
            (column_index(&headers, last, origin)?, last),
        ),
    };

    let mut members = MemberLookup::new();
    for row in reader.records() {
        // fail if a row cannot be read, member identity drives everything downstream
        let row = row?;
        let id = field(&row, id_idx, &columns.id, origin)?.trim();
        let name = match name_idx {
            NameIdx::Full(idx, col) => field(&row, idx, col, origin)?.trim().to_string(),
            NameIdx::Split((f_idx, f_col), (l_idx, l_col)) => {
                let first = field(&row, f_idx, f_col, origin)?.trim();
                let last = field(&row, l_idx, l_col, origin)?.trim();
                format!("{} {}", first, last).trim().to_string()
            }
        };
        members.insert(MemberId::new(id), name);
    }

    info!("loaded {} members from {}", members.len(), origin);
    Ok(members)
}

/// Parses the ledger in file order. Rows with an amount that is not a number
/// are dropped and counted; unknown ids are left for the reconciler.
pub fn read_payments<R: Read>(source: R, origin: &str, columns: &PaymentColumns) -> Result<Payments> {
    let mut reader = reader(source);
    let headers = reader.headers()?.clone();
    // no header line at all is an empty ledger, not a structural error
    if headers.is_empty() {
        info!("{} is empty, no payments loaded", origin);
        return Ok(Payments::default());
    }
    let id_idx = column_index(&headers, &columns.id, origin)?;
    let name_idx = column_index(&headers, &columns.name, origin)?;
    let amount_idx = column_index(&headers, &columns.amount, origin)?;

    let mut payments = Payments::default();
    for row in reader.records() {
        let row = row?;
        let id = field(&row, id_idx, &columns.id, origin)?.trim();
        let name = field(&row, name_idx, &columns.name, origin)?.trim();
        let raw_amount = field(&row, amount_idx, &columns.amount, origin)?;
        match raw_amount.trim().parse::<f64>() {
            Ok(amount) => payments.records.push(TransactionRecord::new(
                MemberId::new(id),
                name,
                MonetaryAmount::new(amount),
            )),
            Err(_) => {
                debug!("skipping payment for id {}: amount {:?} is not a number", id, raw_amount);
                payments.skipped += 1;
            }
        }
    }

    info!(
        "loaded {} payments from {} ({} skipped)",
        payments.records.len(),
        origin,
        payments.skipped
    );
    Ok(payments)
}

pub fn load_members(config: &Config) -> Result<MemberLookup> {
    let path = config.member_path();
    let file = File::open(&path)?;
    read_members(file, &path.display().to_string(), &config.member_columns)
}

pub fn load_payments(config: &Config) -> Result<Payments> {
    let path = config.payment_path();
    let file = File::open(&path)?;
    read_payments(file, &path.display().to_string(), &config.payment_columns)
}

/// Renders the clean table, header first, one row per entry in the given order.
pub fn output_csv(entries: &[CleanEntry]) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);

    wtr.write_record(CLEAN_HEADER)?;
    for entry in entries {
        wtr.serialize(CleanEntryEntity::from_entry(entry))?
    }

    wtr.flush()?;
    let data = String::from_utf8(wtr.into_inner().map_err(|e| e.into_error())?)?;
    Ok(data)
}

/// Replaces whatever was at the configured output path.
pub fn write_clean_data(config: &Config, entries: &[CleanEntry]) -> Result<()> {
    let data = output_csv(entries)?;
    let path = config.output_path();
    fs::write(&path, data)?;
    info!("wrote {} clean rows to {}", entries.len(), path.display());
    Ok(())
}
