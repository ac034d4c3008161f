use std::{fs, path::Path};

use serde::Serialize;

#[derive(Serialize)]
struct CleanRow {
    member_id: &'static str,
    member_name: &'static str,
    paid_amount: &'static str,
}

impl CleanRow {
    fn new(member_id: &'static str, member_name: &'static str, paid_amount: &'static str) -> Self {
        Self {
            member_id,
            member_name,
            paid_amount,
        }
    }
}

// Only used during testing so no need to return result
pub fn create_csv(rows: Vec<[&'static str; 3]>) -> String {
    let clean_rows: Vec<CleanRow> = rows
        .into_iter()
        .map(|r| CleanRow::new(r[0], r[1], r[2]))
        .collect();

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);
    wtr.write_record(["member_id", "member_name", "paid_amount"])
        .unwrap();
    for c in clean_rows {
        wtr.serialize(c).unwrap();
    }
    wtr.flush().unwrap();
    String::from_utf8(wtr.into_inner().unwrap()).unwrap()
}

/// Copies a fixture's member and payment tables into `<root>/data` under the
/// default file names.
pub fn stage_inputs(root: &Path, members: &Path, payments: &Path) {
    let data = root.join("data");
    fs::create_dir_all(&data).unwrap();
    fs::copy(members, data.join("memberInfo.csv")).unwrap();
    fs::copy(payments, data.join("memberPaidInfo.csv")).unwrap();
}

/// Sums the amount column of a clean table.
pub fn sum_amounts(csv: &str) -> f64 {
    let mut rdr = csv::Reader::from_reader(csv.as_bytes());
    rdr.records()
        .map(|r| r.unwrap()[2].parse::<f64>().unwrap())
        .sum()
}
