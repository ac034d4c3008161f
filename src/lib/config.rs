use std::path::{Path, PathBuf};

/// Where the display name of a member comes from in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameColumns {
    /// A single column holding the full name.
    Full(String),
    /// Separate first and last name columns, joined with one space.
    Split { first: String, last: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberColumns {
    pub id: String,
    pub name: NameColumns,
}

impl Default for MemberColumns {
    fn default() -> Self {
        Self {
            id: "id".to_string(),
            name: NameColumns::Full("name".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentColumns {
    pub id: String,
    pub name: String,
    pub amount: String,
}

impl Default for PaymentColumns {
    fn default() -> Self {
        Self {
            id: "id".to_string(),
            name: "name".to_string(),
            amount: "price".to_string(),
        }
    }
}

/// Locations and column naming for one deployment. Every stage takes this
/// explicitly so that it can be pointed at a scratch directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub member_file: String,
    pub payment_file: String,
    pub output_file: String,
    pub member_columns: MemberColumns,
    pub payment_columns: PaymentColumns,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            member_file: "memberInfo.csv".to_string(),
            payment_file: "memberPaidInfo.csv".to_string(),
            output_file: "cleanData.csv".to_string(),
            member_columns: MemberColumns::default(),
            payment_columns: PaymentColumns::default(),
        }
    }
}

impl Config {
    /// Registry variant keeping first and last names in separate columns.
    pub fn split_names() -> Self {
        Self {
            output_dir: PathBuf::from("clean_output"),
            member_columns: MemberColumns {
                id: "id".to_string(),
                name: NameColumns::Split {
                    first: "first_name".to_string(),
                    last: "last_name".to_string(),
                },
            },
            ..Self::default()
        }
    }

    pub fn rooted_at<P: AsRef<Path>>(self, base: P) -> Self {
        let base = base.as_ref();
        Self {
            data_dir: base.join(&self.data_dir),
            output_dir: base.join(&self.output_dir),
            ..self
        }
    }

    pub fn member_path(&self) -> PathBuf {
        self.data_dir.join(&self.member_file)
    }

    pub fn payment_path(&self) -> PathBuf {
        self.data_dir.join(&self.payment_file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{Config, NameColumns};

    #[test]
    fn default_points_at_data_and_output() {
        let config = Config::default();
        assert_eq!(config.member_path(), PathBuf::from("data/memberInfo.csv"));
        assert_eq!(config.payment_path(), PathBuf::from("data/memberPaidInfo.csv"));
        assert_eq!(config.output_path(), PathBuf::from("output/cleanData.csv"));
        assert_eq!(config.payment_columns.amount, "price");
    }

    #[test]
    fn split_names_only_changes_registry_columns_and_output_dir() {
        let config = Config::split_names();
        let default = Config::default();
        assert_eq!(
            config.member_columns.name,
            NameColumns::Split {
                first: "first_name".to_string(),
                last: "last_name".to_string()
            }
        );
        assert_eq!(config.output_dir, PathBuf::from("clean_output"));
        assert_eq!(config.data_dir, default.data_dir);
        assert_eq!(config.payment_columns, default.payment_columns);
    }

    #[test]
    fn rooted_at_prefixes_both_directories() {
        let config = Config::default().rooted_at("/tmp/run");
        assert_eq!(config.member_path(), PathBuf::from("/tmp/run/data/memberInfo.csv"));
        assert_eq!(config.output_path(), PathBuf::from("/tmp/run/output/cleanData.csv"));
    }
}
