use fractic_server_error::ServerError;

use crate::{entities::BadgeScan, errors::InvalidCsv};

pub trait BadgeScansCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<BadgeScan>, ServerError>;
}

pub struct BadgeScansCsvDatasourceImpl;

impl BadgeScansCsvDatasourceImpl {
    pub fn new() -> Self {
        Self
    }
}

impl BadgeScansCsvDatasource for BadgeScansCsvDatasourceImpl {
    /// Expects a header row followed by
    /// `id,date,user_id,office_location,note` columns.
    fn from_string(&self, s: &str) -> Result<Vec<BadgeScan>, ServerError> {
        let optional = |v: Option<&str>| match v.map(str::trim) {
            Some(v) if !v.is_empty() => Some(v.to_string()),
            _ => None,
        };
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).map(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("");
                    let raw_date = r.get(1).unwrap_or("");
                    let raw_user_id = r.get(2).unwrap_or("");

                    // Build. Dates are validated by the normalizer.
                    BadgeScan {
                        id: raw_id.trim().to_string(),
                        date: raw_date.to_string(),
                        user_id: raw_user_id.trim().to_string(),
                        office_location: optional(r.get(3)),
                        note: optional(r.get(4)),
                    }
                })
            })
            .collect()
    }
}
