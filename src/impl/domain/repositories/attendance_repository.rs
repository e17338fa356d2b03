use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::AttendanceRecord;

/// Source of normalized attendance records. Implementations own parsing,
/// storage and transport; the compliance engine only sees the returned
/// snapshot.
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    fn from_string(
        &self,
        badge_scans_csv: &str,
        user_entries_json: &str,
    ) -> Result<Vec<AttendanceRecord>, ServerError>;

    async fn from_file<P>(
        &self,
        badge_scans_csv: P,
        user_entries_json: P,
    ) -> Result<Vec<AttendanceRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
