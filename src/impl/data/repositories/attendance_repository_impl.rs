use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        badge_scans_csv_datasource::{BadgeScansCsvDatasource, BadgeScansCsvDatasourceImpl},
        user_entries_json_datasource::{UserEntriesJsonDatasource, UserEntriesJsonDatasourceImpl},
    },
    domain::{
        logic::normalizer::Normalizer, repositories::attendance_repository::AttendanceRepository,
    },
    entities::{AttendanceRecord, SourceRecord},
    errors::ReadError,
};

pub struct AttendanceRepositoryImpl<
    DS1 = BadgeScansCsvDatasourceImpl,
    DS2 = UserEntriesJsonDatasourceImpl,
> where
    DS1: BadgeScansCsvDatasource,
    DS2: UserEntriesJsonDatasource,
{
    badge_scans_datasource: DS1,
    user_entries_datasource: DS2,
    normalizer: Normalizer,
}

#[async_trait]
impl<DS1, DS2> AttendanceRepository for AttendanceRepositoryImpl<DS1, DS2>
where
    DS1: BadgeScansCsvDatasource,
    DS2: UserEntriesJsonDatasource,
{
    fn from_string(
        &self,
        badge_scans_csv: &str,
        user_entries_json: &str,
    ) -> Result<Vec<AttendanceRecord>, ServerError> {
        let source_records: Vec<SourceRecord> = self
            .badge_scans_datasource
            .from_string(badge_scans_csv)?
            .into_iter()
            .map(SourceRecord::from)
            .chain(
                self.user_entries_datasource
                    .from_string(user_entries_json)?
                    .into_iter()
                    .map(SourceRecord::from),
            )
            .collect();
        self.normalizer.process(source_records)
    }

    async fn from_file<P>(
        &self,
        badge_scans_csv: P,
        user_entries_json: P,
    ) -> Result<Vec<AttendanceRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let badge_scans = tokio::fs::read_to_string(badge_scans_csv)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        let user_entries = tokio::fs::read_to_string(user_entries_json)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&badge_scans, &user_entries)
    }
}

impl AttendanceRepositoryImpl {
    pub fn new() -> Self {
        AttendanceRepositoryImpl {
            badge_scans_datasource: BadgeScansCsvDatasourceImpl::new(),
            user_entries_datasource: UserEntriesJsonDatasourceImpl::new(),
            normalizer: Normalizer::new(),
        }
    }
}
