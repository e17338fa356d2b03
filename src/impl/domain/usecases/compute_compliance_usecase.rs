use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    data::repositories::attendance_repository_impl::AttendanceRepositoryImpl,
    domain::{
        logic::{compliance_processor::ComplianceProcessor, user_filter::filter_for_user},
        repositories::attendance_repository::AttendanceRepository,
    },
    entities::{AttendanceRecord, ComplianceReport, CompliancePolicy, DateRange, UserIdentity},
};

#[async_trait]
pub trait ComputeComplianceUsecase: Send + Sync {
    async fn from_string(
        &self,
        badge_scans_csv: &str,
        user_entries_json: &str,
        range: DateRange,
        user: Option<&UserIdentity>,
    ) -> Result<ComplianceReport, ServerError>;

    async fn from_file<P>(
        &self,
        badge_scans_csv: P,
        user_entries_json: P,
        range: DateRange,
        user: Option<&UserIdentity>,
    ) -> Result<ComplianceReport, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub struct ComputeComplianceUsecaseImpl<
    R1 = AttendanceRepositoryImpl, // Default.
> where
    R1: AttendanceRepository,
{
    attendance_repository: R1,
    policy: CompliancePolicy,
}

#[async_trait]
impl<R1> ComputeComplianceUsecase for ComputeComplianceUsecaseImpl<R1>
where
    R1: AttendanceRepository,
{
    async fn from_string(
        &self,
        badge_scans_csv: &str,
        user_entries_json: &str,
        range: DateRange,
        user: Option<&UserIdentity>,
    ) -> Result<ComplianceReport, ServerError> {
        let records = self
            .attendance_repository
            .from_string(badge_scans_csv, user_entries_json)?;
        Ok(self.compute(&records, range, user))
    }

    async fn from_file<P>(
        &self,
        badge_scans_csv: P,
        user_entries_json: P,
        range: DateRange,
        user: Option<&UserIdentity>,
    ) -> Result<ComplianceReport, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let records = self
            .attendance_repository
            .from_file(badge_scans_csv, user_entries_json)
            .await?;
        Ok(self.compute(&records, range, user))
    }
}

impl<R1: AttendanceRepository> ComputeComplianceUsecaseImpl<R1> {
    pub(crate) fn with_repository(attendance_repository: R1, policy: CompliancePolicy) -> Self {
        ComputeComplianceUsecaseImpl {
            attendance_repository,
            policy,
        }
    }

    pub(crate) fn compute(
        &self,
        records: &[AttendanceRecord],
        range: DateRange,
        user: Option<&UserIdentity>,
    ) -> ComplianceReport {
        match user {
            Some(identity) => {
                let owned = filter_for_user(records, identity);
                debug!(user = %identity.id, records = owned.len(), "filtered records for user");
                ComplianceProcessor::new(owned, range, &self.policy).process()
            }
            None => ComplianceProcessor::new(records, range, &self.policy).process(),
        }
    }
}

impl ComputeComplianceUsecaseImpl {
    pub(crate) fn new(policy: CompliancePolicy) -> Self {
        Self::with_repository(AttendanceRepositoryImpl::new(), policy)
    }
}
