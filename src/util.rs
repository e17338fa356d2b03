use std::str::FromStr as _;

use fractic_server_error::ServerError;

use crate::{
    data::models::compliance_policy_model::CompliancePolicyModel,
    domain::{
        logic::normalizer::Normalizer,
        usecases::compute_compliance_usecase::{
            ComputeComplianceUsecase as _, ComputeComplianceUsecaseImpl,
        },
    },
    entities::{
        AttendanceRecord, ComplianceReport, CompliancePolicy, DateRange, SourceRecord,
        UserIdentity,
    },
    presentation::report_printer::ReportPrinter,
    repositories::{AttendanceRepository, AttendanceRepositoryImpl},
};

pub type Report = String;

pub struct RtoAttendanceUtil<R = AttendanceRepositoryImpl>
where
    R: AttendanceRepository,
{
    compute_usecase: ComputeComplianceUsecaseImpl<R>,
    normalizer: Normalizer,
    printer: ReportPrinter,
}

impl RtoAttendanceUtil {
    pub fn new() -> Self {
        Self::with_policy(CompliancePolicy::default())
    }

    pub fn with_policy(policy: CompliancePolicy) -> Self {
        Self::with_repository(AttendanceRepositoryImpl::new(), policy)
    }

    /// Builds the util from a RON policy such as
    /// `(weekly_target: 3, top_locations: 3)`.
    pub fn from_ron_policy(policy: &str) -> Result<Self, ServerError> {
        let policy: CompliancePolicy = CompliancePolicyModel::from_str(policy)?.into();
        Ok(Self::with_policy(policy))
    }
}

impl<R: AttendanceRepository> RtoAttendanceUtil<R> {
    /// Uses a caller-provided record store instead of the built-in CSV/JSON
    /// loader.
    pub fn with_repository(repository: R, policy: CompliancePolicy) -> Self {
        Self {
            compute_usecase: ComputeComplianceUsecaseImpl::with_repository(repository, policy),
            normalizer: Normalizer::new(),
            printer: ReportPrinter::new(policy.weekly_target),
        }
    }

    /// Normalizes raw badge scans and user entries. Fails on the first
    /// invalid record.
    pub fn normalize(
        &self,
        source_records: Vec<SourceRecord>,
    ) -> Result<Vec<AttendanceRecord>, ServerError> {
        self.normalizer.process(source_records)
    }

    /// Computes weekly scores and the summary for an in-memory snapshot,
    /// optionally restricted to one user.
    pub fn compute(
        &self,
        records: &[AttendanceRecord],
        range: DateRange,
        user: Option<&UserIdentity>,
    ) -> ComplianceReport {
        self.compute_usecase.compute(records, range, user)
    }

    pub async fn from_string(
        &self,
        badge_scans_csv: &str,
        user_entries_json: &str,
        range: DateRange,
        user: Option<&UserIdentity>,
    ) -> Result<(ComplianceReport, Report), ServerError> {
        let report = self
            .compute_usecase
            .from_string(badge_scans_csv, user_entries_json, range, user)
            .await?;
        let printed = self.printer.print_report(&report);
        Ok((report, printed))
    }

    pub async fn from_file<P>(
        &self,
        badge_scans_csv: P,
        user_entries_json: P,
        range: DateRange,
        user: Option<&UserIdentity>,
    ) -> Result<(ComplianceReport, Report), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let report = self
            .compute_usecase
            .from_file(badge_scans_csv, user_entries_json, range, user)
            .await?;
        let printed = self.printer.print_report(&report);
        Ok((report, printed))
    }

    pub fn print_report(&self, report: &ComplianceReport) -> Report {
        self.printer.print_report(report)
    }
}
