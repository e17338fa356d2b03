// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod badge_scans_csv_datasource;
        pub(crate) mod user_entries_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod compliance_policy_model;
        pub(crate) mod user_entry_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod attendance_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod attendance_record;
        pub(crate) mod compliance_policy;
        pub(crate) mod compliance_report;
        pub(crate) mod date_range;
        pub(crate) mod source_record;
        pub(crate) mod user_identity;
        pub(crate) mod week;
    }
    pub(crate) mod logic {
        pub(crate) mod aggregator;
        pub(crate) mod bucketizer;
        pub(crate) mod compliance_processor;
        pub(crate) mod compliance_scorer;
        pub(crate) mod normalizer;
        pub(crate) mod range_utils;
        pub(crate) mod user_filter;
        pub(crate) mod weekday_filter;
    }
    pub(crate) mod repositories {
        pub(crate) mod attendance_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod compute_compliance_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod report_printer;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::attendance_record::*;
        pub use crate::domain::entities::compliance_policy::*;
        pub use crate::domain::entities::compliance_report::*;
        pub use crate::domain::entities::date_range::*;
        pub use crate::domain::entities::source_record::*;
        pub use crate::domain::entities::user_identity::*;
        pub use crate::domain::entities::week::*;
    }

    pub mod logic {
        pub use crate::domain::logic::aggregator::top_office_locations;
        pub use crate::domain::logic::bucketizer::{bucketize, weeks_between};
        pub use crate::domain::logic::compliance_scorer::{compliance_rate, weekly_average};
        pub use crate::domain::logic::range_utils::{
            count_workdays, end_of_week, is_same_week, is_weekend, start_of_week, weeks_in_range,
        };
        pub use crate::domain::logic::user_filter::filter_for_user;
        pub use crate::domain::logic::weekday_filter::filter_business_days;
    }

    pub mod repositories {
        pub use crate::data::repositories::attendance_repository_impl::AttendanceRepositoryImpl;
        pub use crate::domain::repositories::attendance_repository::AttendanceRepository;
    }
}
