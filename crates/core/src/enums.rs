//! Integer enumerations mapping to SMALLINT columns.
//!
//! Discriminants are 0-based and must never be renumbered: they are the
//! values persisted in the database and exchanged with the dashboard.
//! Text-coded choices (action organisations, personnel types) live at the
//! bottom of the module as constant lists.

use crate::error::CoreError;
use crate::types::EnumId;

macro_rules! define_int_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr => $label:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Every variant in discriminant declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Return the stored SMALLINT value.
            pub fn id(self) -> EnumId {
                self as EnumId
            }

            /// Human-readable label shown in the dashboard.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl From<$name> for EnumId {
            fn from(value: $name) -> Self {
                value as EnumId
            }
        }

        impl TryFrom<EnumId> for $name {
            type Error = CoreError;

            fn try_from(value: EnumId) -> Result<Self, Self::Error> {
                match value {
                    $( v if v == $val => Ok($name::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        concat!("Invalid ", stringify!($name), " value {}"),
                        other
                    ))),
                }
            }
        }
    };
}

/// Check that `value` is a valid discriminant of `E`.
pub fn ensure_valid<E>(value: EnumId) -> Result<(), CoreError>
where
    E: TryFrom<EnumId, Error = CoreError>,
{
    E::try_from(value).map(|_| ())
}

/// Like [`ensure_valid`] but accepts an absent value.
pub fn ensure_valid_opt<E>(value: Option<EnumId>) -> Result<(), CoreError>
where
    E: TryFrom<EnumId, Error = CoreError>,
{
    match value {
        Some(v) => ensure_valid::<E>(v),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Disaster domain
// ---------------------------------------------------------------------------

define_int_enum! {
    /// IFRC region a country belongs to.
    Region {
        Africa = 0 => "Africa",
        Americas = 1 => "Americas",
        AsiaPacific = 2 => "Asia Pacific",
        Europe = 3 => "Europe",
        MiddleEastNorthAfrica = 4 => "Middle East & North Africa",
    }
}

define_int_enum! {
    /// Event alert level.
    AlertLevel {
        Green = 0 => "Green",
        Orange = 1 => "Orange",
        Red = 2 => "Red",
    }
}

define_int_enum! {
    /// Funding instrument behind an appeal.
    AppealType {
        Dref = 0 => "DREF",
        Appeal = 1 => "Emergency Appeal",
        International = 2 => "International Appeal",
    }
}

define_int_enum! {
    /// Appeal lifecycle. New appeals start as `Ongoing`.
    AppealStatus {
        Ongoing = 0 => "Ongoing",
        Closed = 1 => "Closed",
        Frozen = 2 => "Frozen",
        Archived = 3 => "Archived",
    }
}

define_int_enum! {
    /// Field report kind. Values are sparse.
    FieldReportStatus {
        Unknown = 0 => "Unknown",
        Event = 1 => "Event",
        EarlyWarning = 8 => "Early Warning",
        EventResponse = 9 => "Event Response",
    }
}

// ---------------------------------------------------------------------------
// Deployments domain
// ---------------------------------------------------------------------------

define_int_enum! {
    /// Emergency Response Unit kind.
    EruType {
        Basecamp = 0 => "Basecamp",
        Telecom = 1 => "IT & Telecom",
        Logistics = 2 => "Logistics",
        EmergencyHospital = 3 => "RCRC Emergency Hospital",
        EmergencyClinic = 4 => "RCRC Emergency Clinic",
        Relief = 5 => "Relief",
        Wash15 = 6 => "Wash M15",
        Wash20 = 7 => "Wash MSM20",
        Wash40 = 8 => "Wash M40",
    }
}

define_int_enum! {
    /// Funding channel of a project.
    ProgrammeType {
        Bilateral = 0 => "Bilateral",
        Multilateral = 1 => "Multilateral",
        Domestic = 2 => "Domestic",
    }
}

define_int_enum! {
    /// Primary sector of a project.
    Sector {
        Wash = 0 => "WASH",
        Pgi = 1 => "PGI",
        Cea = 2 => "CEA",
        Migration = 3 => "Migration",
        Health = 4 => "Health",
        Drr = 5 => "DRR",
        Shelter = 6 => "Shelter",
        Preparedness = 7 => "NS Strengthening",
    }
}

define_int_enum! {
    /// Whether a project is a long-term programme or an emergency operation.
    OperationType {
        Programme = 0 => "Programme",
        EmergencyOperation = 1 => "Emergency Operation",
    }
}

define_int_enum! {
    /// Project lifecycle.
    ProjectStatus {
        Planned = 0 => "Planned",
        Ongoing = 1 => "Ongoing",
        Completed = 2 => "Completed",
    }
}

// ---------------------------------------------------------------------------
// PER domain
// ---------------------------------------------------------------------------

define_int_enum! {
    /// Phase of the PER process a National Society is in.
    ProcessPhase {
        Baseline = 0 => "Baseline",
        Orientation = 1 => "Orientation",
        Assessment = 2 => "Assessment",
        Prioritization = 3 => "Prioritization",
        PlanOfAction = 4 => "Plan of Action",
        ActionAndAccountability = 5 => "Action and Accountability",
    }
}

define_int_enum! {
    /// Answer to a single PER question.
    FormStatus {
        No = 0 => "No",
        Yes = 1 => "Yes",
        NotReviewed = 2 => "Not Reviewed",
        DoesNotExist = 3 => "Does not exist",
        PartiallyExists = 4 => "Partially exists",
        NeedImprovements = 5 => "Need improvements",
        ExistCouldBeStrengthened = 6 => "Exist, could be strengthened",
        HighPerformance = 7 => "High Performance",
    }
}

define_int_enum! {
    /// Language a PER form was filled in.
    Language {
        Spanish = 0 => "Spanish",
        French = 1 => "French",
        English = 2 => "English",
    }
}

define_int_enum! {
    /// Work plan priority.
    PriorityValue {
        Low = 0 => "Low",
        Mid = 1 => "Mid",
        High = 2 => "High",
    }
}

define_int_enum! {
    /// Work plan action status.
    WorkPlanStatus {
        Standby = 0 => "Standby",
        Ongoing = 1 => "Ongoing",
        Cancelled = 2 => "Cancelled",
        Delayed = 3 => "Delayed",
        Pending = 4 => "Pending",
        NeedImprovements = 5 => "Need Improvements",
        Finished = 6 => "Finished",
        Approved = 7 => "Approved",
        Closed = 8 => "Closed",
    }
}

define_int_enum! {
    /// Kind of capacity assessment recorded in a PER overview.
    AssessmentType {
        SelfAssessment = 0 => "Self assessment",
        Simulation = 1 => "Simulation",
        Operational = 2 => "Operational",
        PostOperational = 3 => "Post operational",
    }
}

define_int_enum! {
    /// Visibility of a PER document.
    Visibility {
        Hidden = 0 => "Hidden",
        Visible = 1 => "Visible",
    }
}

// ---------------------------------------------------------------------------
// Databank
// ---------------------------------------------------------------------------

define_int_enum! {
    /// Outcome of an ingestion run.
    CronJobStatus {
        Never = -1 => "Never",
        Successful = 0 => "Successful",
        Warned = 1 => "Warned",
        Erroneous = 2 => "Erroneous",
    }
}

// ---------------------------------------------------------------------------
// Text-coded choices
// ---------------------------------------------------------------------------

/// Actions taken by the National Society.
pub const ACTION_ORG_NATIONAL_SOCIETY: &str = "NTLS";
/// Actions taken by a foreign (partner) society.
pub const ACTION_ORG_FOREIGN_SOCIETY: &str = "PNS";
/// Actions taken by the Federation.
pub const ACTION_ORG_FEDERATION: &str = "FDRN";

const ACTION_ORGS: &[&str] = &[
    ACTION_ORG_NATIONAL_SOCIETY,
    ACTION_ORG_FOREIGN_SOCIETY,
    ACTION_ORG_FEDERATION,
];

/// Deployed personnel categories.
pub const PERSONNEL_TYPES: &[&str] = &["fact", "heop", "rdrt", "ifrc", "eru", "rr"];

/// Validate an `ActionsTaken.organization` code.
pub fn validate_action_org(org: &str) -> Result<(), CoreError> {
    if ACTION_ORGS.contains(&org) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid organization '{org}'. Must be one of: {ACTION_ORGS:?}"
        )))
    }
}

/// Validate a `Personnel.type` code.
pub fn validate_personnel_type(kind: &str) -> Result<(), CoreError> {
    if PERSONNEL_TYPES.contains(&kind) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid personnel type '{kind}'. Must be one of: {PERSONNEL_TYPES:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn appeal_status_ids_are_stable() {
        assert_eq!(AppealStatus::Ongoing.id(), 0);
        assert_eq!(AppealStatus::Closed.id(), 1);
        assert_eq!(AppealStatus::Frozen.id(), 2);
        assert_eq!(AppealStatus::Archived.id(), 3);
    }

    #[test]
    fn try_from_round_trips_every_variant() {
        for status in WorkPlanStatus::ALL {
            assert_eq!(WorkPlanStatus::try_from(status.id()).unwrap(), *status);
        }
        for ty in EruType::ALL {
            assert_eq!(EruType::try_from(ty.id()).unwrap(), *ty);
        }
    }

    #[test]
    fn unknown_discriminant_is_a_validation_error() {
        assert_matches!(FormStatus::try_from(8), Err(CoreError::Validation(msg)) if msg.contains("FormStatus"));
        assert_matches!(Region::try_from(-1), Err(CoreError::Validation(_)));
    }

    #[test]
    fn sparse_field_report_status() {
        assert_eq!(FieldReportStatus::try_from(8).unwrap(), FieldReportStatus::EarlyWarning);
        assert!(FieldReportStatus::try_from(2).is_err());
    }

    #[test]
    fn cron_job_never_is_negative() {
        assert_eq!(CronJobStatus::Never.id(), -1);
        assert_eq!(CronJobStatus::try_from(-1).unwrap(), CronJobStatus::Never);
        assert_eq!(CronJobStatus::Erroneous.label(), "Erroneous");
    }

    #[test]
    fn ensure_valid_opt_accepts_none() {
        assert!(ensure_valid_opt::<Language>(None).is_ok());
        assert!(ensure_valid_opt::<Language>(Some(2)).is_ok());
        assert!(ensure_valid_opt::<Language>(Some(3)).is_err());
    }

    #[test]
    fn text_choices() {
        assert!(validate_action_org("PNS").is_ok());
        assert!(validate_action_org("pns").is_err());
        assert!(validate_personnel_type("rdrt").is_ok());
        assert!(validate_personnel_type("volunteer").is_err());
    }
}
