use std::fmt;

use super::Region;

/// A single input on the allocation request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    ExistingProject,
    PiName,
    PiEmail,
    PiInstitution,
    ProjectTitle,
    ProjectWebsite,
    ProjectShortName,
    ScienceFields,
    RelatedToProposal,
    Justification,
    FundingSources,
    AccessRunningApps,
    AccessShell,
    AccessDownload,
    InterestInHpc,
}

static ALL_FIELDS: &[Field] = &[
    Field::Username,
    Field::ExistingProject,
    Field::PiName,
    Field::PiEmail,
    Field::PiInstitution,
    Field::ProjectTitle,
    Field::ProjectWebsite,
    Field::ProjectShortName,
    Field::ScienceFields,
    Field::RelatedToProposal,
    Field::Justification,
    Field::FundingSources,
    Field::AccessRunningApps,
    Field::AccessShell,
    Field::AccessDownload,
    Field::InterestInHpc,
];

/// Fields that must be filled in when requesting a new project.
static REQUIRED_FOR_NEW: &[Field] = &[
    Field::PiName,
    Field::PiEmail,
    Field::PiInstitution,
    Field::ProjectTitle,
    Field::ProjectShortName,
    Field::ScienceFields,
    Field::RelatedToProposal,
    Field::FundingSources,
];

impl Field {
    /// Returns the wire name used in the submission payload.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::ExistingProject => "existing_project",
            Field::PiName => "pi_name",
            Field::PiEmail => "pi_email",
            Field::PiInstitution => "pi_institution",
            Field::ProjectTitle => "project_title",
            Field::ProjectWebsite => "project_website",
            Field::ProjectShortName => "project_short_name",
            Field::ScienceFields => "science_fields",
            Field::RelatedToProposal => "related_to_proposal",
            Field::Justification => "justification",
            Field::FundingSources => "funding_sources",
            Field::AccessRunningApps => "access_running_apps",
            Field::AccessShell => "access_shell",
            Field::AccessDownload => "access_download",
            Field::InterestInHpc => "interest_in_hpc",
        }
    }

    /// Returns the display label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::ExistingProject => "Existing Project",
            Field::PiName => "PI Name",
            Field::PiEmail => "PI Email",
            Field::PiInstitution => "PI Institution",
            Field::ProjectTitle => "Project Title",
            Field::ProjectWebsite => "Project Website",
            Field::ProjectShortName => "Project Short Name",
            Field::ScienceFields => "Science Fields",
            Field::RelatedToProposal => "Related to Proposal",
            Field::Justification => "Justification",
            Field::FundingSources => "Funding Sources",
            Field::AccessRunningApps => "Access: run apps",
            Field::AccessShell => "Access: shell",
            Field::AccessDownload => "Access: download data",
            Field::InterestInHpc => "Interested in HPC",
        }
    }

    /// Returns the region containing this field, or `None` for fields that
    /// are always visible (currently only the username).
    pub fn region(&self) -> Option<Region> {
        match self {
            Field::Username => None,
            Field::ExistingProject => Some(Region::ExistingProject),
            Field::PiName
            | Field::PiEmail
            | Field::PiInstitution
            | Field::ProjectTitle
            | Field::ProjectWebsite
            | Field::ProjectShortName
            | Field::ScienceFields
            | Field::RelatedToProposal
            | Field::Justification
            | Field::FundingSources => Some(Region::ProjectDetails),
            Field::AccessRunningApps | Field::AccessShell | Field::AccessDownload => {
                Some(Region::AccessPermissions)
            }
            Field::InterestInHpc => Some(Region::HpcInterest),
        }
    }

    /// Returns all fields in form order.
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }

    /// Returns the fields that are required when a new project is requested.
    pub fn required_for_new() -> &'static [Field] {
        REQUIRED_FOR_NEW
    }
}

#[mutants::skip]
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
