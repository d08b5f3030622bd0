use std::fmt;

/// A block of the request form that is shown or hidden as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The existing-project row, shown for renew/add requests.
    ExistingProject,
    /// PI and project description fields, shown for new requests.
    ProjectDetails,
    /// Access permission checkboxes, shown for new requests.
    AccessPermissions,
    /// HPC interest checkbox, shown for new requests.
    HpcInterest,
}

static ALL_REGIONS: &[Region] = &[
    Region::ExistingProject,
    Region::ProjectDetails,
    Region::AccessPermissions,
    Region::HpcInterest,
];

impl Region {
    /// Returns the section title shown on the form.
    pub fn title(&self) -> &'static str {
        match self {
            Region::ExistingProject => "Existing Project",
            Region::ProjectDetails => "Project Details",
            Region::AccessPermissions => "Access Permissions",
            Region::HpcInterest => "High Performance Computing",
        }
    }

    /// Returns all regions.
    pub fn all() -> &'static [Region] {
        ALL_REGIONS
    }
}

#[mutants::skip]
impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
