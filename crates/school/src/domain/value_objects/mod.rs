mod email;
mod organization_id;
mod person_id;
mod person_role;
mod school_id;

pub use email::Email;
pub use organization_id::OrganizationId;
pub use person_id::PersonId;
pub use person_role::PersonRole;
pub use school_id::SchoolId;
