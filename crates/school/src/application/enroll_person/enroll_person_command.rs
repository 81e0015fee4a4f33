// crates/school/src/application/enroll_person/enroll_person_command.rs

use crate::domain::value_objects::{OrganizationId, PersonRole};

#[derive(Debug, Clone)]
pub struct EnrollPersonCommand {
    pub organization_id: OrganizationId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: PersonRole,
}
