// crates/school/src/application/register_school/register_school_command.rs

use serde::Serialize;

use crate::domain::entities::{Organization, School};

/// Crée l'organisation et sa première école en une seule transaction
#[derive(Debug, Clone)]
pub struct RegisterSchoolCommand {
    pub organization_name: String,
    pub school_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisteredSchool {
    pub organization: Organization,
    pub school: School,
}
