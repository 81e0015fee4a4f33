// crates/school/src/application/create_organization/create_organization_command.rs

#[derive(Debug, Clone)]
pub struct CreateOrganizationCommand {
    pub name: String,
}
