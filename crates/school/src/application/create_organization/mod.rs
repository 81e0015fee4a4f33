mod create_organization_command;
mod create_organization_use_case;

pub use create_organization_command::CreateOrganizationCommand;
pub use create_organization_use_case::CreateOrganizationUseCase;
