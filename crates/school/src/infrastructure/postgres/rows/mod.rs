mod postgres_organization_row;
mod postgres_person_row;
mod postgres_school_row;

pub use postgres_organization_row::PostgresOrganizationRow;
pub use postgres_person_row::PostgresPersonRow;
pub use postgres_school_row::PostgresSchoolRow;
