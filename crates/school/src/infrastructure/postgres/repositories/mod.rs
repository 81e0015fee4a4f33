mod postgres_organization_repository;
mod postgres_person_repository;
mod postgres_school_repository;

pub use postgres_organization_repository::PostgresOrganizationRepository;
pub use postgres_person_repository::PostgresPersonRepository;
pub use postgres_school_repository::PostgresSchoolRepository;
