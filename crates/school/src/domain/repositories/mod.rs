mod organization_repository;
mod person_repository;
mod school_repository;

pub use organization_repository::OrganizationRepository;
pub use person_repository::PersonRepository;
pub use school_repository::SchoolRepository;

#[cfg(test)]
mod organization_repository_stub;
#[cfg(test)]
mod person_repository_stub;
#[cfg(test)]
mod school_repository_stub;

#[cfg(test)]
pub use organization_repository_stub::OrganizationRepositoryStub;
#[cfg(test)]
pub use person_repository_stub::PersonRepositoryStub;
#[cfg(test)]
pub use school_repository_stub::SchoolRepositoryStub;
