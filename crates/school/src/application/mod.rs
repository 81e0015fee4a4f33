pub mod create_organization;
pub mod enroll_person;
pub mod register_school;
