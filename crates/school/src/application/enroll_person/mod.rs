mod enroll_person_command;
mod enroll_person_use_case;

pub use enroll_person_command::EnrollPersonCommand;
pub use enroll_person_use_case::EnrollPersonUseCase;
