mod register_school_command;
mod register_school_use_case;
mod register_school_use_case_test;

pub use register_school_command::{RegisterSchoolCommand, RegisteredSchool};
pub use register_school_use_case::RegisterSchoolUseCase;
