mod name;
mod organization;
mod person;
mod school;

pub use organization::Organization;
pub use person::Person;
pub use school::School;
