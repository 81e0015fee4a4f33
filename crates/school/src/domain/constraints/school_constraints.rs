// crates/school/src/domain/constraints/school_constraints.rs

use once_cell::sync::Lazy;
use shared_kernel::domain::constraints::StaticConstraintTable;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::errors::DomainError;

use crate::domain::entities::{Organization, Person, School};

const GROUP: &str = "Group";
const GROUP_MEMBER: &str = "GroupMember";
const LESSON: &str = "Lesson";
const MARK: &str = "Mark";

/// Contraintes nommées du schéma Postgres -> sentinelles du domaine.
/// `marks_value_check` et `persons_role_check` n'y figurent pas : ils remontent tels quels.
pub fn school_constraint_entries() -> Vec<(&'static str, DomainError)> {
    vec![
        // organizations
        ("organizations_name_key", Organization::already_exists("name")),
        // schools
        ("schools_organization_id_fkey", Organization::reference_not_found()),
        ("schools_organization_id_name_key", School::already_exists("name")),
        // persons
        ("persons_organization_id_fkey", Organization::reference_not_found()),
        ("persons_email_key", Person::already_exists("email")),
        ("persons_phone_key", Person::already_exists("phone")),
        // groups
        ("groups_school_id_fkey", School::reference_not_found()),
        ("groups_school_id_name_key", DomainError::AlreadyExists { entity: GROUP, field: "name" }),
        // group_members
        ("group_members_pkey", DomainError::AlreadyExists { entity: GROUP_MEMBER, field: "person_id" }),
        ("group_members_group_id_fkey", DomainError::ReferenceNotFound { entity: GROUP }),
        ("group_members_person_id_fkey", Person::reference_not_found()),
        // lessons
        ("lessons_group_id_fkey", DomainError::ReferenceNotFound { entity: GROUP }),
        ("lessons_teacher_id_fkey", Person::reference_not_found()),
        ("lessons_group_id_starts_at_key", DomainError::AlreadyExists { entity: LESSON, field: "starts_at" }),
        // marks
        ("marks_lesson_id_fkey", DomainError::ReferenceNotFound { entity: LESSON }),
        ("marks_student_id_fkey", Person::reference_not_found()),
        ("marks_lesson_id_student_id_key", DomainError::AlreadyExists { entity: MARK, field: "student_id" }),
    ]
}

/// Table partagée par tous les repositories Postgres du module
pub static SCHOOL_CONSTRAINTS: Lazy<StaticConstraintTable> =
    Lazy::new(|| StaticConstraintTable::new(school_constraint_entries()));

#[cfg(test)]
mod tests {
    use super::*;
    use shared_kernel::domain::constraints::ConstraintTable;

    #[test]
    fn test_no_constraint_is_mapped_twice() {
        let table = StaticConstraintTable::try_new(school_constraint_entries());
        assert!(table.is_ok());
        assert_eq!(SCHOOL_CONSTRAINTS.len(), school_constraint_entries().len());
    }

    #[test]
    fn test_lookup_is_stable() {
        let first = SCHOOL_CONSTRAINTS.lookup("persons_email_key");
        let second = SCHOOL_CONSTRAINTS.lookup("persons_email_key");

        assert_eq!(first, Some(DomainError::AlreadyExists { entity: "Person", field: "email" }));
        assert_eq!(first, second);
    }

    #[test]
    fn test_check_constraints_are_left_unmapped() {
        assert_eq!(SCHOOL_CONSTRAINTS.lookup("marks_value_check"), None);
        assert_eq!(SCHOOL_CONSTRAINTS.lookup("persons_role_check"), None);
    }
}
