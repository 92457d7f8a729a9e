use super::Person;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StudentId(pub(super) usize);

/// A person registered as a student. The student number is expected to be
/// unique but this is never checked.
#[derive(Clone, Debug)]
pub struct Student {
    pub id: StudentId,
    pub person: Person,
    pub student_number: String,
}

impl Student {
    pub fn new(id: StudentId, person: Person, student_number: impl Into<String>) -> Student {
        Student {
            id,
            person,
            student_number: student_number.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    pub fn details(&self) -> String {
        format!("{}, Student ID: {}", self.person.details(), self.student_number)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.details())
    }
}
