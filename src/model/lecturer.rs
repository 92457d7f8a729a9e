use super::{CourseId, insert_unique, remove_item};

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct LecturerId(pub(super) usize);

#[derive(Clone, Debug)]
pub struct Lecturer {
    pub id: LecturerId,
    pub name: String,
    pub employee_id: String,
    pub department: String,
    courses_taught: Vec<CourseId>,
}

impl Lecturer {
    pub fn new(
        id: LecturerId,
        name: impl Into<String>,
        employee_id: impl Into<String>,
        department: impl Into<String>,
    ) -> Lecturer {
        Lecturer {
            id,
            name: name.into(),
            employee_id: employee_id.into(),
            department: department.into(),
            courses_taught: Vec::new(),
        }
    }

    /// Courses taught by this lecturer, in assignment order. The returned
    /// vector is a copy.
    pub fn courses_taught(&self) -> Vec<CourseId> {
        self.courses_taught.clone()
    }

    pub fn teaches(&self, course: CourseId) -> bool {
        self.courses_taught.contains(&course)
    }

    // Only the registry may touch the taught set, as it mirrors `Course::lecturer`.
    pub(super) fn assign_course(&mut self, course: CourseId) -> bool {
        insert_unique(&mut self.courses_taught, course)
    }

    pub(super) fn remove_course(&mut self, course: CourseId) -> bool {
        remove_item(&mut self.courses_taught, &course)
    }
}
