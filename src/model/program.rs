use super::{CourseId, StudentId, insert_unique, remove_item};

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ProgramId(pub(super) usize);

/// A study program. Its enrolled students are tracked independently from the
/// enrollment of its courses.
#[derive(Clone, Debug)]
pub struct Program {
    pub id: ProgramId,
    pub code: String,
    pub name: String,
    /// Unit is left to the caller (the demo uses years).
    pub duration: u32,
    required_courses: Vec<CourseId>,
    enrolled_students: Vec<StudentId>,
}

impl Program {
    pub fn new(
        id: ProgramId,
        code: impl Into<String>,
        name: impl Into<String>,
        duration: u32,
    ) -> Program {
        Program {
            id,
            code: code.into(),
            name: name.into(),
            duration,
            required_courses: Vec::new(),
            enrolled_students: Vec::new(),
        }
    }

    pub fn required_courses(&self) -> Vec<CourseId> {
        self.required_courses.clone()
    }

    pub fn requires(&self, course: CourseId) -> bool {
        self.required_courses.contains(&course)
    }

    pub fn add_required_course(&mut self, course: CourseId) -> bool {
        insert_unique(&mut self.required_courses, course)
    }

    pub fn enrolled_students(&self) -> Vec<StudentId> {
        self.enrolled_students.clone()
    }

    pub fn is_enrolled(&self, student: StudentId) -> bool {
        self.enrolled_students.contains(&student)
    }

    pub fn add_student(&mut self, student: StudentId) -> bool {
        insert_unique(&mut self.enrolled_students, student)
    }

    pub fn remove_student(&mut self, student: StudentId) -> bool {
        remove_item(&mut self.enrolled_students, &student)
    }
}
