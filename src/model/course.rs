use super::{LecturerId, ProgramId, StudentId, insert_unique, remove_item};

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CourseId(pub(super) usize);

/// A course always belongs to the program it was created for.
#[derive(Clone, Debug)]
pub struct Course {
    pub id: CourseId,
    code: String,
    pub title: String,
    pub description: String,
    program: ProgramId,
    lecturer: Option<LecturerId>,
    enrolled_students: Vec<StudentId>,
}

impl Course {
    pub(super) fn new(
        id: CourseId,
        code: String,
        title: String,
        description: String,
        program: ProgramId,
    ) -> Course {
        Course {
            id,
            code,
            title,
            description,
            program,
            lecturer: None,
            enrolled_students: Vec::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn program(&self) -> ProgramId {
        self.program
    }

    pub fn lecturer(&self) -> Option<LecturerId> {
        self.lecturer
    }

    /// Replace the lecturer and return the previous one. The taught set of
    /// both lecturers is the caller's business.
    pub(super) fn set_lecturer(&mut self, lecturer: Option<LecturerId>) -> Option<LecturerId> {
        std::mem::replace(&mut self.lecturer, lecturer)
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
