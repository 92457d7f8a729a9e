use super::*;
use tracing::{debug, trace};

/// Owner of every entity. Associations between entities are stored as
/// handles, and operations touching both sides of a relationship go
/// through here so that both sides always agree.
///
/// Every association operation returns `true` if it changed something and
/// `false` if it was a no-op (duplicate add, missing remove, unauthorized
/// assignment). None of them fails.
#[derive(Debug, Default)]
pub struct Registry {
    programs: Vec<Program>,
    courses: Vec<Course>,
    lecturers: Vec<Lecturer>,
    students: Vec<Student>,
}

#[allow(dead_code)]
impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    pub fn add_program(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
        duration: u32,
    ) -> ProgramId {
        let id = ProgramId(self.programs.len());
        let program = Program::new(id, code, name, duration);
        debug!(code = %program.code, name = %program.name, "program created");
        self.programs.push(program);
        id
    }

    /// Create a course bound to `program`, which gets it as a required
    /// course right away.
    pub fn add_course(
        &mut self,
        code: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        program: ProgramId,
    ) -> CourseId {
        assert!(
            program.0 < self.programs.len(),
            "course created for an unknown program"
        );
        let id = CourseId(self.courses.len());
        let course = Course::new(id, code.into(), title.into(), description.into(), program);
        debug!(code = %course.code(), program = %self.program(program).code, "course created");
        self.courses.push(course);
        self.programs[program.0].add_required_course(id);
        id
    }

    pub fn add_lecturer(
        &mut self,
        name: impl Into<String>,
        employee_id: impl Into<String>,
        department: impl Into<String>,
    ) -> LecturerId {
        let id = LecturerId(self.lecturers.len());
        self.lecturers
            .push(Lecturer::new(id, name, employee_id, department));
        id
    }

    pub fn add_student(&mut self, person: Person, student_number: impl Into<String>) -> StudentId {
        let id = StudentId(self.students.len());
        self.students.push(Student::new(id, person, student_number));
        id
    }

    pub fn program(&self, ProgramId(program): ProgramId) -> &Program {
        &self.programs[program]
    }

    pub fn course(&self, CourseId(course): CourseId) -> &Course {
        &self.courses[course]
    }

    pub fn course_mut(&mut self, CourseId(course): CourseId) -> &mut Course {
        &mut self.courses[course]
    }

    // No `lecturer_mut`: the taught set must only change along with `Course::lecturer`.
    pub fn lecturer(&self, LecturerId(lecturer): LecturerId) -> &Lecturer {
        &self.lecturers[lecturer]
    }

    pub fn student(&self, StudentId(student): StudentId) -> &Student {
        &self.students[student]
    }

    pub fn student_mut(&mut self, StudentId(student): StudentId) -> &mut Student {
        &mut self.students[student]
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn lecturers(&self) -> &[Lecturer] {
        &self.lecturers
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn find_program(&self, code: &str) -> Option<ProgramId> {
        self.programs.iter().find(|p| p.code == code).map(|p| p.id)
    }

    pub fn find_course(&self, code: &str) -> Option<CourseId> {
        self.courses.iter().find(|c| c.code() == code).map(|c| c.id)
    }

    pub fn find_lecturer(&self, employee_id: &str) -> Option<LecturerId> {
        self.lecturers
            .iter()
            .find(|l| l.employee_id == employee_id)
            .map(|l| l.id)
    }

    pub fn find_student(&self, student_number: &str) -> Option<StudentId> {
        self.students
            .iter()
            .find(|s| s.student_number == student_number)
            .map(|s| s.id)
    }

    /// Make `lecturer` the lecturer of `course`, detaching the course from
    /// its previous lecturer first.
    pub fn assign_lecturer(&mut self, course: CourseId, lecturer: LecturerId) -> bool {
        let previous = self.courses[course.0].set_lecturer(Some(lecturer));
        if let Some(previous) = previous {
            self.lecturers[previous.0].remove_course(course);
        }
        self.lecturers[lecturer.0].assign_course(course);
        trace!(
            course = %self.course(course).code(),
            lecturer = %self.lecturer(lecturer).employee_id,
            previous = ?previous.map(|l| &self.lecturer(l).employee_id),
            "lecturer assigned",
        );
        previous != Some(lecturer)
    }

    pub fn unassign_lecturer(&mut self, course: CourseId) -> bool {
        match self.courses[course.0].set_lecturer(None) {
            Some(previous) => {
                self.lecturers[previous.0].remove_course(course);
                trace!(
                    course = %self.course(course).code(),
                    lecturer = %self.lecturer(previous).employee_id,
                    "lecturer unassigned",
                );
                true
            }
            None => false,
        }
    }

    /// Assign `lecturer` to `course` on behalf of `program`. Nothing happens
    /// if `course` is not one of the program's required courses, or if any
    /// handle is unknown to this registry.
    pub fn program_assign_lecturer(
        &mut self,
        program: ProgramId,
        lecturer: LecturerId,
        course: CourseId,
    ) -> bool {
        let Some(p) = self.programs.get(program.0) else {
            debug!(program = ?program, "unknown program, ignoring lecturer assignment");
            return false;
        };
        if !p.requires(course) || course.0 >= self.courses.len() {
            debug!(
                program = %p.code,
                course = ?course,
                "course is not required by program, ignoring lecturer assignment",
            );
            return false;
        }
        if lecturer.0 >= self.lecturers.len() {
            debug!(lecturer = ?lecturer, "unknown lecturer, ignoring lecturer assignment");
            return false;
        }
        self.assign_lecturer(course, lecturer)
    }

    pub fn add_required_course(&mut self, program: ProgramId, course: CourseId) -> bool {
        self.programs[program.0].add_required_course(course)
    }

    pub fn enroll_in_course(&mut self, course: CourseId, student: StudentId) -> bool {
        let added = self.courses[course.0].add_student(student);
        if added {
            trace!(
                course = %self.course(course).code(),
                student = %self.student(student).student_number,
                "student enrolled in course",
            );
        }
        added
    }

    pub fn withdraw_from_course(&mut self, course: CourseId, student: StudentId) -> bool {
        self.courses[course.0].remove_student(student)
    }

    pub fn enroll_in_program(&mut self, program: ProgramId, student: StudentId) -> bool {
        let added = self.programs[program.0].add_student(student);
        if added {
            trace!(
                program = %self.program(program).code,
                student = %self.student(student).student_number,
                "student enrolled in program",
            );
        }
        added
    }

    pub fn withdraw_from_program(&mut self, program: ProgramId, student: StudentId) -> bool {
        self.programs[program.0].remove_student(student)
    }

    /// Courses taught by `lecturer`, as a copy.
    pub fn courses_taught_by(&self, lecturer: LecturerId) -> Vec<CourseId> {
        self.lecturer(lecturer).courses_taught()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computer_science() -> (Registry, ProgramId, CourseId) {
        let mut r = Registry::new();
        let cs = r.add_program("CS", "Computer Science", 4);
        let cs101 = r.add_course("CS101", "Introduction to Programming", "Basics", cs);
        (r, cs, cs101)
    }

    #[test]
    fn test_course_registers_with_program() {
        let (mut r, cs, cs101) = computer_science();
        assert_eq!(r.program(cs).required_courses(), vec![cs101]);
        assert_eq!(r.course(cs101).program(), cs);
        assert!(!r.add_required_course(cs, cs101));
        assert_eq!(r.program(cs).required_courses(), vec![cs101]);
    }

    #[test]
    fn test_assign_lecturer_keeps_both_sides() {
        let (mut r, _, cs101) = computer_science();
        let l1 = r.add_lecturer("Fredrick", "E123", "CS");
        let l2 = r.add_lecturer("Grace", "E124", "CS");
        assert!(r.assign_lecturer(cs101, l1));
        assert_eq!(r.course(cs101).lecturer(), Some(l1));
        assert!(r.lecturer(l1).teaches(cs101));
        assert!(r.assign_lecturer(cs101, l2));
        assert_eq!(r.course(cs101).lecturer(), Some(l2));
        assert!(!r.lecturer(l1).teaches(cs101));
        assert_eq!(r.courses_taught_by(l2), vec![cs101]);
    }

    #[test]
    fn test_reassign_same_lecturer() {
        let (mut r, _, cs101) = computer_science();
        let l = r.add_lecturer("Fredrick", "E123", "CS");
        assert!(r.assign_lecturer(cs101, l));
        assert!(!r.assign_lecturer(cs101, l));
        assert_eq!(r.courses_taught_by(l), vec![cs101]);
        assert_eq!(r.course(cs101).lecturer(), Some(l));
    }

    #[test]
    fn test_unassign_lecturer() {
        let (mut r, _, cs101) = computer_science();
        let l = r.add_lecturer("Fredrick", "E123", "CS");
        assert!(!r.unassign_lecturer(cs101));
        r.assign_lecturer(cs101, l);
        assert!(r.unassign_lecturer(cs101));
        assert_eq!(r.course(cs101).lecturer(), None);
        assert!(r.courses_taught_by(l).is_empty());
        assert!(!r.unassign_lecturer(cs101));
    }

    #[test]
    fn test_program_assign_lecturer_requires_course() {
        let (mut r, cs, cs101) = computer_science();
        let math = r.add_program("MATH", "Mathematics", 3);
        let ma101 = r.add_course("MA101", "Calculus", "Limits", math);
        let l = r.add_lecturer("Fredrick", "E123", "CS");
        assert!(!r.program_assign_lecturer(cs, l, ma101));
        assert_eq!(r.course(ma101).lecturer(), None);
        assert!(r.courses_taught_by(l).is_empty());
        assert!(r.program_assign_lecturer(cs, l, cs101));
        assert_eq!(r.course(cs101).lecturer(), Some(l));
    }

    #[test]
    fn test_program_assign_lecturer_keeps_previous_on_refusal() {
        let (mut r, _, cs101) = computer_science();
        let math = r.add_program("MATH", "Mathematics", 3);
        let l1 = r.add_lecturer("Fredrick", "E123", "CS");
        let l2 = r.add_lecturer("Grace", "E124", "MATH");
        r.assign_lecturer(cs101, l1);
        assert!(!r.program_assign_lecturer(math, l2, cs101));
        assert_eq!(r.course(cs101).lecturer(), Some(l1));
        assert!(r.courses_taught_by(l2).is_empty());
    }

    #[test]
    fn test_program_assign_lecturer_with_foreign_handles() {
        let (mut r, cs, cs101) = computer_science();
        let l = r.add_lecturer("Fredrick", "E123", "CS");
        let mut other = Registry::new();
        let math = other.add_program("MATH", "Mathematics", 3);
        other.add_course("MA101", "Calculus", "Limits", math);
        let ma201 = other.add_course("MA201", "Algebra", "Groups", math);
        other.add_lecturer("Grace", "E124", "MATH");
        let ghost = other.add_lecturer("Ghost", "E125", "MATH");
        assert!(!r.program_assign_lecturer(cs, l, ma201));
        assert!(!r.program_assign_lecturer(cs, ghost, cs101));
        assert_eq!(r.course(cs101).lecturer(), None);
        assert!(r.courses_taught_by(l).is_empty());
        let other_program = other.add_program("PHYS", "Physics", 3);
        assert!(!r.program_assign_lecturer(other_program, l, cs101));
        assert_eq!(r.course(cs101).lecturer(), None);
    }

    #[test]
    #[should_panic(expected = "course created for an unknown program")]
    fn test_add_course_with_foreign_program() {
        let mut other = Registry::new();
        other.add_program("MATH", "Mathematics", 3);
        let phys = other.add_program("PHYS", "Physics", 3);
        let mut r = Registry::new();
        r.add_program("CS", "Computer Science", 4);
        r.add_course("PH101", "Mechanics", "Newton", phys);
    }

    #[test]
    fn test_update_course_description() {
        let (mut r, _, cs101) = computer_science();
        r.course_mut(cs101).description = "Programming from scratch".to_owned();
        assert_eq!(r.course(cs101).description, "Programming from scratch");
        assert_eq!(r.course(cs101).code(), "CS101");
    }

    #[test]
    fn test_enrollments_are_independent() {
        let (mut r, cs, cs101) = computer_science();
        let alice = r.add_student(Person::new("Alice", 20, "Female", "a@x", "555"), "S1");
        assert!(r.enroll_in_course(cs101, alice));
        assert!(!r.enroll_in_course(cs101, alice));
        assert_eq!(r.course(cs101).enrolled_students(), vec![alice]);
        assert!(!r.program(cs).is_enrolled(alice));
        assert!(r.enroll_in_program(cs, alice));
        assert!(r.withdraw_from_course(cs101, alice));
        assert!(!r.withdraw_from_course(cs101, alice));
        assert!(r.program(cs).is_enrolled(alice));
        assert!(r.withdraw_from_program(cs, alice));
        assert!(!r.withdraw_from_program(cs, alice));
    }

    #[test]
    fn test_lookups() {
        let (mut r, cs, cs101) = computer_science();
        let l = r.add_lecturer("Fredrick", "E123", "CS");
        let s = r.add_student(Person::new("Bob", 21, "Male", "b@x", "556"), "S2");
        assert_eq!(r.find_program("CS"), Some(cs));
        assert_eq!(r.find_course("CS101"), Some(cs101));
        assert_eq!(r.find_course("CS999"), None);
        assert_eq!(r.find_lecturer("E123"), Some(l));
        assert_eq!(r.find_student("S2"), Some(s));
        assert_eq!(r.find_student("S3"), None);
    }
}
