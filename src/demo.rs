use crate::model::{Person, Registry};

/// Build the sample university: one program, two courses sharing a
/// lecturer, and two students.
pub fn university() -> Registry {
    let mut r = Registry::new();
    let cs = r.add_program("CS", "Computer Science", 4);
    let cs101 = r.add_course(
        "CS101",
        "Introduction to Programming",
        "Basic programming concepts",
        cs,
    );
    let cs201 = r.add_course("CS201", "Data Structures", "Fundamental data structures", cs);
    let fredrick = r.add_lecturer("Fredrick", "E123", "Computer Science");
    r.program_assign_lecturer(cs, fredrick, cs101);
    r.program_assign_lecturer(cs, fredrick, cs201);
    let alice = r.add_student(
        Person::new("Alice Johnson", 20, "Female", "alice@uni.com", "555-0101"),
        "S10001",
    );
    let bob = r.add_student(
        Person::new("Bob Wilson", 21, "Male", "bob@uni.com", "555-0102"),
        "S10002",
    );
    r.enroll_in_program(cs, alice);
    r.enroll_in_program(cs, bob);
    r.enroll_in_course(cs101, alice);
    r.enroll_in_course(cs101, bob);
    r.enroll_in_course(cs201, alice);
    r
}
