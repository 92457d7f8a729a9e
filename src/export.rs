use crate::model::Registry;
use eyre::{Result, WrapErr};
use serde::Serialize;
use std::io;

#[derive(Serialize)]
struct RosterRow<'a> {
    program: &'a str,
    course: &'a str,
    lecturer: Option<&'a str>,
    student_number: &'a str,
    student: &'a str,
}

/// Write one CSV line per course enrollment, ordered by course code then
/// by student name.
pub fn write_roster<W: io::Write>(r: &Registry, writer: W) -> Result<()> {
    let mut courses = r.courses().iter().collect::<Vec<_>>();
    courses.sort_by_key(|c| c.code().to_owned());
    let mut wtr = csv::Writer::from_writer(writer);
    for c in courses {
        let mut students = c
            .enrolled_students()
            .into_iter()
            .map(|s| r.student(s))
            .collect::<Vec<_>>();
        students.sort_by_key(|s| s.name().to_owned());
        for s in students {
            wtr.serialize(RosterRow {
                program: &r.program(c.program()).code,
                course: c.code(),
                lecturer: c.lecturer().map(|l| r.lecturer(l).name.as_str()),
                student_number: &s.student_number,
                student: s.name(),
            })
            .wrap_err("cannot write roster line")?;
        }
    }
    wtr.flush().wrap_err("cannot write roster")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Person;

    #[test]
    fn test_write_roster() {
        let mut r = Registry::new();
        let cs = r.add_program("CS", "Computer Science", 4);
        let cs201 = r.add_course("CS201", "Data Structures", "", cs);
        let cs101 = r.add_course("CS101", "Introduction to Programming", "", cs);
        let l = r.add_lecturer("Fredrick", "E123", "CS");
        r.assign_lecturer(cs101, l);
        let bob = r.add_student(Person::new("Bob Wilson", 21, "Male", "b@x", "556"), "S2");
        let alice = r.add_student(Person::new("Alice Johnson", 20, "Female", "a@x", "555"), "S1");
        r.enroll_in_course(cs101, bob);
        r.enroll_in_course(cs101, alice);
        r.enroll_in_course(cs201, alice);
        let mut out = Vec::new();
        write_roster(&r, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "program,course,lecturer,student_number,student\n\
             CS,CS101,Fredrick,S1,Alice Johnson\n\
             CS,CS101,Fredrick,S2,Bob Wilson\n\
             CS,CS201,,S1,Alice Johnson\n"
        );
    }
}
