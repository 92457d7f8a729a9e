use crate::model::{LecturerId, ProgramId, Registry, StudentId};

pub fn display_students(r: &Registry, students: &[StudentId]) {
    for &s in students {
        println!("{}", r.student(s));
    }
}

pub fn display_lecturer(r: &Registry, lecturer: LecturerId) {
    let l = r.lecturer(lecturer);
    println!("Name: {}", l.name);
    println!("Employee ID: {}", l.employee_id);
    println!("Department: {}", l.department);
    let courses = l
        .courses_taught()
        .into_iter()
        .map(|c| r.course(c).code().to_owned())
        .collect::<Vec<_>>();
    if !courses.is_empty() {
        println!("Courses: {}", courses.join(", "));
    }
}

pub fn display_program(r: &Registry, program: ProgramId) {
    let p = r.program(program);
    println!("{} - {} ({} years):", p.code, p.name, p.duration);
    let mut courses = p
        .required_courses()
        .into_iter()
        .map(|c| r.course(c))
        .collect::<Vec<_>>();
    courses.sort_by_key(|c| c.code().to_owned());
    for c in courses {
        print!("  - {} ({})", c.code(), c.title);
        if let Some(l) = c.lecturer() {
            print!(", taught by {}", r.lecturer(l).name);
        }
        println!();
        let mut students = c
            .enrolled_students()
            .into_iter()
            .map(|s| r.student(s).name().to_owned())
            .collect::<Vec<_>>();
        students.sort();
        for name in students {
            println!("      * {name}");
        }
    }
    println!("  Enrolled students: {}", p.enrolled_students().len());
}
