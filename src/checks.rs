use crate::model::Registry;
use eyre::{Result, bail};
use tracing::warn;

/// Check that every course lecturer lists the course as taught, and that
/// every taught course points back to its lecturer.
pub fn ensure_lecturer_links(r: &Registry) -> Result<()> {
    for c in r.courses() {
        if let Some(l) = c.lecturer() {
            if !r.lecturer(l).teaches(c.id) {
                bail!(
                    "course {} is taught by {} who does not list it",
                    c.code(),
                    r.lecturer(l).name
                );
            }
        }
    }
    for l in r.lecturers() {
        if let Some(c) = l
            .courses_taught()
            .into_iter()
            .find(|&c| r.course(c).lecturer() != Some(l.id))
        {
            bail!(
                "lecturer {} lists course {} which has another lecturer",
                l.name,
                r.course(c).code()
            );
        }
    }
    Ok(())
}

/// Warn about students enrolled in a course without being enrolled in the
/// program the course belongs to. Return the number of such enrollments.
pub fn check_enrollment_consistency(r: &Registry) -> usize {
    let mut mismatches = 0;
    for c in r.courses() {
        let program = r.program(c.program());
        for s in c.enrolled_students() {
            if !program.is_enrolled(s) {
                warn!(
                    student = %r.student(s).name(),
                    course = %c.code(),
                    program = %program.code,
                    "student attends a course outside of their program",
                );
                mismatches += 1;
            }
        }
    }
    mismatches
}
