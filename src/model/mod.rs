pub use self::course::{Course, CourseId};
pub use self::lecturer::{Lecturer, LecturerId};
pub use self::person::Person;
pub use self::program::{Program, ProgramId};
pub use self::registry::Registry;
pub use self::student::{Student, StudentId};

mod course;
mod lecturer;
mod person;
mod program;
mod registry;
mod student;

/// Insert `item` unless it is already present. Return `true` if the
/// collection changed.
fn insert_unique<T: PartialEq>(items: &mut Vec<T>, item: T) -> bool {
    if items.contains(&item) {
        false
    } else {
        items.push(item);
        true
    }
}

/// Remove `item` if present. Return `true` if the collection changed.
fn remove_item<T: PartialEq>(items: &mut Vec<T>, item: &T) -> bool {
    if let Some(pos) = items.iter().position(|i| i == item) {
        items.remove(pos);
        true
    } else {
        false
    }
}
