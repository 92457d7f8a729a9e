/// Identity shared by every kind of person in the registry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub gender: String,
    email: String,
    phone: String,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Person {
        Person {
            name: name.into(),
            age,
            gender: gender.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Overwrite both contact fields. No format check is done on either.
    pub fn update_contact_info(&mut self, email: impl Into<String>, phone: impl Into<String>) {
        self.email = email.into();
        self.phone = phone.into();
    }

    pub fn details(&self) -> String {
        format!(
            "Name: {}, Age: {}, Gender: {}, Email: {}, Phone: {}",
            self.name, self.age, self.gender, self.email, self.phone
        )
    }
}
