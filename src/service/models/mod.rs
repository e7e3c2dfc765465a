mod person;

pub use person::Person;
