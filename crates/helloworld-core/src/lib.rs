mod client;
mod info;
mod person;

pub use client::PersonClient;
pub use info::AppInfo;
pub use person::{HelloQuery, NameQuery, PersonMessage, SearchMode, PERSONS_PATH};
