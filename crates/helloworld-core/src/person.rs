use serde::{Deserialize, Serialize};

pub const PERSONS_PATH: &str = "/api/persons";

/// Wire representation of a person. `id` is null until the record is first saved.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PersonMessage {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
}

impl PersonMessage {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            id: None,
            name: name.to_owned(),
            email: email.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NameQuery {
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct HelloQuery {
    pub name: Option<String>,
}

/// How a name query is matched against stored names.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SearchMode {
    /// Whole name, ignoring case.
    #[default]
    IgnoreCase,
    /// Whole name, case-sensitive.
    Exact,
    /// Substring of the name, ignoring case.
    Partial,
}

impl SearchMode {
    pub fn path(&self) -> &'static str {
        match self {
            SearchMode::IgnoreCase => "/api/persons/search",
            SearchMode::Exact => "/api/persons/search-exact",
            SearchMode::Partial => "/api/persons/search-partial",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsaved_person_serializes_null_id() {
        let person = PersonMessage::new("Alice", "alice@example.com");

        let json = serde_json::to_value(&person).unwrap();

        assert!(json["id"].is_null());
        assert_eq!(json["name"], "Alice");
    }

    #[test]
    fn test_missing_id_deserializes_as_none() {
        let person: PersonMessage =
            serde_json::from_str(r#"{"name":"Bob","email":"bob@example.com"}"#).unwrap();

        assert_eq!(person.id, None);
        assert_eq!(person.email, "bob@example.com");
    }

    #[test]
    fn test_search_paths_are_under_persons_path() {
        for mode in [SearchMode::IgnoreCase, SearchMode::Exact, SearchMode::Partial] {
            assert!(mode.path().starts_with(PERSONS_PATH));
        }
    }
}
