use serde::{Deserialize, Serialize};

/// Application metadata returned by `/info`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub framework: String,
    pub language: String,
}
