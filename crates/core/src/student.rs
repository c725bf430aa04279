//! Student document type for the document store.

use serde::{Deserialize, Serialize};

/// A student record as stored in the `students` collection.
///
/// Field names match the legacy document shape exactly, including the
/// spaces in the note fields. Notes are stored as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Surname")]
    pub surname: String,
    #[serde(rename = "Note 1")]
    pub note1: String,
    #[serde(rename = "Note 2")]
    pub note2: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_legacy_field_names() {
        let student = Student {
            name: "Rodrigo".to_string(),
            surname: "Lima".to_string(),
            note1: "8".to_string(),
            note2: "6".to_string(),
        };

        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json["Name"], "Rodrigo");
        assert_eq!(json["Surname"], "Lima");
        assert_eq!(json["Note 1"], "8");
        assert_eq!(json["Note 2"], "6");
    }
}
