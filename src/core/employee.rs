//! The employee record as served by the members endpoint.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One row of the employee table.
///
/// All fields are opaque text.  Any JSON scalar is accepted and kept as it
/// was written; a missing or `null` field renders as an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Employee {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub id: String,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub name: String,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub email: String,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub role: String,
}

impl Employee {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Cell texts in column order (ID, Name, Email, Role).
    pub fn cells(&self) -> [&str; 4] {
        [&self.id, &self.name, &self.email, &self.role]
    }
}

/// Decode a JSON array of employees.
pub fn decode_list(bytes: &[u8]) -> serde_json::Result<Vec<Employee>> {
    serde_json::from_slice(bytes)
}

fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // Nested values show as compact JSON.
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_upstream_shape() {
        let json = br#"[
            {"id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member"},
            {"id": "2", "name": "Aishwarya Naik", "email": "aishwarya@mailinator.com", "role": "admin"}
        ]"#;

        let list = decode_list(json).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(
            list[1],
            Employee::new("2", "Aishwarya Naik", "aishwarya@mailinator.com", "admin")
        );
    }

    #[test]
    fn numeric_id_becomes_text() {
        let json = br#"[{"id": 42, "name": "n", "email": "e", "role": "r"}]"#;
        let list = decode_list(json).unwrap();
        assert_eq!(list[0].id, "42");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let json = br#"[{"id": "7", "name": "n", "email": "e", "role": "r", "team": "x"}]"#;
        assert_eq!(decode_list(json).unwrap().len(), 1);
    }

    #[test]
    fn non_string_scalars_keep_their_text() {
        let json = br#"[
            {"id": "1", "name": "a", "email": "a@x", "role": "member"},
            {"id": 2, "name": "b", "email": "b@x", "role": 3},
            {"id": 18446744073709551615, "name": true, "email": "c@x", "role": 1.5}
        ]"#;

        let list = decode_list(json).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[1].role, "3");
        assert_eq!(list[2].id, "18446744073709551615");
        assert_eq!(list[2].name, "true");
        assert_eq!(list[2].role, "1.5");
    }

    #[test]
    fn null_and_missing_fields_are_empty() {
        let json = br#"[
            {"id": "7", "name": "n", "email": null},
            {"name": "m", "email": "m@x", "role": "admin"}
        ]"#;

        let list = decode_list(json).unwrap();
        assert_eq!(list[0], Employee::new("7", "n", "", ""));
        assert_eq!(list[1].id, "");
        assert_eq!(list[1].role, "admin");
    }

    #[test]
    fn non_array_body_is_an_error() {
        assert!(decode_list(br#"{"members": []}"#).is_err());
    }

    #[test]
    fn cells_follow_column_order() {
        let e = Employee::new("3", "Name", "mail@x", "member");
        assert_eq!(e.cells(), ["3", "Name", "mail@x", "member"]);
    }
}
