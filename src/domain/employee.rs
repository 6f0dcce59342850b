//! Employee Directory Entity
//!
//! Raw records handed to the hierarchy engine by the external directory service

use serde::{Deserialize, Deserializer, Serialize};

/// Employee Unique Identifier
pub type EmployeeId = String;

/// Employee Record - one entry of the flat directory snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// Missing ids load as empty and are left to the integrity check
    #[serde(default, deserialize_with = "id_from_scalar")]
    pub id: EmployeeId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_ref: Option<String>,
    /// Reference to the manager's id; may point at nobody
    #[serde(
        default,
        deserialize_with = "optional_id_from_scalar",
        alias = "manager_id",
        alias = "reportsTo",
        skip_serializing_if = "Option::is_none"
    )]
    pub manager_id: Option<EmployeeId>,
}

impl EmployeeRecord {
    /// Create a record with no manager
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: None,
            department: None,
            email: String::new(),
            phone: None,
            avatar_ref: None,
            manager_id: None,
        }
    }

    /// Create a record reporting to `manager_id`
    pub fn reporting_to(
        id: impl Into<String>,
        name: impl Into<String>,
        manager_id: impl Into<String>,
    ) -> Self {
        Self::new(id, name).with_manager(manager_id)
    }

    /// Set manager
    pub fn with_manager(mut self, manager_id: impl Into<String>) -> Self {
        self.manager_id = Some(manager_id.into());
        self
    }

    /// Set title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set department
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Set email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set phone
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set avatar reference
    pub fn with_avatar(mut self, avatar_ref: impl Into<String>) -> Self {
        self.avatar_ref = Some(avatar_ref.into());
        self
    }

    /// Manager reference with blank values treated as absent
    pub fn manager_ref(&self) -> Option<&str> {
        non_blank(self.manager_id.as_deref())
    }
}

/// Directory exports often write ids as bare numbers (`id: 1`)
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl From<ScalarId> for EmployeeId {
    fn from(value: ScalarId) -> Self {
        match value {
            ScalarId::Text(s) => s,
            ScalarId::Signed(n) => n.to_string(),
            ScalarId::Unsigned(n) => n.to_string(),
            ScalarId::Float(n) => n.to_string(),
        }
    }
}

fn id_from_scalar<'de, D>(deserializer: D) -> Result<EmployeeId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_id_from_scalar(deserializer)?.unwrap_or_default())
}

fn optional_id_from_scalar<'de, D>(deserializer: D) -> Result<Option<EmployeeId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ScalarId>::deserialize(deserializer)?.map(EmployeeId::from))
}

/// Returns `None` for missing or whitespace-only values
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "2",
            "name": "Bob",
            "title": "Engineer",
            "email": "bob@example.com",
            "avatarRef": "avatars/bob.png",
            "managerId": "1"
        }"#;
        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.manager_id.as_deref(), Some("1"));
        assert_eq!(record.avatar_ref.as_deref(), Some("avatars/bob.png"));
        assert!(record.department.is_none());
        assert!(record.phone.is_none());
    }

    #[test]
    fn test_manager_aliases() {
        let a: EmployeeRecord =
            serde_json::from_str(r#"{"id":"a","name":"A","reportsTo":"x"}"#).unwrap();
        let b: EmployeeRecord =
            serde_json::from_str(r#"{"id":"b","name":"B","manager_id":"y"}"#).unwrap();
        assert_eq!(a.manager_id.as_deref(), Some("x"));
        assert_eq!(b.manager_id.as_deref(), Some("y"));
    }

    #[test]
    fn test_numeric_ids() {
        let record: EmployeeRecord =
            serde_json::from_str(r#"{"id":7,"name":"Gus","managerId":1}"#).unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.manager_id.as_deref(), Some("1"));

        let record: EmployeeRecord =
            serde_yaml::from_str("id: 2\nname: Bob\nreportsTo: 1\n").unwrap();
        assert_eq!(record.id, "2");
        assert_eq!(record.manager_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_missing_id_and_name_tolerated() {
        let record: EmployeeRecord =
            serde_json::from_str(r#"{"name":"Nobody","managerId":null}"#).unwrap();
        assert_eq!(record.id, "");
        assert!(record.manager_id.is_none());

        let record: EmployeeRecord = serde_json::from_str(r#"{"id":"9"}"#).unwrap();
        assert_eq!(record.name, "");
    }

    #[test]
    fn test_blank_manager_is_absent() {
        let record = EmployeeRecord::reporting_to("1", "Alice", "  ");
        assert_eq!(record.manager_ref(), None);

        let record = EmployeeRecord::reporting_to("2", "Bob", "1");
        assert_eq!(record.manager_ref(), Some("1"));
    }
}
