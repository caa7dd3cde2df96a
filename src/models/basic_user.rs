use crate::models::record::{display_opt, take_text, take_scalar, Record, Scalar};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A user as it appears in another user's buddy list
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Record", into = "Record")]
pub struct BasicUser {
    name: Option<String>,
    id: Option<Scalar>,
    /// Fields with no accessor
    extra: Record,
}

impl BasicUser {
    /// Build from a raw record. Missing or mistyped fields resolve to `None`.
    pub fn from_record(record: &Record) -> Self {
        Self::from(record.clone())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn id(&self) -> Option<&Scalar> {
        self.id.as_ref()
    }

    pub fn extra(&self) -> &Record {
        &self.extra
    }

    pub(crate) fn from_parts(name: Option<String>, id: Option<Scalar>) -> Self {
        Self {
            name,
            id,
            extra: Record::new(),
        }
    }

    pub fn to_record(&self) -> Record {
        Record::from(self.clone())
    }
}

impl From<Record> for BasicUser {
    fn from(mut record: Record) -> Self {
        let name = take_text(&mut record, "name");
        let id = take_scalar(&mut record, "id");
        Self {
            name,
            id,
            extra: record,
        }
    }
}

impl From<BasicUser> for Record {
    fn from(user: BasicUser) -> Self {
        let mut record = Record::new();
        if let Some(id) = user.id {
            record.insert("id".to_string(), Value::from(id));
        }
        if let Some(name) = user.name {
            record.insert("name".to_string(), Value::String(name));
        }
        record.extend(user.extra);
        record
    }
}

/// `{}` gives the short form, `{:#}` adds the id
impl fmt::Display for BasicUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(
                f,
                "BasicUser: {} (id: {})",
                display_opt(self.name()),
                display_opt(self.id())
            )
        } else {
            write!(f, "BasicUser: {}", display_opt(self.name()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        serde_json::from_value(value).expect("object")
    }

    #[test]
    fn test_accessors() {
        let user = BasicUser::from_record(&record(json!({"name": "bob", "id": 12})));
        assert_eq!(user.name(), Some("bob"));
        assert_eq!(user.id(), Some(&Scalar::from(12u64)));
        assert!(user.extra().is_empty());
    }

    #[test]
    fn test_missing_fields_are_none() {
        let user = BasicUser::from_record(&Record::new());
        assert_eq!(user.name(), None);
        assert_eq!(user.id(), None);
    }

    #[test]
    fn test_unknown_fields_retained() {
        let user = BasicUser::from_record(&record(json!({"name": "bob", "rank": 3})));
        assert_eq!(user.extra().get("rank"), Some(&json!(3)));

        let back = user.to_record();
        assert_eq!(back.get("name"), Some(&json!("bob")));
        assert_eq!(back.get("rank"), Some(&json!(3)));
    }

    #[test]
    fn test_display_forms() {
        let user = BasicUser::from_record(&record(json!({"name": "bob", "id": 12})));
        assert_eq!(user.to_string(), "BasicUser: bob");
        assert_eq!(format!("{:#}", user), "BasicUser: bob (id: 12)");

        let empty = BasicUser::default();
        assert_eq!(empty.to_string(), "BasicUser: null");
        assert_eq!(format!("{:#}", empty), "BasicUser: null (id: null)");
    }

    #[test]
    fn test_text_id_is_kept() {
        let user = BasicUser::from_record(&record(json!({"name": "bob", "id": "101"})));

        assert_eq!(user.id(), Some(&Scalar::from("101")));
        assert_eq!(user.id().and_then(Scalar::as_u64), Some(101));
        assert!(user.extra().is_empty());
        assert_eq!(format!("{:#}", user), "BasicUser: bob (id: 101)");
        assert_eq!(user.to_record().get("id"), Some(&json!("101")));
    }

    #[test]
    fn test_deserialize_from_json() {
        let user: BasicUser = serde_json::from_value(json!({"name": "carol"})).unwrap();
        assert_eq!(user.name(), Some("carol"));
        assert_eq!(user.id(), None);
    }
}
