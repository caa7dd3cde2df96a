use crate::models::record::{display_opt, take_text, take_scalar, Record, Scalar};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A guild as listed on a user's profile
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Record", into = "Record")]
pub struct BasicGuild {
    name: Option<String>,
    id: Option<Scalar>,
    extra: Record,
}

impl BasicGuild {
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
}

impl From<Record> for BasicGuild {
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

impl From<BasicGuild> for Record {
    fn from(guild: BasicGuild) -> Self {
        let mut record = Record::new();
        if let Some(id) = guild.id {
            record.insert("id".to_string(), Value::from(id));
        }
        if let Some(name) = guild.name {
            record.insert("name".to_string(), Value::String(name));
        }
        record.extend(guild.extra);
        record
    }
}

impl fmt::Display for BasicGuild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(
                f,
                "BasicGuild: {} (id: {})",
                display_opt(self.name()),
                display_opt(self.id())
            )
        } else {
            write!(f, "BasicGuild: {}", display_opt(self.name()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_guild_from_record() {
        let record: Record =
            serde_json::from_value(json!({"name": "Meeples", "id": 901, "members": 40})).unwrap();
        let guild = BasicGuild::from_record(&record);

        assert_eq!(guild.name(), Some("Meeples"));
        assert_eq!(guild.id(), Some(&Scalar::from(901u64)));
        assert_eq!(guild.extra().get("members"), Some(&json!(40)));
        assert_eq!(format!("{:#}", guild), "BasicGuild: Meeples (id: 901)");
    }

    #[test]
    fn test_guild_text_id() {
        let record: Record = serde_json::from_value(json!({"name": "Meeples", "id": "901"})).unwrap();
        let guild = BasicGuild::from_record(&record);

        assert_eq!(guild.id(), Some(&Scalar::from("901")));
        assert!(guild.extra().is_empty());
        assert_eq!(format!("{:#}", guild), "BasicGuild: Meeples (id: 901)");
    }

    #[test]
    fn test_guild_missing_fields() {
        let guild = BasicGuild::from_record(&Record::new());
        assert_eq!(guild.name(), None);
        assert_eq!(guild.to_string(), "BasicGuild: null");
    }
}
