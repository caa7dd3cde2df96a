use crate::core::error::{AssemblyError, RecordError};
use crate::models::record::{value_kind, Record};
use crate::models::user::User;
use serde_json::Value;
use tracing::debug;

/// Builds a [`User`] from its main record plus buddy and guild pages that
/// arrive from separate follow-up requests.
pub struct UserAssembler {
    user: User,
    buddy_pages: usize,
    guild_pages: usize,
}

impl UserAssembler {
    pub fn new(record: &Record) -> Result<Self, RecordError> {
        let user = User::from_record(record)?;
        Ok(Self {
            user,
            buddy_pages: 0,
            guild_pages: 0,
        })
    }

    /// Append every buddy on the page, in order.
    /// Returns the number of entries appended.
    pub fn add_buddy_page(&mut self, page: impl IntoIterator<Item = Record>) -> usize {
        let mut entries = 0;
        for entry in page {
            self.user.add_buddy(entry);
            entries += 1;
        }
        self.buddy_pages += 1;

        debug!(
            user = ?self.user.name(),
            page = self.buddy_pages,
            entries,
            total_buddies = self.user.total_buddies(),
            "Buddy page appended"
        );

        entries
    }

    /// Append every guild on the page, in order.
    /// Returns the number of entries appended.
    pub fn add_guild_page(&mut self, page: impl IntoIterator<Item = Record>) -> usize {
        let mut entries = 0;
        for entry in page {
            self.user.add_guild(entry);
            entries += 1;
        }
        self.guild_pages += 1;

        debug!(
            user = ?self.user.name(),
            page = self.guild_pages,
            entries,
            total_guilds = self.user.total_guilds(),
            "Guild page appended"
        );

        entries
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn finish(self) -> User {
        self.user
    }

    /// Assemble a user from a decoded document of the form
    /// `{"user": {..}, "buddy_pages": [[..], ..], "guild_pages": [[..], ..]}`.
    /// Both page lists are optional.
    pub fn from_document(document: &Value) -> Result<User, AssemblyError> {
        let fields = match document {
            Value::Object(fields) => fields,
            other => {
                return Err(AssemblyError::NotADocument {
                    kind: value_kind(other),
                })
            }
        };

        let record = match fields.get("user") {
            None | Some(Value::Null) => return Err(AssemblyError::MissingUser),
            Some(Value::Object(record)) => record,
            Some(other) => {
                return Err(RecordError::NotARecord {
                    kind: value_kind(other),
                }
                .into())
            }
        };

        let mut assembler = Self::new(record)?;

        for page in read_pages(fields, "buddy_pages")? {
            assembler.add_buddy_page(page);
        }
        for page in read_pages(fields, "guild_pages")? {
            assembler.add_guild_page(page);
        }

        Ok(assembler.finish())
    }
}

fn read_pages(fields: &Record, key: &str) -> Result<Vec<Vec<Record>>, AssemblyError> {
    let pages = match fields.get(key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(pages)) => pages,
        Some(other) => {
            return Err(AssemblyError::InvalidPages {
                field: key.to_string(),
                kind: value_kind(other),
            })
        }
    };

    pages
        .iter()
        .enumerate()
        .map(|(page_index, page)| -> Result<Vec<Record>, AssemblyError> {
            let entries = match page {
                Value::Array(entries) => entries,
                other => {
                    return Err(AssemblyError::InvalidPage {
                        field: key.to_string(),
                        page: page_index,
                        kind: value_kind(other),
                    })
                }
            };

            entries
                .iter()
                .enumerate()
                .map(|(index, entry)| match entry {
                    Value::Object(record) => Ok(record.clone()),
                    other => Err(AssemblyError::InvalidPageEntry {
                        field: key.to_string(),
                        page: page_index,
                        index,
                        kind: value_kind(other),
                    }),
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        serde_json::from_value(value).expect("object")
    }

    fn page(values: Value) -> Vec<Record> {
        serde_json::from_value(values).expect("array of objects")
    }

    #[test]
    fn test_assemble_incrementally() {
        let mut assembler = UserAssembler::new(&record(json!({"name": "host", "id": 4}))).unwrap();

        assert_eq!(
            assembler.add_buddy_page(page(json!([{"name": "a"}, {"name": "b"}]))),
            2
        );
        assert_eq!(assembler.add_buddy_page(page(json!([{"name": "c"}]))), 1);
        assert_eq!(assembler.add_buddy_page(Vec::new()), 0);
        assert_eq!(assembler.add_guild_page(page(json!([{"name": "G1"}]))), 1);
        assert_eq!(assembler.user().total_buddies(), 3);

        let user = assembler.finish();
        let names: Vec<_> = user
            .buddies()
            .iter()
            .map(|b| b.name().map(str::to_string))
            .collect();
        assert_eq!(
            names,
            vec![Some("a".to_string()), Some("b".to_string()), Some("c".to_string())]
        );
        assert_eq!(user.total_guilds(), 1);
    }

    #[test]
    fn test_pages_do_not_deduplicate() {
        let mut assembler = UserAssembler::new(&Record::new()).unwrap();
        let same = page(json!([{"name": "twin"}]));
        assembler.add_buddy_page(same.clone());
        assembler.add_buddy_page(same);
        assert_eq!(assembler.finish().total_buddies(), 2);
    }

    #[test]
    fn test_page_from_iterator() {
        let mut assembler = UserAssembler::new(&Record::new()).unwrap();
        let names = ["x", "y", "z"];

        let appended = assembler.add_guild_page(names.iter().map(|name| record(json!({"name": name}))));
        assert_eq!(appended, 3);

        let guilds = assembler.finish().guilds();
        assert_eq!(guilds.len(), 3);
        assert_eq!(guilds[2].name(), Some("z"));
    }

    #[test]
    fn test_embedded_lists_are_extended() {
        let mut assembler =
            UserAssembler::new(&record(json!({"guilds": [{"name": "G0"}]}))).unwrap();
        assembler.add_guild_page(page(json!([{"name": "G1"}])));

        let guilds = assembler.finish().guilds();
        assert_eq!(guilds.len(), 2);
        assert_eq!(guilds[0].name(), Some("G0"));
        assert_eq!(guilds[1].name(), Some("G1"));
    }

    #[test]
    fn test_from_document() {
        let document = json!({
            "user": {"id": 10, "name": "doc", "firstname": "Dee", "lastname": "Oc"},
            "buddy_pages": [[{"name": "b1"}], [{"name": "b2"}, {"name": "b3"}]],
            "guild_pages": [[{"name": "G1"}, {"name": "G2"}]]
        });

        let user = UserAssembler::from_document(&document).unwrap();
        assert_eq!(user.to_string(), "User: Dee Oc");
        assert_eq!(user.total_buddies(), 3);
        assert_eq!(user.total_guilds(), 2);
        assert_eq!(user.guilds()[1].name(), Some("G2"));
    }

    #[test]
    fn test_from_document_without_pages() {
        let user = UserAssembler::from_document(&json!({"user": {"name": "only"}})).unwrap();
        assert_eq!(user.name(), Some("only"));
        assert_eq!(user.total_buddies(), 0);
        assert_eq!(user.total_guilds(), 0);
    }

    #[test]
    fn test_from_document_errors() {
        assert_eq!(
            UserAssembler::from_document(&json!("text")).unwrap_err(),
            AssemblyError::NotADocument { kind: "string" }
        );
        assert_eq!(
            UserAssembler::from_document(&json!({})).unwrap_err(),
            AssemblyError::MissingUser
        );
        assert_eq!(
            UserAssembler::from_document(&json!({"user": 3})).unwrap_err(),
            AssemblyError::Record(RecordError::NotARecord { kind: "number" })
        );
        assert_eq!(
            UserAssembler::from_document(&json!({"user": {}, "buddy_pages": {}})).unwrap_err(),
            AssemblyError::InvalidPages {
                field: "buddy_pages".to_string(),
                kind: "object"
            }
        );
        assert_eq!(
            UserAssembler::from_document(&json!({"user": {}, "guild_pages": [[], "x"]}))
                .unwrap_err(),
            AssemblyError::InvalidPage {
                field: "guild_pages".to_string(),
                page: 1,
                kind: "string"
            }
        );
        assert_eq!(
            UserAssembler::from_document(&json!({"user": {}, "buddy_pages": [[{}, true]]}))
                .unwrap_err(),
            AssemblyError::InvalidPageEntry {
                field: "buddy_pages".to_string(),
                page: 0,
                index: 1,
                kind: "boolean"
            }
        );
    }

    #[test]
    fn test_from_document_bad_user_lists() {
        let err = UserAssembler::from_document(&json!({"user": {"buddies": 1}})).unwrap_err();
        assert!(matches!(
            err,
            AssemblyError::Record(RecordError::NotASequence { .. })
        ));
    }
}
