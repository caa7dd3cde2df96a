use crate::core::error::RecordError;
use crate::models::basic_user::BasicUser;
use crate::models::guild::BasicGuild;
use crate::models::record::{display_opt, take_scalar, take_text, value_kind, Record, Scalar};
use crate::models::sink::LogSink;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

const BUDDIES: &str = "buddies";
const GUILDS: &str = "guilds";

/// A full user profile with buddy and guild lists
///
/// Built from a copy of the caller's record. Buddies and guilds are kept as raw
/// records and wrapped on each call to [`User::buddies`] / [`User::guilds`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Record", into = "Record")]
pub struct User {
    name: Option<String>,
    id: Option<Scalar>,
    firstname: Option<String>,
    lastname: Option<String>,
    /// `avatarlink`
    avatar: Option<String>,
    /// `lastlogin`
    last_login: Option<String>,
    /// `stateorprovince`
    state: Option<String>,
    country: Option<String>,
    /// `webaddress`
    homepage: Option<String>,
    xbox_account: Option<String>,
    wii_account: Option<String>,
    steam_account: Option<String>,
    psn_account: Option<String>,
    trade_rating: Option<Scalar>,
    buddies: Vec<Record>,
    guilds: Vec<Record>,
    /// Fields with no accessor
    extra: Record,
}

impl User {
    /// Build a user from a borrowed record.
    /// The record is copied, so later changes to it do not reach the user.
    pub fn from_record(record: &Record) -> Result<Self, RecordError> {
        Self::try_from(record.clone())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn id(&self) -> Option<&Scalar> {
        self.id.as_ref()
    }

    pub fn firstname(&self) -> Option<&str> {
        self.firstname.as_deref()
    }

    pub fn lastname(&self) -> Option<&str> {
        self.lastname.as_deref()
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    pub fn last_login(&self) -> Option<&str> {
        self.last_login.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    pub fn xbox_account(&self) -> Option<&str> {
        self.xbox_account.as_deref()
    }

    pub fn wii_account(&self) -> Option<&str> {
        self.wii_account.as_deref()
    }

    pub fn steam_account(&self) -> Option<&str> {
        self.steam_account.as_deref()
    }

    pub fn psn_account(&self) -> Option<&str> {
        self.psn_account.as_deref()
    }

    pub fn trade_rating(&self) -> Option<&Scalar> {
        self.trade_rating.as_ref()
    }

    pub fn extra(&self) -> &Record {
        &self.extra
    }

    pub fn total_buddies(&self) -> usize {
        self.buddies.len()
    }

    pub fn total_guilds(&self) -> usize {
        self.guilds.len()
    }

    /// Wraps every buddy record, in insertion order. Allocates on each call.
    pub fn buddies(&self) -> Vec<BasicUser> {
        self.buddies.iter().map(BasicUser::from_record).collect()
    }

    /// Wraps every guild record, in insertion order. Allocates on each call.
    pub fn guilds(&self) -> Vec<BasicGuild> {
        self.guilds.iter().map(BasicGuild::from_record).collect()
    }

    /// The name and id of this user as a plain buddy entry
    pub fn as_basic(&self) -> BasicUser {
        BasicUser::from_parts(self.name.clone(), self.id.clone())
    }

    pub(crate) fn add_buddy(&mut self, record: Record) {
        self.buddies.push(record);
    }

    pub(crate) fn add_guild(&mut self, record: Record) {
        self.guilds.push(record);
    }

    /// Rebuild the full record, including buddies and guilds
    pub fn to_record(&self) -> Record {
        Record::from(self.clone())
    }

    /// Write a human-readable summary of the profile to `sink`
    pub fn dump(&self, sink: &mut impl LogSink) {
        let fields = [
            ("id          ", display_opt(self.id())),
            ("login name  ", display_opt(self.name())),
            ("first name  ", display_opt(self.firstname())),
            ("last name   ", display_opt(self.lastname())),
            ("state       ", display_opt(self.state())),
            ("country     ", display_opt(self.country())),
            ("home page   ", display_opt(self.homepage())),
            ("avatar      ", display_opt(self.avatar())),
            ("xbox acct   ", display_opt(self.xbox_account())),
            ("wii acct    ", display_opt(self.wii_account())),
            ("steam acct  ", display_opt(self.steam_account())),
            ("psn acct    ", display_opt(self.psn_account())),
            ("last login  ", display_opt(self.last_login())),
            ("trade rating", display_opt(self.trade_rating())),
        ];
        for (label, value) in &fields {
            sink.info(&format!("{}: {}", label, value));
        }

        let total_buddies = self.total_buddies();
        let lonely = if total_buddies == 0 {
            " (forever alone :'( )"
        } else {
            ""
        };
        sink.info(&format!("user has {} buddies{}", total_buddies, lonely));
        for buddy in self.buddies() {
            sink.info(&format!("- {}", display_opt(buddy.name())));
        }

        sink.info(&format!("user is member in {} guilds", self.total_guilds()));
        for guild in self.guilds() {
            sink.info(&format!("- {}", display_opt(guild.name())));
        }
    }
}

/// Removes a nested sequence of records. Missing or `null` means empty.
fn take_records(record: &mut Record, key: &str) -> Result<Vec<Record>, RecordError> {
    match record.remove(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(entry) => Ok(entry),
                other => Err(RecordError::InvalidEntry {
                    field: key.to_string(),
                    index,
                    kind: value_kind(&other),
                }),
            })
            .collect(),
        Some(other) => Err(RecordError::NotASequence {
            field: key.to_string(),
            kind: value_kind(&other),
        }),
    }
}

impl TryFrom<Record> for User {
    type Error = RecordError;

    fn try_from(mut record: Record) -> Result<Self, Self::Error> {
        let buddies = take_records(&mut record, BUDDIES)?;
        let guilds = take_records(&mut record, GUILDS)?;

        Ok(Self {
            name: take_text(&mut record, "name"),
            id: take_scalar(&mut record, "id"),
            firstname: take_text(&mut record, "firstname"),
            lastname: take_text(&mut record, "lastname"),
            avatar: take_text(&mut record, "avatarlink"),
            last_login: take_text(&mut record, "lastlogin"),
            state: take_text(&mut record, "stateorprovince"),
            country: take_text(&mut record, "country"),
            homepage: take_text(&mut record, "webaddress"),
            xbox_account: take_text(&mut record, "xboxaccount"),
            wii_account: take_text(&mut record, "wiiaccount"),
            steam_account: take_text(&mut record, "steam_account"),
            psn_account: take_text(&mut record, "psnaccount"),
            trade_rating: take_scalar(&mut record, "trade_rating"),
            buddies,
            guilds,
            extra: record,
        })
    }
}

impl TryFrom<Value> for User {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(record) => Self::try_from(record),
            other => Err(RecordError::NotARecord {
                kind: value_kind(&other),
            }),
        }
    }
}

impl From<User> for Record {
    fn from(user: User) -> Self {
        let mut record = Record::new();
        if let Some(id) = user.id {
            record.insert("id".to_string(), Value::from(id));
        }
        if let Some(trade_rating) = user.trade_rating {
            record.insert("trade_rating".to_string(), Value::from(trade_rating));
        }

        let text_fields = [
            ("name", user.name),
            ("firstname", user.firstname),
            ("lastname", user.lastname),
            ("avatarlink", user.avatar),
            ("lastlogin", user.last_login),
            ("stateorprovince", user.state),
            ("country", user.country),
            ("webaddress", user.homepage),
            ("xboxaccount", user.xbox_account),
            ("wiiaccount", user.wii_account),
            ("steam_account", user.steam_account),
            ("psnaccount", user.psn_account),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value {
                record.insert(key.to_string(), Value::String(value));
            }
        }

        record.extend(user.extra);
        record.insert(
            BUDDIES.to_string(),
            Value::Array(user.buddies.into_iter().map(Value::Object).collect()),
        );
        record.insert(
            GUILDS.to_string(),
            Value::Array(user.guilds.into_iter().map(Value::Object).collect()),
        );
        record
    }
}

/// `{}` gives `User: <firstname> <lastname>`, `{:#}` gives `User: <name> (id: <id>)`
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(
                f,
                "User: {} (id: {})",
                display_opt(self.name()),
                display_opt(self.id())
            )
        } else {
            write!(
                f,
                "User: {} {}",
                display_opt(self.firstname()),
                display_opt(self.lastname())
            )
        }
    }
}
