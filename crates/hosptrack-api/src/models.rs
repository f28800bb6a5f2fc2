// Torn API response types
//
// Field names follow the JSON payloads. Every field is defaulted so that
// partially populated responses (private fields, new players) still decode,
// and an explicit `null` reads as the field's default.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::{FactionId, MemberId};

/// Decode a field, treating JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The `error` sub-record of the application error envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub code: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: String,
}

/// `{"error": {...}}` returned with HTTP 200.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: Option<ErrorBody>,
}

/// `GET /torn/?selections=timestamp`
#[derive(Debug, Clone, Deserialize)]
pub struct TimestampResponse {
    pub timestamp: i64,
}

/// `MemberStatus::state` value for players recovering in hospital.
pub const HOSPITAL_STATE: &str = "Hospital";

/// Current state of a player, shared by user and faction member payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub details: String,
    /// Free-form label: `"Okay"`, `"Hospital"`, `"Traveling"`, `"Jail"`, ...
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    /// Unix timestamp (seconds) at which the state ends; 0 when open-ended.
    #[serde(deserialize_with = "null_as_default")]
    pub until: i64,
}

impl MemberStatus {
    /// Exact, case-sensitive match on [`HOSPITAL_STATE`].
    pub fn is_hospitalized(&self) -> bool {
        self.state == HOSPITAL_STATE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastAction {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub relative: String,
}

/// One entry of a faction's `members` map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactionMember {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub level: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub days_in_faction: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub last_action: LastAction,
    #[serde(deserialize_with = "null_as_default")]
    pub status: MemberStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FactionRank {
    #[serde(deserialize_with = "null_as_default")]
    pub level: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub division: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub position: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub wins: u32,
}

/// `GET /faction/{id}?selections=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FactionProfile {
    #[serde(rename = "ID")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tag_image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub leader: u64,
    #[serde(rename = "co-leader")]
    #[serde(deserialize_with = "null_as_default")]
    pub co_leader: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub respect: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub age: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub capacity: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub best_chain: u32,
    pub rank: Option<FactionRank>,
    #[serde(deserialize_with = "null_as_default")]
    pub members: BTreeMap<MemberId, FactionMember>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Life {
    #[serde(deserialize_with = "null_as_default")]
    pub current: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub maximum: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub increment: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub interval: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub ticktime: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub fulltime: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub company_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company_type: u32,
}

/// The `faction` record nested in a user profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactionMembership {
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub faction_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub days_in_faction: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub faction_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub faction_tag: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Married {
    #[serde(deserialize_with = "null_as_default")]
    pub spouse_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub spouse_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct States {
    #[serde(deserialize_with = "null_as_default")]
    pub hospital_timestamp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub jail_timestamp: i64,
}

/// `GET /user/{id}?selections=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub player_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rank: String,
    #[serde(deserialize_with = "null_as_default")]
    pub level: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(deserialize_with = "null_as_default")]
    pub property: String,
    #[serde(deserialize_with = "null_as_default")]
    pub signup: String,
    #[serde(deserialize_with = "null_as_default")]
    pub awards: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub friends: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub enemies: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub forum_posts: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub karma: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub age: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub donator: u8,
    #[serde(deserialize_with = "null_as_default")]
    pub property_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub revivable: u8,
    #[serde(deserialize_with = "null_as_default")]
    pub life: Life,
    #[serde(deserialize_with = "null_as_default")]
    pub status: MemberStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub job: Job,
    #[serde(deserialize_with = "null_as_default")]
    pub faction: FactionMembership,
    #[serde(deserialize_with = "null_as_default")]
    pub married: Married,
    #[serde(deserialize_with = "null_as_default")]
    pub states: States,
    #[serde(deserialize_with = "null_as_default")]
    pub last_action: LastAction,
}

/// The faction a user belongs to, as resolved from their profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserFaction {
    /// `None` when the user is not in a faction (the API reports ID 0).
    pub faction_id: Option<FactionId>,
    pub faction_name: String,
    pub faction_tag: String,
    pub position: String,
    pub days_in_faction: u32,
}

impl From<FactionMembership> for UserFaction {
    fn from(m: FactionMembership) -> Self {
        Self {
            faction_id: FactionId::new(m.faction_id),
            faction_name: m.faction_name,
            faction_tag: m.faction_tag,
            position: m.position,
            days_in_faction: m.days_in_faction,
        }
    }
}
