// `faction` category: faction profile and member list.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::auth::ApiKey;
use crate::client::TornClient;
use crate::error::Error;
use crate::ids::{FactionId, MemberId};
use crate::models::{FactionMember, FactionProfile};

/// What the hospital lookup keeps of a member: their name and release time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HospitalEntry {
    pub name: String,
    /// Unix timestamp (seconds) at which the member leaves hospital.
    pub until: i64,
}

/// Reduce a member map to the members currently in hospital.
pub fn hospitalized_members(
    members: &BTreeMap<MemberId, FactionMember>,
) -> BTreeMap<MemberId, HospitalEntry> {
    members
        .iter()
        .filter(|(_, member)| member.status.is_hospitalized())
        .map(|(id, member)| {
            (
                *id,
                HospitalEntry {
                    name: member.name.clone(),
                    until: member.status.until,
                },
            )
        })
        .collect()
}

impl TornClient {
    /// Fetch a faction's profile, including its member map.
    ///
    /// `GET /faction/{faction_id}?selections=`
    pub async fn fetch_faction(
        &self,
        key: &ApiKey,
        faction_id: FactionId,
    ) -> Result<FactionProfile, Error> {
        let url = self.api_url("faction", Some(faction_id.get()), "", key)?;
        debug!(%faction_id, "fetching faction profile");
        self.get(url).await
    }

    /// Members of a faction currently in hospital, keyed by member ID.
    ///
    /// An ID outside `(0, 999999)` is reported but the request is still
    /// issued. Returns `None` after one diagnostic on any failure.
    pub async fn get_faction_members_in_hospital(
        &self,
        key: &ApiKey,
        faction_id: FactionId,
    ) -> Option<BTreeMap<MemberId, HospitalEntry>> {
        if !faction_id.is_in_known_range() {
            // TODO: decide with product whether an out-of-range ID should stop the request.
            warn!(%faction_id, "faction ID outside the known range");
            self.reporter().failure(
                "Error while retrieving faction members in hospital - invalid faction ID.",
            );
        }

        match self.fetch_faction(key, faction_id).await {
            Ok(faction) => {
                let hospitalized = hospitalized_members(&faction.members);
                debug!(
                    total = faction.members.len(),
                    hospitalized = hospitalized.len(),
                    "filtered faction members"
                );
                Some(hospitalized)
            }
            Err(err) => {
                self.report_failure("faction members in hospital", &err);
                None
            }
        }
    }
}
