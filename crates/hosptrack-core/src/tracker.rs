// ── Tracking workflow ──
//
// Key check → optional user-to-faction lookup → hospital lookup, strictly
// in that order, one request at a time. Progress lines go to the client's
// reporter; failures were already reported by the client itself.

use chrono::{DateTime, Utc};
use tracing::debug;

use hosptrack_api::{ApiKey, FactionId, TornClient, UserId};

use crate::hospital::HospitalView;

/// Whose faction to inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Faction(FactionId),
    /// Resolve the faction through this player's profile first.
    User(UserId),
}

/// How a tracking run ended.
#[derive(Debug, Clone)]
pub enum TrackOutcome {
    /// The timestamp check failed; carries the client's sentinel (`<= 0`).
    KeyRejected { sentinel: i64 },
    /// The user lookup failed or the user is not in a faction.
    NoFaction,
    /// The member list could not be retrieved.
    MembersUnavailable { faction_id: FactionId },
    Hospitalized {
        faction_id: FactionId,
        view: HospitalView,
    },
}

pub struct Tracker {
    client: TornClient,
}

impl Tracker {
    pub fn new(client: TornClient) -> Self {
        Self { client }
    }

    /// Run the workflow against the wall clock.
    pub async fn run(&self, key: &ApiKey, target: Target) -> TrackOutcome {
        self.run_with_clock(key, target, Utc::now).await
    }

    /// Run the workflow, reading "now" from `clock` once the member list
    /// has arrived.
    pub async fn run_with_clock(
        &self,
        key: &ApiKey,
        target: Target,
        clock: impl FnOnce() -> DateTime<Utc>,
    ) -> TrackOutcome {
        let reporter = self.client.reporter();

        reporter.progress(&format!("Testing API key: {}", key.masked()));
        let timestamp = self.client.get_timestamp(key).await;
        if timestamp <= 0 {
            reporter.progress("Failed to retrieve timestamp with supplied API key - exiting.");
            return TrackOutcome::KeyRejected {
                sentinel: timestamp,
            };
        }
        reporter.progress("API key correct.");
        debug!(timestamp, "server timestamp");

        let faction_id = match target {
            Target::Faction(id) => id,
            Target::User(user_id) => match self.resolve_faction(key, user_id).await {
                Some(id) => id,
                None => {
                    reporter.progress("No faction ID - exiting");
                    return TrackOutcome::NoFaction;
                }
            },
        };

        reporter.progress(&format!(
            "Checking how many members of faction ID {faction_id} are in the hospital."
        ));
        let Some(entries) = self
            .client
            .get_faction_members_in_hospital(key, faction_id)
            .await
        else {
            reporter.progress("Failed to retrieve faction members in hospital.");
            return TrackOutcome::MembersUnavailable { faction_id };
        };

        let view = HospitalView::from_entries(entries, clock());
        reporter.progress(&format!("{} members in the hospital.", view.len()));
        TrackOutcome::Hospitalized { faction_id, view }
    }

    async fn resolve_faction(&self, key: &ApiKey, user_id: UserId) -> Option<FactionId> {
        let reporter = self.client.reporter();
        reporter.progress(&format!("Retrieving faction ID for user ID {user_id}"));

        let faction = self.client.get_user_faction(key, user_id).await?;
        let faction_id = faction.faction_id?;
        reporter.progress(&format!(
            "User {user_id} is in faction {} [{faction_id}]",
            faction.faction_name
        ));
        Some(faction_id)
    }
}
