// `user` category: player profiles.

use tracing::debug;

use crate::auth::ApiKey;
use crate::client::TornClient;
use crate::error::Error;
use crate::ids::UserId;
use crate::models::{UserFaction, UserProfile};

impl TornClient {
    /// Fetch a player's basic profile.
    ///
    /// `GET /user/{user_id}?selections=`
    pub async fn fetch_user(&self, key: &ApiKey, user_id: UserId) -> Result<UserProfile, Error> {
        let url = self.api_url("user", Some(user_id.get()), "", key)?;
        debug!(%user_id, "fetching user profile");
        self.get(url).await
    }

    /// The faction a player belongs to.
    ///
    /// Returns `None` after one diagnostic on any failure. A player outside
    /// any faction yields `Some` with `faction_id == None`.
    pub async fn get_user_faction(&self, key: &ApiKey, user_id: UserId) -> Option<UserFaction> {
        match self.fetch_user(key, user_id).await {
            Ok(profile) => Some(UserFaction::from(profile.faction)),
            Err(err) => {
                self.report_failure("user faction", &err);
                None
            }
        }
    }
}
