// hosptrack-api: Async Rust client for the Torn City REST API
//
// Request construction, HTTP- and envelope-level error classification,
// and the typed records behind the `torn`, `user` and `faction` categories.

pub mod auth;
pub mod client;
pub mod decode;
pub mod endpoints;
pub mod error;
pub mod error_code;
pub mod ids;
pub mod models;
pub mod report;
pub mod transport;

pub use auth::ApiKey;
pub use client::TornClient;
pub use endpoints::faction::{HospitalEntry, hospitalized_members};
pub use error::Error;
pub use error_code::{ApiErrorCode, error_code_to_message};
pub use ids::{FactionId, MemberId, UserId};
pub use models::{
    FactionMember, FactionMembership, FactionProfile, HOSPITAL_STATE, LastAction, MemberStatus,
    UserFaction, UserProfile,
};
pub use report::{Reporter, TracingReporter};
pub use transport::{DEFAULT_BASE_URL, TransportConfig};
