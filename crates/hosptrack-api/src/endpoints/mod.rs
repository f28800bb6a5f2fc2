// Torn API endpoints, one file per category.
//
// Each category exposes a `fetch_*` method returning the typed `Error`, and
// the sentinel operation built on top of it that reports failures through
// the client's `Reporter` and never returns an error.

pub mod faction;
pub mod torn;
pub mod user;
