// handlers/api/mod.rs - JSON API handlers (/api/*)
//
// Every handler here validates its query string, calls one of the store
// capabilities held in AppState, and answers with the `{ success, data }`
// envelope or an ApiError. Authentication is handled in front of this service.

pub mod consent;
pub mod documents;

pub use consent::*;
pub use documents::*;
