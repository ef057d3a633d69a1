// handlers/mod.rs - Route handlers grouped by surface
//
// system  → service metadata and liveness (/, /health)
// api     → JSON endpoints backed by the store capabilities (/api/*)
// portal  → server-rendered role shells (/buyer, /agent)
//
// Every handler takes `State<AppState>`; nothing reads process-wide config.

pub mod api;
pub mod portal;
pub mod system;

pub use api::*;
pub use portal::*;
pub use system::*;
