// handlers/portal/mod.rs - Server-rendered portal shells (/buyer, /agent)

pub mod pages;

pub use pages::{agent_page, buyer_page};
