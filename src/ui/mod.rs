pub mod layout;
pub mod watermark;

pub use layout::{Role, RoleLayout};
pub use watermark::demo_watermark;
