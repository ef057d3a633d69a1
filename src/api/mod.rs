pub mod query;
pub mod response;

pub use query::QueryParams;
pub use response::{ApiResponse, ApiResult};
