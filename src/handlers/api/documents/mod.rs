pub mod list;

pub use list::list as documents_list;
