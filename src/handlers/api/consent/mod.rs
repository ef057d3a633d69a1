pub mod check;

pub use check::check as consent_check;
