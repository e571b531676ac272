pub mod aggregate;
pub mod query;

pub use aggregate::{Account, AccountId};
