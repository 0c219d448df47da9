//! User domain types: attribute sets, lookup queries, records and the value
//! objects that validate individual fields.

pub mod attributes;
mod payload;
pub mod query;
pub mod record;
pub mod value_objects;

pub use attributes::{UserAttributes, UserUpdate};
pub use query::{LookupKey, UserQuery};
pub use record::{ProviderUserInfo, UserRecord};
