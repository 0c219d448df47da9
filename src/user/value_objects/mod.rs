//! Value objects for user account attributes.
//!
//! Each value object validates its input at construction time, so a payload
//! built from them can only contain well-formed values. Validation is local
//! and pure: nothing here touches the network.
//!
//! ```rust
//! use identity_admin::user::value_objects::{Email, Uid};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let uid = Uid::new("u1".to_string())?;
//!     let email = Email::new("jane@example.com".to_string())?;
//!     println!("{} <{}>", uid, email);
//!     Ok(())
//! }
//! ```

mod display_name;
mod email;
mod password;
mod phone_number;
mod photo_url;
mod uid;

pub use display_name::DisplayName;
pub use email::Email;
pub use password::Password;
pub use phone_number::PhoneNumber;
pub use photo_url::PhotoUrl;
pub use uid::Uid;
