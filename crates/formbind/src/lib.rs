//! Decode flat, multi-valued form data into typed records.
//!
//! ```
//! use formbind::{Decoder, FormRecord, FormValues, KeyScheme};
//!
//! #[derive(Debug, Default, FormRecord)]
//! #[form(rename_all = "camelCase")]
//! struct Signup {
//!     user_name: String,
//!     age: u8,
//!     address: Option<Address>,
//! }
//!
//! #[derive(Debug, Default, FormRecord)]
//! struct Address {
//!     city: String,
//! }
//!
//! let values = FormValues::from_urlencoded(b"userName=ada&age=36&address[city]=London");
//! let mut signup = Signup::default();
//! Decoder::new()
//!     .recurse_scheme(KeyScheme::RepeatedBrackets)
//!     .decode(&values, &mut signup)
//!     .unwrap();
//! assert_eq!(signup.user_name, "ada");
//! assert_eq!(signup.address.unwrap().city, "London");
//! ```

pub use formbind_core::*;
pub use formbind_macros::FormRecord;
