//! Authentication primitives.
//!
//! Token issuance lives in the external identity provider; this module only
//! validates the HS256 access tokens it signs.

pub mod jwt;
