pub mod response_common;
pub mod auth;
pub mod delete_account;
pub mod weather;
pub mod celestial;
pub mod geocode;
pub mod iss;
