pub mod request_common;
pub mod login_post;
pub mod register_post;
pub mod delete_account_delete;
pub mod weather_get;
pub mod celestial_get;
pub mod geocode_get;
pub mod iss_get;
pub mod forecast_get;
pub mod body_positions_get;
pub mod reverse_get;
pub mod iss_now_get;
