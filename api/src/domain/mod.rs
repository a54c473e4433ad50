pub mod auth;
pub mod form;
pub mod headers;
pub mod request;
pub mod response;
pub mod ui;
