pub mod app;
pub mod avatar;
pub mod radar;
pub mod session;
pub mod theme;
