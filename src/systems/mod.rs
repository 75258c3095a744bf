pub mod engagement;
pub mod notify;
pub mod persist;
pub mod sections;
pub mod session;
