pub mod identity;
pub mod report;
pub mod request;
