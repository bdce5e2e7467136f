pub mod layout;
pub mod policy;
