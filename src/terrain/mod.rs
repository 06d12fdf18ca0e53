pub mod layout;
pub mod mountain;
pub mod profile;
pub mod sequence;
