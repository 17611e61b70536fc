pub mod helpers;
pub mod layout;
pub mod sources;
