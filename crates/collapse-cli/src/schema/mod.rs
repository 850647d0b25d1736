pub mod profile;
pub mod record;
