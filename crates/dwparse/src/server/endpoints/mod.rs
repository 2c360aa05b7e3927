pub mod status;
pub mod transcript;
