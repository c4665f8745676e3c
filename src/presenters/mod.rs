pub mod layout;
#[cfg(feature = "gui")]
pub mod pixels;
pub mod status;
