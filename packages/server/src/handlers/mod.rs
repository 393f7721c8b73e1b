pub mod clothing;
pub mod media;
pub mod outfit;
pub mod preference;
pub mod profile;
