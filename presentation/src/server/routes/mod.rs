pub mod meta;
pub mod umbrella;
pub mod video;
pub mod weather;
