//! Use cases
//!
//! The Weather Vibes pipelines. Each one is a [`Pipeline`](crate::agent::Pipeline)
//! run through [`Agent::run`](crate::agent::Agent::run).

pub mod check_umbrella;
pub mod get_weather;
pub mod recommend_video;
pub(crate) mod shared;

#[cfg(test)]
pub(crate) mod test_support;
