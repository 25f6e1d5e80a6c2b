//! Infrastructure layer - storage backends, repositories and services

pub mod invitation;
pub mod logging;
pub mod storage;
pub mod team;
pub mod user;
