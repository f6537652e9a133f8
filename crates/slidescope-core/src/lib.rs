pub mod config;
pub mod consts;
pub mod detection;
pub mod error;
pub mod geometry;
pub mod io;
pub mod magnifier;
pub mod overlay;
pub mod payload;
pub mod session;
pub mod summary;
pub mod viewport;
