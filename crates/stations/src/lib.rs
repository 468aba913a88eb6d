//! Bike-share station gateway implementations and record formatting.
//!
//! The live city feed is an external collaborator; this crate ships the
//! in-process mock used by default plus the shared text formatter that
//! renders records into the payload's retrieved-data block.

pub mod format;
pub mod mock;

pub use format::format_stations;
pub use mock::MockStationGateway;
