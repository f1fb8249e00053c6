//! `supplynet-scheduling`: greedy activity selection for a single resource
//! (a loading dock, a truck, a crane).

pub mod activity;

pub use activity::{Activity, select_activities};
