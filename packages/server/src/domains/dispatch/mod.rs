//! Dispatch - matching candidate captains to a pickup point and fanning
//! out ride offers.

pub mod coordinator;

pub use coordinator::{broadcast_offer, find_candidates, Candidate};
