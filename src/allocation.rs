pub mod candidates;
pub mod distributor;
pub mod ranking;
