//! # Signer Slot Registry
//!
//! Reward-cycle scoped registry of which signers hold write slots in the signer
//! StackerDB, plus the constant configuration of that store.

pub mod cli;
pub mod constants;
pub mod events;
pub mod governance;
pub mod onchain;
pub mod output;
pub mod registry;
pub mod rpc;
pub mod service;
