//! Colored console output for the signer slot registry.
//!
//! Color scheme: blue+bold headers, cyan values, green success,
//! yellow warnings, dimmed secondary text.

use alloy_primitives::Address;
use colored::Colorize;
use std::net::SocketAddr;
use std::path::Path;

use crate::registry::{RegistryState, StoreConfig};

// ── Banner & Identity ──────────────────────────────────────────────

/// Print the startup banner with the registry contract address.
pub fn print_banner(contract: Address) {
    println!();
    println!("{}", "=== Signer Slot Registry ===".blue().bold());
    println!("  Contract:     {}", format!("{contract}").cyan());
}

/// Print the principals allowed to set signer slots.
pub fn print_writers(writers: &[Address]) {
    println!(
        "  Authorized writers ({}):",
        writers.len().to_string().cyan()
    );
    for (i, writer) in writers.iter().enumerate() {
        println!(
            "    {}. {}",
            (i + 1).to_string().dimmed(),
            format!("{writer}").cyan()
        );
    }
}

// ── Registry State ─────────────────────────────────────────────────

/// Print the state the registry starts serving with.
pub fn print_state(state: &RegistryState) {
    if state.slots.is_empty() {
        println!(
            "  Signer slots: {} (cycle {})",
            "unset".dimmed(),
            state.last_set_cycle.to_string().cyan()
        );
    } else {
        println!(
            "  Signer slots: {} signers, {} slots (cycle {})",
            state.slots.len().to_string().cyan(),
            state.slots.total_slots().to_string().cyan(),
            state.last_set_cycle.to_string().cyan()
        );
    }
}

/// Print the StackerDB configuration.
pub fn print_store_config(config: &StoreConfig) {
    println!(
        "  StackerDB:    chunk {} bytes, {} neighbors",
        config.chunk_size.to_string().cyan(),
        config.max_neighbors.to_string().cyan()
    );
}

/// Print where the storage mirror is persisted.
pub fn print_storage_path(path: &Path) {
    println!("  Storage:      {}", path.display().to_string().cyan());
}

/// Warn that state will not survive a restart.
pub fn print_memory_only_warning() {
    println!(
        "  {} Storage mirror disabled, signer slots are kept in memory only",
        "WARN".yellow().bold()
    );
}

// ── Server Lifecycle ───────────────────────────────────────────────

/// Print the RPC listen address.
pub fn print_rpc_listening(addr: SocketAddr) {
    println!(
        "  {} RPC listening on {}",
        "OK".green().bold(),
        format!("http://{addr}").cyan()
    );
    println!();
}

/// Print the shutdown notice.
pub fn print_shutdown() {
    println!("{}", "Shutting down signer slot registry".dimmed());
}
