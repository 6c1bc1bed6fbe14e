use alloy_primitives::Address;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use crate::constants::{DEFAULT_GOVERNANCE_ADDRESS, DEFAULT_RPC_PORT};
use crate::governance::{AllowListAuthorizer, GovernanceAuthorizer};
use crate::service::SharedAuthorizer;

/// CLI arguments for the signer slot registry
#[derive(Parser, Debug)]
#[command(name = "signer-slot-registry", about = "StackerDB signer slot registry")]
pub struct Cli {
    /// HTTP RPC listen address
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub http_addr: IpAddr,

    /// HTTP RPC port
    #[arg(long, default_value_t = DEFAULT_RPC_PORT)]
    pub http_port: u16,

    /// Governance principal allowed to set signer slots.
    /// Can also be set via SLOTS_GOVERNANCE environment variable.
    #[arg(long, env = "SLOTS_GOVERNANCE")]
    pub governance: Option<Address>,

    /// Comma-separated list of additional principals allowed to set signer slots.
    #[arg(long, value_delimiter = ',')]
    pub allow: Vec<Address>,

    /// Data directory for the contract storage snapshot
    #[arg(long, default_value = "data")]
    pub datadir: PathBuf,

    /// Keep registry state in memory only instead of mirroring it into
    /// contract storage under `--datadir`.
    #[arg(long)]
    pub no_storage: bool,

    /// Enable structured JSON logging instead of human-readable output.
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Socket address the RPC server binds to.
    pub fn rpc_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http_addr, self.http_port)
    }

    /// Governance principal, falling back to the built-in default.
    pub fn governance(&self) -> Address {
        self.governance.unwrap_or(DEFAULT_GOVERNANCE_ADDRESS)
    }

    /// Principals allowed to write, governance first.
    pub fn writers(&self) -> Vec<Address> {
        let mut writers = vec![self.governance()];
        for addr in &self.allow {
            if !writers.contains(addr) {
                writers.push(*addr);
            }
        }
        writers
    }

    /// Build the write gate: governance only, or governance plus `--allow`.
    pub fn authorizer(&self) -> SharedAuthorizer {
        if self.allow.is_empty() {
            Arc::new(GovernanceAuthorizer::new(self.governance()))
        } else {
            Arc::new(AllowListAuthorizer::new(self.writers()))
        }
    }
}
