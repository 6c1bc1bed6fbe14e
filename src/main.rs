use signer_slot_registry::cli::Cli;
use signer_slot_registry::constants::SIGNER_SLOTS_CONTRACT_ADDRESS;
use signer_slot_registry::events::ChannelObserver;
use signer_slot_registry::onchain::FileStorage;
use signer_slot_registry::output;
use signer_slot_registry::rpc::{SlotsApiServer, SlotsRpc};
use signer_slot_registry::service::SharedRegistry;

use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Main entry point for the signer slot registry
#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("signer_slot_registry=info,slots=info"));
    if cli.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    output::print_banner(SIGNER_SLOTS_CONTRACT_ADDRESS);
    output::print_writers(&cli.writers());

    let registry = if cli.no_storage {
        output::print_memory_only_warning();
        SharedRegistry::new(cli.authorizer())
    } else {
        let storage = FileStorage::open_in(&cli.datadir)?;
        output::print_storage_path(storage.path());
        SharedRegistry::open(cli.authorizer(), Box::new(storage))?
    };
    output::print_state(&registry.state().await);
    output::print_store_config(&registry.get_config().await?);

    // Log committed writes off the request path
    let (observer, mut updates) = ChannelObserver::new();
    registry.register_observer(Arc::new(observer)).await;
    tokio::spawn(async move {
        while let Some(event) = updates.recv().await {
            info!(
                target: "slots::events",
                reward_cycle = %event.reward_cycle,
                previous_cycle = %event.previous_cycle,
                signers = event.signer_count,
                total_slots = %event.total_slots,
                "Signer slot list replaced"
            );
        }
    });

    let server = jsonrpsee::server::Server::builder()
        .build(cli.rpc_addr())
        .await?;
    let addr = server.local_addr()?;
    let handle = server.start(SlotsRpc::new(registry).into_rpc());
    output::print_rpc_listening(addr);

    tokio::select! {
        _ = handle.clone().stopped() => {}
        _ = tokio::signal::ctrl_c() => {
            output::print_shutdown();
            handle.stop()?;
            handle.stopped().await;
        }
    }

    Ok(())
}
