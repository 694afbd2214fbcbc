//! pRPC CLI
//!
//! Query pNodes for pod listings and statistics, and locate pods by pubkey
//! via the bootstrap seeds.

use clap::{Parser, Subcommand};
use prpc::{FindPNodeOptions, RpcClient, find_pnode};
use std::time::Duration;

/// pRPC - pNode RPC client
#[derive(Parser)]
#[command(name = "prpc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List pods known to a pNode
    Pods {
        /// pNode address (IP or host:port)
        #[arg(required = true)]
        addr: String,

        /// Include detailed storage statistics
        #[arg(long)]
        stats: bool,
    },

    /// Show runtime statistics of a pNode
    Stats {
        /// pNode address (IP or host:port)
        #[arg(required = true)]
        addr: String,
    },

    /// Locate a pod by pubkey via the bootstrap seeds
    Find {
        /// Public key of the pod to locate
        #[arg(required = true)]
        pubkey: String,

        /// Extra seed addresses, appended to the defaults
        #[arg(long = "seed")]
        seeds: Vec<String>,

        /// Seed addresses that replace the defaults entirely
        #[arg(long = "replace-seed", conflicts_with = "seeds")]
        replace_seeds: Vec<String>,

        /// Overall discovery deadline in seconds
        #[arg(long, default_value_t = 10)]
        timeout: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(if cli.verbose { "debug" } else { "info" })
        .init();

    match cli.command {
        Commands::Pods { addr, stats } => {
            list_pods(&addr, stats).await?;
        }
        Commands::Stats { addr } => {
            show_stats(&addr).await?;
        }
        Commands::Find {
            pubkey,
            seeds,
            replace_seeds,
            timeout,
        } => {
            find(&pubkey, seeds, replace_seeds, timeout).await?;
        }
    }

    Ok(())
}

/// List pods from one pNode
async fn list_pods(addr: &str, with_stats: bool) -> anyhow::Result<()> {
    let client = RpcClient::new(addr)?;

    let resp = if with_stats {
        client.get_pods_with_stats().await?
    } else {
        client.get_pods().await?
    };

    println!("{} pods known to {}", resp.total_count, addr);
    for pod in &resp.pods {
        println!(
            "  {}  {}:{}  v{}  up {}s",
            pod.pubkey, pod.address, pod.rpc_port, pod.version, pod.uptime
        );
        if with_stats {
            println!(
                "      storage {}/{} bytes ({:.1}%)",
                pod.storage_used, pod.storage_committed, pod.storage_usage_percent
            );
        }
    }

    Ok(())
}

/// Show runtime statistics for one pNode
async fn show_stats(addr: &str) -> anyhow::Result<()> {
    let client = RpcClient::new(addr)?;
    let stats = client.get_stats().await?;

    println!("pNode {addr}");
    println!("  uptime:          {}s", stats.uptime);
    println!("  cpu:             {:.1}%", stats.cpu_percent);
    println!("  ram:             {}/{} bytes", stats.ram_used, stats.ram_total);
    println!("  active streams:  {}", stats.active_streams);
    println!("  packets:         {} rx / {} tx", stats.packets_received, stats.packets_sent);
    println!("  storage:         {} bytes, {} pages", stats.total_bytes, stats.total_pages);

    Ok(())
}

/// Locate a pod via the bootstrap seeds
async fn find(
    pubkey: &str,
    seeds: Vec<String>,
    replace_seeds: Vec<String>,
    timeout_secs: u64,
) -> anyhow::Result<()> {
    let mut options = FindPNodeOptions::default().with_timeout(Duration::from_secs(timeout_secs));
    if !replace_seeds.is_empty() {
        options = options.with_replace_seeds(replace_seeds);
    } else if !seeds.is_empty() {
        options = options.with_add_seeds(seeds);
    }

    tracing::info!("searching seeds for pNode {}", pubkey);
    let pod = find_pnode(pubkey, options).await?;

    println!("found pod {}", pod.pubkey);
    println!("  address:    {}:{}", pod.address, pod.rpc_port);
    println!("  version:    {}", pod.version);
    println!("  last seen:  {}", pod.last_seen_timestamp);
    if let Some(is_public) = pod.is_public {
        println!("  public:     {is_public}");
    }

    Ok(())
}
