use clap::{Parser, Subcommand};
use did_utils::methods::{to_did_web, DIDResolver, Resolver, ResolverConfig, DID_RESOLVER_ENV};
use dotenv_flow::dotenv_flow;
use eyre::WrapErr;
use tracing::info;
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

/// Resolve DIDs into DID documents.
#[derive(Parser)]
#[command(name = "did-resolver", version, about)]
struct Cli {
    /// Base URL of the universal resolver used for methods other than did:jwk
    #[arg(long, global = true, env = DID_RESOLVER_ENV, default_value = "")]
    resolver: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the DID document of a DID
    Resolve { did: String },

    /// Print the JsonWebKey2020 keys of a DID as a JWK set
    Keys { did: String },

    /// Print the did:web identifier of a service URL
    DidWeb {
        url: String,

        /// Replace a loopback host with host.docker.internal
        #[arg(long)]
        docker_aware: bool,
    },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Load dotenv-flow variables
    dotenv_flow().ok();

    // Enable logging
    config_tracing();

    let cli = Cli::parse();
    let config = ResolverConfig::new(cli.resolver);

    match cli.command {
        Command::Resolve { did } => {
            let diddoc = resolver(&config).resolve(&did).await.wrap_err_with(|| format!("failed to resolve {did}"))?;
            println!("{}", serde_json::to_string_pretty(&diddoc)?);
        }
        Command::Keys { did } => {
            let diddoc = resolver(&config).resolve(&did).await.wrap_err_with(|| format!("failed to resolve {did}"))?;
            let keys = diddoc.extract_public_keys();
            info!("found {} key(s) in {did}", keys.len());
            println!("{}", serde_json::to_string_pretty(&keys)?);
        }
        Command::DidWeb { url, docker_aware } => {
            println!("{}", to_did_web(&url, docker_aware));
        }
    }

    Ok(())
}

fn resolver(config: &ResolverConfig) -> Resolver {
    if config.resolver_base_url.is_empty() {
        info!("no universal resolver configured, only did:jwk can be resolved");
    }
    Resolver::new(config)
}

fn config_tracing() {
    let tracing_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let filter = filter::Targets::new()
        .with_target("hyper", tracing::Level::INFO)
        .with_target("did_utils", tracing::Level::DEBUG)
        .with_target("did_resolver", tracing::Level::DEBUG)
        .with_default(tracing::Level::WARN);

    tracing_subscriber::registry()
        .with(tracing_layer)
        .with(filter)
        .init();
}
