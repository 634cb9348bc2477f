use clap::{Parser, Subcommand};
use dnsverify_application::DelegationResolver;
use dnsverify_domain::config::OutputFormat;
use dnsverify_domain::{AuthoritySource, CliOverrides, RecordType, ResolveError};
use output::{AuthorityReport, Outcome};
use std::net::IpAddr;
use std::process::ExitCode;
use tracing::{debug, info};

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "dnsverify")]
#[command(version)]
#[command(about = "Verify DNS records against the authoritative nameservers, bypassing caches")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level or tracing filter (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'o', long, value_name = "FORMAT", global = true)]
    output: Option<OutputFormat>,

    /// Shorthand for --output json
    #[arg(long, global = true, conflicts_with = "output")]
    json: bool,

    /// Where authority discovery starts (root, local-first)
    #[arg(long, value_name = "SOURCE", global = true)]
    authority: Option<AuthoritySource>,

    /// Ask the OS resolvers when the authoritative servers have no record
    #[arg(long, global = true)]
    system_fallback: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the first A record, following CNAMEs
    A { domain: String },

    /// Resolve the first AAAA record, following CNAMEs
    Aaaa { domain: String },

    /// Check that DOMAIN aliases to TARGET, possibly through other CNAMEs
    Cname { domain: String, target: String },

    /// Find the authoritative nameservers of DOMAIN
    Ns {
        domain: String,

        /// Ask the OS resolvers instead of walking from the root
        #[arg(long)]
        local: bool,
    },

    /// Send one iterative query to one server
    Query {
        name: String,

        #[arg(value_name = "TYPE")]
        record_type: RecordType,

        server: IpAddr,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        output_format: if cli.json { Some(OutputFormat::Json) } else { cli.output },
        authority: cli.authority,
        system_fallback: cli.system_fallback,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config.logging);

    debug!("dnsverify v{}", env!("CARGO_PKG_VERSION"));

    let resolver = di::build_resolver(&config);
    let format = config.output.format;

    match run(&resolver, cli.command).await {
        Ok(outcome) => {
            println!("{}", output::render(&outcome, format)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            info!(code = %e.code, error = %e, "Lookup failed");
            println!("{}", output::render_error(&e, format)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(resolver: &DelegationResolver, command: Command) -> Result<Outcome, ResolveError> {
    match command {
        Command::A { domain } => resolver.query_a(&domain).await.map(Outcome::Record),
        Command::Aaaa { domain } => resolver.query_aaaa(&domain).await.map(Outcome::Record),
        Command::Cname { domain, target } => {
            resolver.test_cname(&domain, &target).await.map(Outcome::Record)
        }
        Command::Ns { domain, local } => {
            let authority = if local {
                resolver.authoritative_ns_from_local(&domain).await?
            } else {
                resolver.authoritative_ns_from_root(&domain).await?
            };
            let report = match authority {
                Some(authority) => Some(AuthorityReport::from_authority(&authority).await),
                None => None,
            };
            Ok(Outcome::Authority(report))
        }
        Command::Query {
            name,
            record_type,
            server,
        } => resolver
            .query_dns(&name, record_type, server)
            .await
            .map(Outcome::Packet),
    }
}
