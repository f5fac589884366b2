//! bytebridge-ctl — send a binary payload over HTTP POST and print the reply.

mod cmd;

use anyhow::{Context, Result};

use bytebridge_core::{BridgeConfig, Destination};
use bytebridge_transport::BridgeContext;

fn print_usage() {
    println!("Usage: bytebridge-ctl [--url <url>] [--hex] <command>");
    println!();
    println!("Commands:");
    println!("  send [<file>]   POST the file (or stdin) and write the reply to stdout");
    println!("  config          Show the resolved configuration");
    println!("  config init     Write the default config file if missing");
    println!();
    println!("Options:");
    println!("  --url <url>     Destination (default: endpoint.host + endpoint.path)");
    println!("  --hex           Print the reply as hex instead of raw bytes");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    // Parse options
    let mut url: Option<String> = None;
    let mut hex_output = false;
    let mut remaining: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--url" => {
                i += 1;
                url = Some(args.get(i).context("--url requires a value")?.clone());
            }
            "--hex" => hex_output = true,
            other => remaining.push(other),
        }
        i += 1;
    }

    let config = BridgeConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load config, using defaults");
        BridgeConfig::default()
    });

    match remaining.as_slice() {
        ["send"] | ["send", _] => {
            let destination = match &url {
                Some(u) => Destination::parse(u)?,
                None => config
                    .endpoint
                    .destination()
                    .context("configured endpoint is not a valid URL")?,
            };
            let ctx = BridgeContext::new(&config.transport)?;
            cmd::send::cmd_send(&ctx, &destination, remaining.get(1).copied(), hex_output).await
        }
        ["config"] => cmd::config::cmd_config_show(&config),
        ["config", "init"] => cmd::config::cmd_config_init(),
        ["help"] | ["--help"] | ["-h"] | [] => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other.join(" "));
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}
