use clap::Parser;
use tracing::Level;

use crate::connector::api::config::{DEFAULT_HOST, DEFAULT_PORT};
use crate::connector::{ContainerConfig, ServerConfig};

#[derive(Debug, Parser)]
#[command(name = "user-registry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Address to bind
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Start with an empty registry instead of the two sample users
    #[arg(long)]
    pub no_seed: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig::new(self.host.clone(), self.port)
    }

    pub fn container_config(&self) -> ContainerConfig {
        ContainerConfig {
            seed: !self.no_seed,
        }
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_5000() {
        let cli = Cli::try_parse_from(["user-registry"]).unwrap();

        assert_eq!(cli.server_config(), ServerConfig::new("0.0.0.0", 5000));
        assert!(cli.container_config().seed);
        assert_eq!(cli.log_level(), Level::INFO);
    }

    #[test]
    fn host_port_and_seed_flags() {
        let cli = Cli::try_parse_from([
            "user-registry",
            "--host",
            "127.0.0.1",
            "-p",
            "8080",
            "--no-seed",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.server_config().address(), "127.0.0.1:8080");
        assert!(!cli.container_config().seed);
        assert_eq!(cli.log_level(), Level::DEBUG);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let res = Cli::try_parse_from(["user-registry", "--port", "http"]);
        assert!(res.is_err(), "non-numeric port should not parse");
    }
}
