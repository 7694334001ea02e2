use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Server settings. Every flag can also be given through its environment
/// variable; flags win over the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", version, about = "In-memory to-do HTTP service")]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "TODO_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Path the /todo routes are mounted under, e.g. "/api"
    #[arg(long, env = "TODO_ROUTE_PREFIX", default_value = "")]
    pub route_prefix: String,

    /// Start with an empty store instead of the two sample items
    #[arg(long, env = "TODO_NO_SEED")]
    pub no_seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            route_prefix: String::new(),
            no_seed: false,
        }
    }
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Route prefix with exactly one leading slash and no trailing slash.
    /// Empty means the routes live at the root.
    pub fn prefix(&self) -> String {
        normalize_prefix(&self.route_prefix)
    }
}

pub fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
