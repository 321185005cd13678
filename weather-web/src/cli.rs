use clap::Parser;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-web", version, about = "Weather query web service")]
pub struct Cli {
    /// Address to bind the HTTP server to.
    #[arg(long, env = "WEATHER_BIND", default_value = "127.0.0.1:8080")]
    pub bind: std::net::SocketAddr,
}
