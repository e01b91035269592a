use clap::{Parser, Subcommand};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather-mcp",
    version,
    about = "MCP server with current weather, 7-day forecast and city comparison tools"
)]
pub struct Cli {
    /// Transport to serve on; defaults to stdio.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Speak MCP over standard input/output.
    Stdio,

    /// Serve MCP over HTTP (SSE at /sse, streamable HTTP at /mcp).
    Http {
        /// Bind address; overrides the configured host.
        #[arg(long)]
        host: Option<String>,

        /// Listening port; overrides the configured port.
        #[arg(long, short)]
        port: Option<u16>,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Stdio)
    }
}
