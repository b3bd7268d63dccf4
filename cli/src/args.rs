use clap::{Parser, Subcommand};
use todoly_core::SERVICE_URL;

#[derive(Parser)]
#[command(name = "todoly", version, about = "Command-line client for the todo.ly to-do service")]
pub struct Cli {
    /// Base URL of the service.
    #[arg(long, global = true, default_value = SERVICE_URL)]
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the to-do list
    List,
    /// Add one or more to-dos
    Add {
        #[arg(required = true, value_name = "CONTENT")]
        content: Vec<String>,
    },
    /// Check off one or more to-dos
    Check {
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },
    /// Uncheck one or more to-dos
    Uncheck {
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },
    /// Delete one or more to-dos
    Del {
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },
}
