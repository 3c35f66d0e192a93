use clap::{Parser, Subcommand};

use crate::commands::{login, logout, products, search, status};

#[derive(Debug, Parser)]
#[command(name = "oxadm")]
#[command(about = "OX admin panel CLI", long_about = None, version)]
pub struct Cli {
    /// Show error causes, remediation and debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in to a tenant and save the session
    Login(login::Args),

    /// Remove the saved session
    Logout,

    /// Show the saved session
    Status,

    /// List products page by page
    Products(products::Args),

    /// Search all products by name
    Search(search::Args),
}
