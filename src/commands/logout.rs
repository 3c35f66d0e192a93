//! oxadm logout コマンド

use crate::error::Result;
use crate::session::SessionStore;
use owo_colors::OwoColorize;

pub fn run(store: &SessionStore) -> Result<()> {
    if store.clear()? {
        println!("{} Logged out", "✓".green());
    } else {
        println!("{} No saved session", "•".yellow());
    }
    Ok(())
}
