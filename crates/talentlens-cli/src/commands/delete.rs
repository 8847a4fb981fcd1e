//! Delete command.

use super::get_database;
use anyhow::Result;
use colored::Colorize;

pub fn run(id: &str) -> Result<()> {
    let db = get_database()?;
    db.delete_resume(id)?;
    println!("{} Deleted resume {}", "✓".green(), id);
    Ok(())
}
