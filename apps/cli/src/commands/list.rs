//! The `vocab list` command.

use anyhow::Result;

use crate::config::Config;
use crate::store::{StoredWord, WordBook};

pub fn execute(config: &Config, json: bool) -> Result<()> {
    let book = WordBook::load(&config.book, config.import_options())?;

    if json {
        let words: Vec<&StoredWord> = book.words().collect();
        println!("{}", serde_json::to_string_pretty(&words)?);
        return Ok(());
    }

    if book.is_empty() {
        println!("Word book is empty.");
        return Ok(());
    }

    for word in book.words() {
        println!("{} = {}", word.spanish, word.bulgarian);
    }
    println!("\n{} word(s).", book.len());

    Ok(())
}
