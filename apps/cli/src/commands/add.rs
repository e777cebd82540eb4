//! The `vocab add` command.

use anyhow::{anyhow, bail, Result};
use vocab_core::{WordPair, WordSink};

use crate::config::Config;
use crate::store::WordBook;

pub fn execute(config: &Config, spanish: String, bulgarian: String, json: bool) -> Result<()> {
    let mut book = WordBook::load(&config.book, config.import_options())?;
    let previous = book.get(&spanish).map(|word| word.bulgarian.clone());

    let report = book
        .submit(&[WordPair::new(spanish.as_str(), bulgarian)])
        .map_err(|message| anyhow!(message))?;
    if let Some(error) = report.errors.first() {
        bail!("{}", error.message);
    }
    book.save(&config.book)?;

    let Some(word) = book.get(&spanish) else {
        bail!("word '{}' was not stored", spanish.trim());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(word)?);
        return Ok(());
    }

    match previous {
        Some(old) => println!("Updated {} = {} (was {old}).", word.spanish, word.bulgarian),
        None => println!("Added {} = {}.", word.spanish, word.bulgarian),
    }

    Ok(())
}
