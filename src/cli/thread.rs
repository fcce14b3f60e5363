//! Thread CLI commands: creating, showing, listing and importing lists

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::DocumentKey;
use crate::storage::{DocumentStore, Workspace};

pub fn new_thread(output: &Output, thread: &str) -> Result<()> {
    let key: DocumentKey = thread.parse()?;
    let workspace = Workspace::open_current()?;

    output.verbose_ctx("new", &format!("Creating list for thread {}", key));
    let outcome = workspace.dispatcher().create(&key)?;

    output.list(&key, &outcome);
    Ok(())
}

pub fn show_thread(output: &Output, thread: &str, raw: bool) -> Result<()> {
    let key: DocumentKey = thread.parse()?;
    let workspace = Workspace::open_current()?;
    let dispatcher = workspace.dispatcher();

    if raw {
        let text = dispatcher
            .store()
            .fetch(&key)?
            .ok_or_else(|| anyhow::anyhow!("No list found for thread {}", key))?;
        output.raw(&key, &text);
        return Ok(());
    }

    let outcome = dispatcher.show(&key)?;
    output.verbose_ctx(
        "show",
        &format!(
            "{} pending, {} done",
            outcome.list.pending().len(),
            outcome.list.done().len()
        ),
    );

    output.list(&key, &outcome);
    Ok(())
}

pub fn list_threads(output: &Output) -> Result<()> {
    let workspace = Workspace::open_current()?;
    let keys = workspace.dispatcher().threads()?;

    output.threads(&keys);
    Ok(())
}

pub fn import_thread(output: &Output, thread: &str, source: &str) -> Result<()> {
    let key: DocumentKey = thread.parse()?;
    let workspace = Workspace::open_current()?;

    let text = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read message text from stdin")?;
        buf
    } else {
        fs::read_to_string(source).with_context(|| format!("Failed to read {}", source))?
    };

    output.verbose_ctx("import", &format!("Read {} bytes from {}", text.len(), source));
    let outcome = workspace.dispatcher().import(&key, &text)?;

    output.imported(&key, &outcome);
    Ok(())
}
