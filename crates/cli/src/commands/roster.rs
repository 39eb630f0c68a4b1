use serde::Serialize;
use storefront_core::{AgentRouter, ChannelStatus, IndexedChannel};

use crate::commands::{open_storefront, CommandResult};

#[derive(Debug, Serialize)]
struct RosterView<'a> {
    available: Vec<IndexedChannel<'a>>,
    away: Vec<IndexedChannel<'a>>,
    ignored_updates: Vec<String>,
}

/// Prints the checkout roster grouped by availability after applying any
/// `INDEX=STATUS` updates.
pub fn run(updates: &[String]) -> CommandResult {
    let mut storefront = match open_storefront("roster") {
        Ok(storefront) => storefront,
        Err(failure) => return failure,
    };

    let router = storefront.checkout_router_mut();
    let ignored_updates = match apply_updates(router, updates) {
        Ok(ignored) => ignored,
        Err(failure) => return failure,
    };

    let (available, away) = router.partition_by_status();
    let message = format!("{} online, {} away", available.len(), away.len());
    CommandResult::success_with_data(
        "roster",
        message,
        &RosterView { available, away, ignored_updates },
    )
}

/// Returns the updates whose index was out of range; those are skipped
/// rather than treated as errors.
fn apply_updates(router: &mut AgentRouter, updates: &[String]) -> Result<Vec<String>, CommandResult> {
    let mut ignored = Vec::new();
    for update in updates {
        let (index, status) = parse_update(update)?;
        if !router.set_status(index, status) {
            ignored.push(update.clone());
        }
    }
    Ok(ignored)
}

fn parse_update(update: &str) -> Result<(i64, ChannelStatus), CommandResult> {
    let malformed = || {
        CommandResult::failure(
            "roster",
            "invalid_argument",
            format!("--set `{update}` must look like INDEX=STATUS"),
            2,
        )
    };
    let (index, status) = update.split_once('=').ok_or_else(malformed)?;
    let index = index.trim().parse::<i64>().map_err(|_| malformed())?;
    let status = status
        .parse::<ChannelStatus>()
        .map_err(|error| CommandResult::domain_failure("roster", error))?;
    Ok((index, status))
}
