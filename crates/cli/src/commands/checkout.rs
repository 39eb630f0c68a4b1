use storefront_core::{Dispatch, ProductId};

use crate::commands::{open_storefront, CommandResult};

/// Builds a cart from `items` (repeat an id to raise its quantity) and routes
/// the order. Without `agent` the next available channel is used.
pub fn run(items: &[u32], agent: Option<i64>) -> CommandResult {
    let mut storefront = match open_storefront("checkout") {
        Ok(storefront) => storefront,
        Err(failure) => return failure,
    };

    for id in items {
        if let Err(error) = storefront.add_to_cart(ProductId(*id)) {
            return CommandResult::domain_failure("checkout", error);
        }
    }

    match storefront.checkout(agent) {
        Ok(dispatch) => dispatched("checkout", &dispatch),
        Err(error) => CommandResult::domain_failure("checkout", error),
    }
}

pub(crate) fn dispatched(command: &str, dispatch: &Dispatch) -> CommandResult {
    CommandResult::success_with_data(command, dispatch.notice(), dispatch)
}
