use storefront_core::ProductId;

use crate::commands::checkout::dispatched;
use crate::commands::{open_storefront, CommandResult};

pub fn run(product_id: u32, agent: Option<i64>) -> CommandResult {
    let mut storefront = match open_storefront("inquire") {
        Ok(storefront) => storefront,
        Err(failure) => return failure,
    };

    match storefront.inquire(ProductId(product_id), agent) {
        Ok(dispatch) => dispatched("inquire", &dispatch),
        Err(error) => CommandResult::domain_failure("inquire", error),
    }
}
