use storefront_core::OrderDetails;

use crate::commands::checkout::dispatched;
use crate::commands::{open_storefront, CommandResult};

#[derive(Debug, Clone, Default)]
pub struct OrderArgs {
    pub product_name: Option<String>,
    pub quantity: Option<u32>,
    pub customer_name: String,
    pub customer_phone: String,
    pub notes: Option<String>,
    pub agent: Option<i64>,
}

pub fn run(args: OrderArgs) -> CommandResult {
    let details = match OrderDetails::new(
        args.product_name.as_deref(),
        args.quantity,
        &args.customer_name,
        &args.customer_phone,
        args.notes.as_deref(),
    ) {
        Ok(details) => details,
        Err(error) => return CommandResult::domain_failure("order", error),
    };

    let mut storefront = match open_storefront("order") {
        Ok(storefront) => storefront,
        Err(failure) => return failure,
    };

    match storefront.send_order(&details, args.agent) {
        Ok(dispatch) => dispatched("order", &dispatch),
        Err(error) => CommandResult::domain_failure("order", error),
    }
}
