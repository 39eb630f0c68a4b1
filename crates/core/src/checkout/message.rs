use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::domain::product::Product;
use crate::errors::DomainError;

/// Details captured by the manual order form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub product_name: String,
    pub quantity: u32,
    pub customer_name: String,
    pub customer_phone: String,
    pub notes: Option<String>,
}

impl OrderDetails {
    /// Customer name and phone are required; blank notes are dropped.
    pub fn new(
        product_name: Option<&str>,
        quantity: Option<u32>,
        customer_name: &str,
        customer_phone: &str,
        notes: Option<&str>,
    ) -> Result<Self, DomainError> {
        let customer_name = customer_name.trim();
        let customer_phone = customer_phone.trim();
        if customer_name.is_empty() || customer_phone.is_empty() {
            return Err(DomainError::MissingCustomerDetails);
        }

        Ok(Self {
            product_name: product_name
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or("Product")
                .to_owned(),
            quantity: quantity.unwrap_or(1),
            customer_name: customer_name.to_owned(),
            customer_phone: customer_phone.to_owned(),
            notes: notes.map(str::trim).filter(|notes| !notes.is_empty()).map(str::to_owned),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageComposer {
    business_name: String,
    currency_label: String,
}

impl MessageComposer {
    pub fn new(business_name: impl Into<String>, currency_label: impl Into<String>) -> Self {
        Self { business_name: business_name.into(), currency_label: currency_label.into() }
    }

    /// "Ksh 199.00"
    pub fn money(&self, amount: Decimal) -> String {
        format!("{} {:.2}", self.currency_label, amount.round_dp(2))
    }

    pub fn cart_order(&self, cart: &Cart) -> String {
        let lines = cart
            .snapshot()
            .iter()
            .map(|line| {
                format!("{}x {} - {}", line.quantity, line.name, self.money(line.line_total()))
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Hello {}! I'd like to place an order:\n\n{lines}\n\nTotal: {}\n\nPlease confirm availability and delivery details.\n\nThank you!",
            self.business_name,
            self.money(cart.total()),
        )
    }

    pub fn product_inquiry(&self, product: &Product) -> String {
        format!(
            "Hello {}! I'm interested in:\n\n🛍️ Product: {}\n💰 Price: {}\n📦 Available Stock: {} units\n📂 Category: {}\n\nPlease provide more information about availability and delivery options.\n\nThank you!",
            self.business_name,
            product.name,
            self.money(product.price),
            product.stock,
            product.category.title(),
        )
    }

    pub fn order_form(&self, details: &OrderDetails) -> String {
        let notes = details
            .notes
            .as_deref()
            .map(|notes| format!("📝 Notes: {notes}\n"))
            .unwrap_or_default();

        format!(
            "🛒 *NEW ORDER*\n\n📱 Customer: {}\n☎️ Phone: {}\n🛍️ Product: {}\n📦 Quantity: {}\n{notes}\nThank you for choosing us!",
            details.customer_name, details.customer_phone, details.product_name, details.quantity,
        )
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{MessageComposer, OrderDetails};
    use crate::cart::Cart;
    use crate::catalog::InMemoryCatalog;
    use crate::domain::product::ProductId;
    use crate::errors::DomainError;

    fn composer() -> MessageComposer {
        MessageComposer::new("AGS Limited Company", "Ksh")
    }

    #[test]
    fn money_uses_two_decimal_places() {
        assert_eq!(composer().money(Decimal::from(199)), "Ksh 199.00");
        assert_eq!(composer().money(Decimal::new(12_346, 3)), "Ksh 12.35");
    }

    #[test]
    fn cart_order_lists_lines_and_total() {
        let catalog = InMemoryCatalog::seeded();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId(1)).expect("apples");
        cart.add(&catalog, ProductId(1)).expect("apples");
        cart.add(&catalog, ProductId(3)).expect("bananas");

        let message = composer().cart_order(&cart);

        assert!(message.starts_with("Hello AGS Limited Company! I'd like to place an order:"));
        assert!(message.contains("2x Red Apples - Ksh 398.00\n1x Bananas - Ksh 79.00"));
        assert!(message.contains("Total: Ksh 477.00"));
        assert!(message.ends_with("Thank you!"));
    }

    #[test]
    fn product_inquiry_mentions_stock_and_capitalised_category() {
        let catalog = InMemoryCatalog::seeded();
        let basil = crate::catalog::ProductCatalog::find(&catalog, ProductId(61)).expect("basil");

        let message = composer().product_inquiry(basil);

        assert!(message.contains("Product: Basil"));
        assert!(message.contains("Price: Ksh 299.00"));
        assert!(message.contains("Available Stock: 45 units"));
        assert!(message.contains("Category: Herbs"));
    }

    #[test]
    fn order_details_require_customer_name_and_phone() {
        assert_eq!(
            OrderDetails::new(None, None, "  ", "0700000000", None),
            Err(DomainError::MissingCustomerDetails)
        );
        assert_eq!(
            OrderDetails::new(None, None, "Wanjiru", "", None),
            Err(DomainError::MissingCustomerDetails)
        );
    }

    #[test]
    fn order_form_defaults_and_optional_notes() {
        let details =
            OrderDetails::new(None, None, "Wanjiru", "0700 000 000", Some("  ")).expect("details");
        assert_eq!(details.product_name, "Product");
        assert_eq!(details.quantity, 1);
        assert_eq!(details.notes, None);

        let message = composer().order_form(&details);
        assert!(message.contains("Customer: Wanjiru"));
        assert!(!message.contains("Notes:"));

        let with_notes =
            OrderDetails::new(Some("Mangoes"), Some(6), "Wanjiru", "0700", Some("deliver Friday"))
                .expect("details");
        let message = composer().order_form(&with_notes);
        assert!(message.contains("Product: Mangoes\n📦 Quantity: 6\n📝 Notes: deliver Friday\n"));
    }
}
