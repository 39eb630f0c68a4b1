//! Checkout glue: turns cart contents or a product inquiry into a message,
//! asks a router for a destination and builds the deep link to open.

pub mod link;
pub mod message;

use serde::Serialize;
use tracing::info;

use crate::cart::{Cart, LineItem};
use crate::catalog::{InMemoryCatalog, ProductCatalog};
use crate::config::AppConfig;
use crate::domain::channel::ContactChannel;
use crate::domain::product::ProductId;
use crate::errors::DomainError;
use crate::routing::AgentRouter;

use self::link::DeepLink;
use self::message::{MessageComposer, OrderDetails};

/// Result of a routed send, ready for the host to open.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Dispatch {
    pub channel: ContactChannel,
    pub message: String,
    pub url: DeepLink,
}

impl Dispatch {
    pub fn notice(&self) -> String {
        format!("Order sent to: {} ({})", self.channel.label, self.channel.display)
    }
}

/// One browsing session: a cart plus independent checkout and inquiry
/// routers over the same roster.
#[derive(Clone, Debug)]
pub struct Storefront<C = InMemoryCatalog> {
    catalog: C,
    cart: Cart,
    checkout_router: AgentRouter,
    inquiry_router: AgentRouter,
    composer: MessageComposer,
    deep_link_base: String,
}

impl<C: ProductCatalog> Storefront<C> {
    pub fn new(
        catalog: C,
        roster: Vec<ContactChannel>,
        composer: MessageComposer,
        deep_link_base: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            catalog,
            cart: Cart::new(),
            checkout_router: AgentRouter::new(roster.clone())?,
            inquiry_router: AgentRouter::new(roster)?,
            composer,
            deep_link_base: deep_link_base.into(),
        })
    }

    pub fn from_config(config: &AppConfig, catalog: C) -> Result<Self, DomainError> {
        Self::new(
            catalog,
            config.routing.agents.clone(),
            MessageComposer::new(
                config.storefront.business_name.clone(),
                config.storefront.currency_label.clone(),
            ),
            config.storefront.deep_link_base.clone(),
        )
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut C {
        &mut self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn checkout_router(&self) -> &AgentRouter {
        &self.checkout_router
    }

    pub fn checkout_router_mut(&mut self) -> &mut AgentRouter {
        &mut self.checkout_router
    }

    pub fn inquiry_router(&self) -> &AgentRouter {
        &self.inquiry_router
    }

    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<&LineItem, DomainError> {
        self.cart.add(&self.catalog, product_id)
    }

    /// Sends the whole cart. The cart is left as is; clearing it is the
    /// caller's decision.
    pub fn checkout(&mut self, target: Option<i64>) -> Result<Dispatch, DomainError> {
        if self.cart.is_empty() {
            return Err(DomainError::EmptyCart);
        }

        let message = self.composer.cart_order(&self.cart);
        let channel = route(&mut self.checkout_router, target)?;
        let dispatch = dispatch(&self.deep_link_base, channel, message);
        info!(
            event_name = "storefront.checkout.dispatched",
            label = %dispatch.channel.label,
            lines = self.cart.len(),
            item_count = self.cart.item_count(),
            total = %self.cart.total(),
            "cart order routed"
        );
        Ok(dispatch)
    }

    pub fn inquire(
        &mut self,
        product_id: ProductId,
        target: Option<i64>,
    ) -> Result<Dispatch, DomainError> {
        let product =
            self.catalog.find(product_id).ok_or(DomainError::ProductNotFound(product_id))?;
        let message = self.composer.product_inquiry(product);
        let channel = route(&mut self.inquiry_router, target)?;
        let dispatch = dispatch(&self.deep_link_base, channel, message);
        info!(
            event_name = "storefront.inquiry.dispatched",
            label = %dispatch.channel.label,
            product_id = product_id.0,
            "product inquiry routed"
        );
        Ok(dispatch)
    }

    pub fn send_order(
        &mut self,
        details: &OrderDetails,
        target: Option<i64>,
    ) -> Result<Dispatch, DomainError> {
        let message = self.composer.order_form(details);
        let channel = route(&mut self.checkout_router, target)?;
        let dispatch = dispatch(&self.deep_link_base, channel, message);
        info!(
            event_name = "storefront.order.dispatched",
            label = %dispatch.channel.label,
            quantity = details.quantity,
            "order form routed"
        );
        Ok(dispatch)
    }
}

fn route(router: &mut AgentRouter, target: Option<i64>) -> Result<&ContactChannel, DomainError> {
    match target {
        Some(index) => router.select_specific(index),
        None => Ok(router.select_next()),
    }
}

fn dispatch(deep_link_base: &str, channel: &ContactChannel, message: String) -> Dispatch {
    Dispatch {
        url: DeepLink::whatsapp(deep_link_base, &channel.address, &message),
        channel: channel.clone(),
        message,
    }
}
