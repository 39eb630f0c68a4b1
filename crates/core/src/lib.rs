pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod domain;
pub mod errors;
pub mod routing;

pub use cart::{Cart, LineItem, QuantityChange};
pub use catalog::{CatalogLoadError, InMemoryCatalog, NewProduct, ProductCatalog};
pub use checkout::link::DeepLink;
pub use checkout::message::{MessageComposer, OrderDetails};
pub use checkout::{Dispatch, Storefront};
pub use domain::channel::{ChannelStatus, ContactChannel};
pub use domain::product::{Category, Product, ProductId, ProductSnapshot};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use routing::{AgentRouter, IndexedChannel};
