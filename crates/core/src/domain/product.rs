use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Fruits,
    Vegetables,
    Herbs,
    Exotic,
}

impl Category {
    pub const ALL: [Category; 4] =
        [Category::Fruits, Category::Vegetables, Category::Herbs, Category::Exotic];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fruits => "fruits",
            Self::Vegetables => "vegetables",
            Self::Herbs => "herbs",
            Self::Exotic => "exotic",
        }
    }

    /// Capitalised label used in customer-facing messages ("Fruits").
    pub fn title(self) -> &'static str {
        match self {
            Self::Fruits => "Fruits",
            Self::Vegetables => "Vegetables",
            Self::Herbs => "Herbs",
            Self::Exotic => "Exotic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fruits" => Ok(Self::Fruits),
            "vegetables" => Ok(Self::Vegetables),
            "herbs" => Ok(Self::Herbs),
            "exotic" => Ok(Self::Exotic),
            other => Err(DomainError::InvalidFilter(format!(
                "unknown category `{other}` (expected fruits|vegetables|herbs|exotic)"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    pub image: String,
    pub stock: u32,
}

impl Product {
    /// Copies the fields a cart line needs so later catalog edits do not
    /// leak into lines that were already added.
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            product_id: self.id,
            name: self.name.clone(),
            unit_price: self.price,
            image: self.image.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub image: String,
}
