use serde::{Deserialize, Serialize};

/// Stable catalog key of a base product. Decoration never changes it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductCode {
    Tshirt,
    Mug,
    Skin,
    Gadget,
}

impl ProductCode {
    /// Every code in the catalog, in menu order.
    pub const ALL: [ProductCode; 4] = [
        ProductCode::Tshirt,
        ProductCode::Mug,
        ProductCode::Skin,
        ProductCode::Gadget,
    ];

    /// Case-insensitive parse against the fixed catalog set.
    pub fn parse(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "TSHIRT" => Some(ProductCode::Tshirt),
            "MUG" => Some(ProductCode::Mug),
            "SKIN" => Some(ProductCode::Skin),
            "GADGET" => Some(ProductCode::Gadget),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCode::Tshirt => "TSHIRT",
            ProductCode::Mug => "MUG",
            ProductCode::Skin => "SKIN",
            ProductCode::Gadget => "GADGET",
        }
    }

    /// Catalog display name of the undecorated product.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCode::Tshirt => "T-Shirt",
            ProductCode::Mug => "Tazza",
            ProductCode::Skin => "Skin per Smartphone",
            ProductCode::Gadget => "Gadget Digitale",
        }
    }

    /// Catalog list price of the undecorated product.
    pub fn list_price(&self) -> f64 {
        match self {
            ProductCode::Tshirt => 20.00,
            ProductCode::Mug => 8.00,
            ProductCode::Skin => 15.00,
            ProductCode::Gadget => 12.00,
        }
    }
}

impl core::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A price/description-modifying decoration applied to one order line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Addon {
    FrontPrint,
    BackPrint,
    GiftWrap,
    WarrantyExtension,
    Engraving,
}

impl Addon {
    /// Every available add-on, in menu order.
    pub const ALL: [Addon; 5] = [
        Addon::FrontPrint,
        Addon::BackPrint,
        Addon::GiftWrap,
        Addon::WarrantyExtension,
        Addon::Engraving,
    ];

    /// Label appended to the product description.
    pub fn label(&self) -> &'static str {
        match self {
            Addon::FrontPrint => "Stampa Fronte",
            Addon::BackPrint => "Stampa Retro",
            Addon::GiftWrap => "Confezione Regalo",
            Addon::WarrantyExtension => "Garanzia Estesa",
            Addon::Engraving => "Incisione Personalizzata",
        }
    }

    /// Amount added to the product's base price.
    pub fn surcharge(&self) -> f64 {
        match self {
            Addon::FrontPrint => 5.00,
            Addon::BackPrint => 5.00,
            Addon::GiftWrap => 3.00,
            Addon::WarrantyExtension => 10.00,
            Addon::Engraving => 8.00,
        }
    }
}

/// A catalog product, possibly wrapped by add-ons.
///
/// Each applied add-on produces a new node owning the previous one, so a
/// decorated product is always a simple chain down to one base leaf.
/// Description text and surcharges compose in application order; the catalog
/// code stays that of the innermost leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Product {
    Base(ProductCode),
    Decorated { addon: Addon, inner: Box<Product> },
}

impl Product {
    /// Catalog code of the innermost base product.
    pub fn code(&self) -> ProductCode {
        match self {
            Product::Base(code) => *code,
            Product::Decorated { inner, .. } => inner.code(),
        }
    }

    /// Human description; grows by `" + <label>"` per decoration layer.
    pub fn description(&self) -> String {
        match self {
            Product::Base(code) => code.display_name().to_string(),
            Product::Decorated { addon, inner } => {
                format!("{} + {}", inner.description(), addon.label())
            }
        }
    }

    /// Base price before any pricing policy; grows by the surcharge of each
    /// decoration layer.
    pub fn base_price(&self) -> f64 {
        match self {
            Product::Base(code) => code.list_price(),
            Product::Decorated { addon, inner } => inner.base_price() + addon.surcharge(),
        }
    }

    /// Wrap this product with one more add-on.
    pub fn decorate(self, addon: Addon) -> Product {
        Product::Decorated {
            addon,
            inner: Box::new(self),
        }
    }
}
