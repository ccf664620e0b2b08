//! Storefront catalog and cart records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Womens,
    Mens,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: String,
    pub price: f64,
    pub category: Category,
    pub subcategory: String,
    pub color: String,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo: Option<String>,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: u32,
    pub size: String,
    pub quantity: u32,
    /// Milliseconds since the Unix epoch.
    pub added_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_without_optional_fields() {
        let raw = json!({
            "id": 3,
            "name": "Stessy",
            "type": "Tote",
            "price": 89.99,
            "category": "womens",
            "subcategory": "handbags",
            "color": "Black",
            "colors": ["Black", "Bone"],
            "sizes": ["One Size"],
            "image": "/images/bags/3.jpg",
            "description": "Structured tote.",
            "features": ["Magnetic closure"]
        });
        let p: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(p.category, Category::Womens);
        assert!(p.url.is_none() && p.badge.is_none() && p.promo.is_none());

        let back = serde_json::to_value(&p).unwrap();
        assert!(back.get("url").is_none());
    }

    #[test]
    fn cart_item_field_names() {
        let item = CartItem {
            product_id: 3,
            size: "M".into(),
            quantity: 2,
            added_at: 1_700_000_000_000,
        };
        let v = serde_json::to_value(&item).unwrap();
        assert_eq!(v["productId"], 3);
        assert_eq!(v["addedAt"], 1_700_000_000_000i64);
    }
}
