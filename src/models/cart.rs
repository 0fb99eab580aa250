use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::{Failure, FieldErrors};

/// A shopping cart document. Document identity is the owning user's name.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingCart {
    pub user_name: String,
    #[serde(default)]
    pub items: Vec<ShoppingCartItem>,
}

/// A single line in a shopping cart
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingCartItem {
    pub product_id: Uuid,
    pub product_name: String,
    pub color: String,
    pub quantity: u32,
    pub price: f64,
}

impl ShoppingCart {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            items: Vec::new(),
        }
    }

    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }

    /// Check the declarative cart rules, collecting every violation.
    ///
    /// Keys in the resulting error map use the wire-facing field names
    /// clients already match on (`UserName`, `Items[i].Quantity`, ...).
    pub fn validate(&self) -> Result<(), Failure> {
        let mut errors = FieldErrors::new();

        if self.user_name.trim().is_empty() {
            errors
                .entry("UserName".to_string())
                .or_default()
                .push("UserName is required".to_string());
        }

        for (index, item) in self.items.iter().enumerate() {
            if item.quantity == 0 {
                errors
                    .entry(format!("Items[{}].Quantity", index))
                    .or_default()
                    .push("Quantity must be greater than 0".to_string());
            }
            if item.price <= 0.0 {
                errors
                    .entry(format!("Items[{}].Price", index))
                    .or_default()
                    .push("Price must be greater than 0".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Failure::validation(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: u32, price: f64) -> ShoppingCartItem {
        ShoppingCartItem {
            product_id: Uuid::nil(),
            product_name: "IPhone X".to_string(),
            color: "Black".to_string(),
            quantity,
            price,
        }
    }

    #[test]
    fn test_valid_cart_passes() {
        let mut cart = ShoppingCart::new("alice");
        cart.items.push(item(2, 950.0));
        assert!(cart.validate().is_ok());
    }

    #[test]
    fn test_empty_user_name_is_rejected() {
        let cart = ShoppingCart::new("  ");
        let failure = cart.validate().unwrap_err();

        match failure {
            Failure::Validation { errors, .. } => {
                assert_eq!(errors["UserName"], vec!["UserName is required"]);
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_item_rules_use_indexed_field_names() {
        let mut cart = ShoppingCart::new("alice");
        cart.items.push(item(1, 950.0));
        cart.items.push(item(0, -1.0));

        let failure = cart.validate().unwrap_err();
        match failure {
            Failure::Validation { errors, .. } => {
                assert!(errors.contains_key("Items[1].Quantity"));
                assert!(errors.contains_key("Items[1].Price"));
                assert!(!errors.contains_key("Items[0].Quantity"));
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_total_price_sums_lines() {
        let mut cart = ShoppingCart::new("alice");
        cart.items.push(item(2, 950.0));
        cart.items.push(item(1, 100.0));
        assert_eq!(cart.total_price(), 2000.0);
    }

    #[test]
    fn test_cart_wire_casing_is_camel_case() {
        let mut cart = ShoppingCart::new("alice");
        cart.items.push(item(1, 10.0));

        let json = serde_json::to_string(&cart).unwrap();
        assert!(json.contains("\"userName\":\"alice\""));
        assert!(json.contains("\"productName\""));
        assert!(!json.contains("user_name"));
    }
}
