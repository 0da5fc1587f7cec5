//! Schema for the static fallback product file.
//!
//! Local records carry a numeric `id` instead of the API's string `_id`.
//! Everything else has the same shape as [`Product`].

use serde::{Deserialize, Serialize};

use kelontong_core::{DomainError, DomainResult};

use crate::product::{Dimensions, Product, ProductCreateInput, ProductId};

/// One entry of the fallback file.
///
/// Unknown fields are ignored; missing or mistyped fields fail parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalProductRecord {
    pub id: u64,
    #[serde(rename = "CategoryId")]
    pub category_id: u8,
    #[serde(rename = "categoryName")]
    pub category_name: String,
    pub sku: String,
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub dimensions: Dimensions,
    pub image: String,
    pub price: f64,
}

impl LocalProductRecord {
    /// Map into a [`Product`], turning the numeric id into its string form.
    pub fn into_product(self) -> Product {
        let id = ProductId::new(self.id.to_string());
        Product::from_input(
            id,
            ProductCreateInput {
                category_id: self.category_id,
                category_name: self.category_name,
                sku: self.sku,
                name: self.name,
                description: self.description,
                dimensions: self.dimensions,
                image: self.image,
                price: self.price,
            },
        )
    }
}

/// Parse the whole fallback file (a JSON array of records) into products,
/// preserving file order.
pub fn parse_local_records(bytes: &[u8]) -> DomainResult<Vec<Product>> {
    let records: Vec<LocalProductRecord> = serde_json::from_slice(bytes)
        .map_err(|e| DomainError::parse(format!("local product file: {e}")))?;

    Ok(records
        .into_iter()
        .map(LocalProductRecord::into_product)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kelontong_core::Entity;

    const TWO_RECORDS: &str = r#"[
        {
            "id": 5,
            "CategoryId": 2,
            "categoryName": "Household",
            "sku": "HH-005",
            "name": "Sunlight",
            "description": "Dish soap",
            "weight": 755,
            "width": 10,
            "length": 5,
            "height": 20,
            "image": "/images/sunlight.png",
            "price": 14500,
            "featured": true
        },
        {
            "id": 12,
            "CategoryId": 3,
            "categoryName": "Snacks",
            "sku": "SNK-012",
            "name": "Taro",
            "description": "Net snack",
            "weight": 65.5,
            "width": 14,
            "length": 4,
            "height": 21,
            "image": "/images/taro.png",
            "price": 8500
        }
    ]"#;

    #[test]
    fn numeric_ids_become_string_identifiers() {
        let products = parse_local_records(TWO_RECORDS.as_bytes()).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id().as_str(), "5");
        assert_eq!(products[0].name(), "Sunlight");
        assert_eq!(products[0].dimensions().weight, 755.0);
        assert_eq!(products[1].id().as_str(), "12");
        assert_eq!(products[1].category_name(), "Snacks");
    }

    #[test]
    fn string_id_is_rejected() {
        let err = parse_local_records(
            br#"[{"id":"5","CategoryId":1,"categoryName":"Beverages","sku":"a","name":"b",
                 "description":"c","weight":1,"width":1,"length":1,"height":1,"image":"","price":1}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn missing_field_is_rejected() {
        let err = parse_local_records(br#"[{"id":1,"name":"no sku"}]"#).unwrap_err();
        match err {
            DomainError::Parse(msg) => assert!(msg.starts_with("local product file:")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn non_array_document_is_rejected() {
        assert!(parse_local_records(br#"{"products":[]}"#).is_err());
        assert!(parse_local_records(b"not json").is_err());
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_local_records(b"[]").unwrap().is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the product id is the decimal form of the record id.
            #[test]
            fn id_mapping_is_decimal(id in any::<u64>(), name in "[A-Za-z][A-Za-z0-9 ]{0,30}") {
                let record = LocalProductRecord {
                    id,
                    category_id: 1,
                    category_name: "Beverages".to_string(),
                    sku: "SKU".to_string(),
                    name: name.clone(),
                    description: String::new(),
                    dimensions: Dimensions::default(),
                    image: String::new(),
                    price: 0.0,
                };

                let product = record.into_product();
                prop_assert_eq!(product.id().as_str(), id.to_string());
                prop_assert_eq!(product.name(), name.as_str());
            }
        }
    }
}
