//! # Product records and the admin creation form
//!
//! [`Product`] mirrors the catalog item returned by the backend's
//! `GET /api/products`. The backend is not strict about its shapes, so the
//! deserializer is lenient:
//!
//! - the identifier arrives as `_id` (document store) or `id`, string or number;
//! - `price` is a number or a currency label (see [`Price`]);
//! - everything except the name is optional and defaults to empty, whether the
//!   key is missing or explicitly `null`.
//!
//! [`ProductForm`] holds the raw text of the admin creation form. It validates
//! in a fixed order and turns into the [`NewProduct`] JSON payload once the
//! image has been uploaded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::price::Price;

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id", deserialize_with = "de_id")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Price,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count_in_stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Number of colour variants advertised on the card.
    #[serde(default, deserialize_with = "null_as_default")]
    pub colors: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Case-insensitive substring match on the name. An empty query matches.
    pub fn matches_query(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Case-insensitive category equality.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    pub fn is_available(&self) -> bool {
        self.count_in_stock > 0
    }
}

/// `null` reads as the field's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

/// Categories offered by the creation form, as `(value, label)`.
pub const PRODUCT_CATEGORIES: &[(&str, &str)] = &[
    ("vêtements", "Vêtements"),
    ("chaussures", "Chaussures"),
    ("accessoires", "Accessoires"),
    ("électronique", "Électronique"),
    ("maison", "Maison"),
];

/// Raw state of the product creation form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub category: String,
    pub description: String,
    pub count_in_stock: String,
    pub size: String,
    pub color: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            category: String::new(),
            description: String::new(),
            count_in_stock: "0".to_string(),
            size: String::new(),
            color: String::new(),
        }
    }
}

impl ProductForm {
    /// Check the form, returning the first message to show the user.
    pub fn validate(&self, has_image: bool) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Le nom du produit est requis");
        }
        if !self.parsed_price().is_some_and(|p| p > 0.0) {
            return Err("Le prix doit être supérieur à 0");
        }
        if self.category.is_empty() {
            return Err("La catégorie est requise");
        }
        if self.description.trim().is_empty() {
            return Err("La description est requise");
        }
        if !has_image {
            return Err("L'image du produit est requise");
        }
        if self.parsed_stock().is_none() {
            return Err("La quantité en stock ne peut pas être négative");
        }
        Ok(())
    }

    /// Build the creation payload. Call after [`validate`](Self::validate).
    pub fn into_new_product(self, image_url: String) -> NewProduct {
        let price = self.parsed_price().unwrap_or_default();
        let count_in_stock = self.parsed_stock().unwrap_or_default();
        NewProduct {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            category: self.category,
            count_in_stock,
            size: non_empty(self.size),
            color: non_empty(self.color),
            image: image_url,
        }
    }

    fn parsed_price(&self) -> Option<f64> {
        self.price
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
    }

    fn parsed_stock(&self) -> Option<u32> {
        leading_int(&self.count_in_stock).and_then(|n| u32::try_from(n).ok())
    }
}

/// Integer prefix of `text`: optional sign then digits, the rest ignored.
/// `"3.5"` reads as 3, `"abc"` as nothing.
fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse::<i64>().ok().map(|n| sign * n)
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// JSON body of `POST /api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub count_in_stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub image: String,
}

/// Whether an upload's content type is an image.
pub fn is_image_type(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProductForm {
        ProductForm {
            name: "Chemise lin".into(),
            price: "49.90".into(),
            category: "vêtements".into(),
            description: "Chemise en lin lavé".into(),
            count_in_stock: "12".into(),
            size: "M".into(),
            color: "".into(),
        }
    }

    #[test]
    fn test_product_from_document_store_shape() {
        let json = r#"{
            "_id": "65f1c0ffee",
            "name": "Basic Slim Fit T-Shirt",
            "description": "Cotton",
            "price": 9.99,
            "category": "t-shirts",
            "countInStock": 4,
            "image": "http://localhost:8000/uploads/a.jpg",
            "createdAt": "2024-03-13T10:00:00Z",
            "updatedAt": "2024-03-13T10:00:00Z"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "65f1c0ffee");
        assert_eq!(product.count_in_stock, 4);
        assert_eq!(product.price.amount(), Some(9.99));
        assert!(product.created_at.is_some());
        assert!(product.size.is_none());
    }

    #[test]
    fn test_product_with_numeric_id_and_label_price() {
        let json = r#"{"id": 2, "name": "Full Sleeve Zipper", "price": "$99", "category": "Crewneck T-Shirt"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "2");
        assert_eq!(product.price, Price::Label("$99".into()));
        assert_eq!(product.description, "");
        assert!(!product.is_available());
    }

    #[test]
    fn test_product_round_trips_through_server_boundary() {
        let json = r#"{"_id": "a1", "name": "Jean", "price": "$49", "countInStock": 2}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        let again: Product =
            serde_json::from_str(&serde_json::to_string(&product).unwrap()).unwrap();
        assert_eq!(product, again);
    }

    #[test]
    fn test_matches_query_is_case_insensitive() {
        let product: Product =
            serde_json::from_str(r#"{"id": "1", "name": "Embroidered Seersucker Shirt"}"#).unwrap();
        assert!(product.matches_query("seersucker"));
        assert!(product.matches_query("SHIRT"));
        assert!(product.matches_query(""));
        assert!(product.matches_query(" shirt"));
        assert!(!product.matches_query("shirt "));
        assert!(!product.matches_query("jacket"));
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        assert_eq!(filled_form().validate(true), Ok(()));
    }

    #[test]
    fn test_validate_requires_image() {
        assert_eq!(
            filled_form().validate(false),
            Err("L'image du produit est requise")
        );
    }

    #[test]
    fn test_validate_order() {
        let empty = ProductForm::default();
        assert_eq!(empty.validate(false), Err("Le nom du produit est requis"));

        let mut form = filled_form();
        form.price = "0".into();
        assert_eq!(form.validate(true), Err("Le prix doit être supérieur à 0"));

        form.price = "abc".into();
        assert_eq!(form.validate(true), Err("Le prix doit être supérieur à 0"));

        let mut form = filled_form();
        form.category.clear();
        assert_eq!(form.validate(true), Err("La catégorie est requise"));

        let mut form = filled_form();
        form.description = "   ".into();
        assert_eq!(form.validate(true), Err("La description est requise"));

        let mut form = filled_form();
        form.count_in_stock = "-3".into();
        assert_eq!(
            form.validate(true),
            Err("La quantité en stock ne peut pas être négative")
        );
    }

    #[test]
    fn test_into_new_product_omits_empty_optionals() {
        let payload = filled_form().into_new_product("http://cdn/img.jpg".into());
        assert_eq!(payload.price, 49.9);
        assert_eq!(payload.count_in_stock, 12);
        assert_eq!(payload.size.as_deref(), Some("M"));
        assert!(payload.color.is_none());

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["countInStock"], 12);
        assert_eq!(json["image"], "http://cdn/img.jpg");
        assert!(json.get("color").is_none());
    }

    #[test]
    fn test_image_content_types() {
        assert!(is_image_type("image/jpeg"));
        assert!(is_image_type("image/png"));
        assert!(!is_image_type("text/plain"));
        assert!(!is_image_type(""));
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let json = r#"[
            {"_id": "1", "name": "Ok"},
            {"_id": "2", "name": "Shirt", "description": null, "category": null,
             "price": null, "countInStock": null, "colors": null, "image": null}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products.len(), 2);
        let shirt = &products[1];
        assert_eq!(shirt.description, "");
        assert_eq!(shirt.category, "");
        assert_eq!(shirt.price, Price::Amount(0.0));
        assert_eq!(shirt.count_in_stock, 0);
        assert_eq!(shirt.colors, 0);
        assert!(shirt.image.is_none());
    }

    #[test]
    fn test_stock_reads_integer_prefix() {
        let mut form = filled_form();
        form.count_in_stock = "3.5".into();
        assert_eq!(form.validate(true), Ok(()));
        assert_eq!(form.into_new_product("u".into()).count_in_stock, 3);

        let mut form = filled_form();
        form.count_in_stock = "abc".into();
        assert_eq!(
            form.validate(true),
            Err("La quantité en stock ne peut pas être négative")
        );
    }
}
