//! Catalog store.
//!
//! The catalog is an immutable value: seeded once at startup, then injected
//! into whichever component needs it. There is no process-wide mutable
//! catalog state.

use crate::catalog::{Dimensions, OptionCategory, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// An immutable product catalog with lookup by identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking the catalog invariants: unique identifiers,
    /// non-empty image lists, positive weight and dimensions.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        for (i, product) in products.iter().enumerate() {
            product.check()?;
            if products[..i].iter().any(|p| p.id == product.id) {
                return Err(CommerceError::Validation(format!(
                    "duplicate product identifier: {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// Build a catalog from a JSON array of product records.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Find a product by identifier.
    ///
    /// An unknown identifier is a hard failure; there is no fallback
    /// product.
    pub fn find_by_id(&self, id: &str) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .find(|p| p.id.as_str() == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products carrying a category tag.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.categories.iter().any(|c| c == category))
            .collect()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The static store catalog.
    pub fn seed() -> Self {
        Self {
            products: vec![
                seed_product(
                    "luminaria-acdc",
                    "Luminária ACDC",
                    14990,
                    "Luminária como nome da banda ACDC com textura realista e iluminação LED",
                    &["acdc-produto1.jpg", "acdc-produto2.jpg", "acdc-produto3.jpg"],
                    &["luminaria", "musica"],
                    0.5,
                    Dimensions::new(10.0, 30.0, 20.0),
                    Vec::new(),
                ),
                seed_product(
                    "luminaria-dino",
                    "Luminária Dino",
                    17990,
                    "Luminária personalizada com tema especial de um dinossauro",
                    &["dino.jpg", "dino-2.jpg", "dino-3.jpg"],
                    &["luminaria", "infantil"],
                    0.7,
                    Dimensions::new(15.0, 20.0, 25.0),
                    Vec::new(),
                ),
                seed_product(
                    "chaveiros-emotes",
                    "Chaveiros de emotes",
                    1990,
                    "Chaveiro de emotes para te acompanhar no dia a dia",
                    &["emoticom.jpg", "emoticom-2.jpg", "emoticom-3.jpg"],
                    &["acessorios", "chaveiros"],
                    0.05,
                    Dimensions::new(1.0, 5.0, 5.0),
                    vec![OptionCategory::new(
                        "modelos",
                        &["Feliz", "Triste", "Apaixonado", "Surpreso"],
                    )],
                ),
                seed_product(
                    "porta-caneta",
                    "Porta Caneta Personalizado",
                    3990,
                    "Porta caneta personalizado com design exclusivo para seu escritório",
                    &["porta-caneta.jpg", "porta-caneta-2.jpg"],
                    &["escritorio", "decoracao"],
                    0.3,
                    Dimensions::new(8.0, 8.0, 10.0),
                    Vec::new(),
                ),
                seed_product(
                    "luminaria-lua",
                    "Luminária Lua 3D",
                    12990,
                    "Luminária em formato de lua com superfície texturizada e iluminação LED",
                    &["lua.jpg", "lua-2.jpg", "lua-3.jpg"],
                    &["luminaria", "decoracao"],
                    0.6,
                    Dimensions::new(15.0, 15.0, 15.0),
                    Vec::new(),
                ),
            ],
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn seed_product(
    id: &str,
    name: &str,
    price_cents: i64,
    description: &str,
    images: &[&str],
    categories: &[&str],
    weight_kg: f64,
    dimensions: Dimensions,
    options: Vec<OptionCategory>,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Money::new(price_cents, Currency::BRL),
        description: description.to_string(),
        images: images.iter().map(|i| (*i).to_string()).collect(),
        categories: categories.iter().map(|c| (*c).to_string()).collect(),
        weight_kg,
        dimensions,
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_lookup() {
        let catalog = Catalog::seed();
        let product = catalog.find_by_id("luminaria-acdc").unwrap();
        assert_eq!(product.name, "Luminária ACDC");
        assert_eq!(product.price, Money::new(14990, Currency::BRL));
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let catalog = Catalog::seed();
        let err = catalog.find_by_id("nonexistent-id").unwrap_err();
        assert!(matches!(err, CommerceError::ProductNotFound(_)));
    }

    #[test]
    fn test_seed_satisfies_invariants() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.len(), 5);
        assert!(Catalog::new(catalog.products().to_vec()).is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let catalog = Catalog::seed();
        let mut products = catalog.products().to_vec();
        products.push(products[0].clone());
        assert!(matches!(
            Catalog::new(products),
            Err(CommerceError::Validation(_))
        ));
    }

    #[test]
    fn test_by_category() {
        let catalog = Catalog::seed();
        let luminarias = catalog.by_category("luminaria");
        assert_eq!(luminarias.len(), 3);
        assert!(catalog.by_category("eletronicos").is_empty());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {
                "id": "luminaria-acdc",
                "name": "Luminária ACDC",
                "price": { "amount_cents": 14990, "currency": "BRL" },
                "description": "Luminária com iluminação LED",
                "images": ["acdc-produto1.jpg"],
                "categories": ["luminaria"],
                "weight_kg": 0.5,
                "dimensions": { "length_cm": 10.0, "width_cm": 30.0, "height_cm": 20.0 },
                "options": []
            }
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.find_by_id("luminaria-acdc").unwrap().weight_kg,
            0.5
        );
    }

    #[test]
    fn test_from_json_rejects_invalid_records() {
        let json = r#"[
            {
                "id": "sem-imagem",
                "name": "Sem imagem",
                "price": { "amount_cents": 100, "currency": "BRL" },
                "description": "",
                "images": [],
                "categories": [],
                "weight_kg": 0.5,
                "dimensions": { "length_cm": 10.0, "width_cm": 10.0, "height_cm": 10.0 },
                "options": []
            }
        ]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CommerceError::Validation(_))
        ));
    }
}
