//! OpenFoodFacts client
//!
//! Maps external search results into kcal-normalized food candidates.
//! Internal nutrition values are always kcal; the source's explicit
//! per-100g kcal field is preferred and the kJ energy field is converted
//! here, at the boundary, when kcal is absent.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{FoodReference, Nutrition, Unit};

/// Kilojoules per kilocalorie
const KJ_PER_KCAL: f64 = 4.184;

const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Lookup error types
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response shape: {0}")]
    Response(#[from] serde_json::Error),
}

/// One external food candidate, nutrition per 100 g in kcal/grams
#[derive(Debug, Clone, PartialEq)]
pub struct FoodCandidate {
    /// Stable external identifier (product barcode)
    pub code: String,
    pub name: String,
    pub nutrition: Nutrition,
    /// Free-text package quantity, e.g. "500g"
    pub quantity_label: String,
}

/// Food search collaborator
///
/// Implementations report failure through `LookupError`; callers treat any
/// failure as zero results and must not let it disturb an in-progress meal
/// or recipe.
pub trait FoodLookup {
    fn search(&self, query: &str) -> Result<Vec<FoodCandidate>, LookupError>;
}

/// Turn an accepted candidate into a food reference
///
/// Returns the new reference to the caller; appending it to the canonical
/// reference list is the caller's job, done exactly once.
pub fn candidate_to_reference(candidate: &FoodCandidate) -> FoodReference {
    FoodReference::new(candidate.name.clone(), candidate.nutrition, Unit::Grams)
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<RawProduct>,
}

#[derive(Debug, Deserialize)]
struct ProductResponse {
    #[serde(default)]
    status: i64,
    product: Option<RawProduct>,
}

#[derive(Debug, Deserialize)]
struct RawProduct {
    #[serde(default)]
    code: String,
    #[serde(default)]
    product_name: String,
    #[serde(default)]
    nutriments: RawNutriments,
    #[serde(default)]
    quantity: String,
}

/// Absent macro fields read as zero
#[derive(Debug, Default, Deserialize)]
struct RawNutriments {
    #[serde(rename = "energy-kcal_100g")]
    energy_kcal_100g: Option<f64>,
    #[serde(rename = "energy_100g")]
    energy_100g: Option<f64>,
    #[serde(rename = "proteins_100g", default)]
    proteins_100g: f64,
    #[serde(rename = "carbohydrates_100g", default)]
    carbohydrates_100g: f64,
    #[serde(rename = "fat_100g", default)]
    fat_100g: f64,
}

impl RawNutriments {
    /// Energy in kcal: explicit kcal field when present, else kJ / 4.184
    fn calories(&self) -> f64 {
        match (self.energy_kcal_100g, self.energy_100g) {
            (Some(kcal), _) => kcal,
            (None, Some(kj)) => kj / KJ_PER_KCAL,
            (None, None) => 0.0,
        }
    }
}

impl RawProduct {
    fn into_candidate(self) -> Option<FoodCandidate> {
        if self.product_name.trim().is_empty() {
            return None;
        }
        let nutrition = Nutrition::new(
            self.nutriments.calories(),
            self.nutriments.proteins_100g,
            self.nutriments.carbohydrates_100g,
            self.nutriments.fat_100g,
        );
        Some(FoodCandidate {
            code: self.code,
            name: self.product_name,
            nutrition,
            quantity_label: if self.quantity.is_empty() {
                "100g".to_string()
            } else {
                self.quantity
            },
        })
    }
}

fn map_search_response(response: SearchResponse) -> Vec<FoodCandidate> {
    response
        .products
        .into_iter()
        .filter_map(RawProduct::into_candidate)
        .collect()
}

/// Blocking client for the public OpenFoodFacts API
pub struct OpenFoodFactsClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl OpenFoodFactsClient {
    pub fn new() -> Result<Self, LookupError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host (tests, mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, LookupError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetch one product by its barcode
    pub fn product(&self, code: &str) -> Result<Option<FoodCandidate>, LookupError> {
        let url = format!("{}/api/v0/product/{}.json", self.base_url, code);
        let response: ProductResponse = self.http.get(&url).send()?.json()?;
        if response.status != 1 {
            return Ok(None);
        }
        Ok(response.product.and_then(RawProduct::into_candidate))
    }
}

impl FoodLookup for OpenFoodFactsClient {
    fn search(&self, query: &str) -> Result<Vec<FoodCandidate>, LookupError> {
        let url = format!("{}/cgi/search.pl", self.base_url);
        let response: SearchResponse = self
            .http
            .get(&url)
            .query(&[
                ("search_terms", query),
                ("search_simple", "1"),
                ("action", "process"),
                ("json", "1"),
            ])
            .send()?
            .json()?;

        let candidates = map_search_response(response);
        tracing::debug!(query, results = candidates.len(), "food search completed");
        Ok(candidates)
    }
}
