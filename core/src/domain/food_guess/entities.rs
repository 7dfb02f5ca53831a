use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Upper bound on the number of items in one guess.
pub const MAX_GUESS_ITEMS: usize = 8;

/// A photo submission as accepted at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRequest {
    /// Base64 image payload, optionally prefixed with a `data:image/...;base64,` header.
    pub image_base64: String,
    pub meal_hint: Option<String>,
}

impl GuessRequest {
    pub fn new(image_base64: String, meal_hint: Option<String>) -> Self {
        Self {
            image_base64,
            meal_hint,
        }
    }
}

// Numbers stay `serde_json::Number` so the model's literals (`250` vs `250.0`)
// are returned exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct NutrientSet {
    #[validate(custom(function = "validate_calories"))]
    #[schema(value_type = f64)]
    pub calories: Number,
    #[validate(custom(function = "validate_macro_grams"))]
    #[schema(value_type = f64)]
    pub protein_g: Number,
    #[validate(custom(function = "validate_macro_grams"))]
    #[schema(value_type = f64)]
    pub carbs_g: Number,
    #[validate(custom(function = "validate_macro_grams"))]
    #[schema(value_type = f64)]
    pub fat_g: Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct FoodItem {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(custom(function = "validate_portion_grams"))]
    #[schema(value_type = f64)]
    pub grams: Number,
    #[validate(nested)]
    pub nutrients: NutrientSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_item_count"))]
pub struct GuessResponse {
    #[validate(nested)]
    pub items: Vec<FoodItem>,
}

// `nested` owns the `items` entry, so the count is reported under `__all__`.
fn validate_item_count(response: &GuessResponse) -> Result<(), ValidationError> {
    if response.items.len() > MAX_GUESS_ITEMS {
        let mut error = ValidationError::new("too_many_items");
        error.add_param("max".into(), &MAX_GUESS_ITEMS);
        error.add_param("value".into(), &response.items.len());
        return Err(error);
    }

    Ok(())
}

/// Portion size: `(0, 2000]` grams.
fn validate_portion_grams(value: &Number) -> Result<(), ValidationError> {
    check_range(value, 0.0, 2000.0, true)
}

/// Energy: `[0, 5000]` kcal.
fn validate_calories(value: &Number) -> Result<(), ValidationError> {
    check_range(value, 0.0, 5000.0, false)
}

/// Protein, carbs and fat: `[0, 500]` grams each.
fn validate_macro_grams(value: &Number) -> Result<(), ValidationError> {
    check_range(value, 0.0, 500.0, false)
}

fn check_range(
    value: &Number,
    min: f64,
    max: f64,
    exclusive_min: bool,
) -> Result<(), ValidationError> {
    let in_range = value.as_f64().is_some_and(|v| {
        let above_min = if exclusive_min { v > min } else { v >= min };
        above_min && v <= max
    });

    if in_range {
        return Ok(());
    }

    let mut error = ValidationError::new("range");
    error.add_param("value".into(), value);
    if exclusive_min {
        error.add_param("exclusive_min".into(), &min);
    } else {
        error.add_param("min".into(), &min);
    }
    error.add_param("max".into(), &max);
    Err(error)
}
