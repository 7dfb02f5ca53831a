use crate::domain::food_guess::entities::GuessRequest;

/// Literal description of the JSON object the model must return.
pub const RESPONSE_SHAPE: &str = r#"{"items":[{"name":string,"grams":number,"nutrients":{"calories":number,"protein_g":number,"carbs_g":number,"fat_g":number}}]}"#;

const INSTRUCTIONS: [&str; 6] = [
    "You are a nutrition assistant.",
    "Identify the most likely foods in the photo.",
    "Return 1-4 items.",
    "Use realistic portion sizes in grams.",
    "Estimate calories, protein, carbs and fat for that portion.",
    "If uncertain, choose the simplest, most conservative interpretation.",
];

/// Builds the instruction text sent alongside the photo.
///
/// The output only depends on `request.meal_hint`; the same request always
/// yields the same prompt.
pub fn build_prompt(request: &GuessRequest) -> String {
    let mut prompt = INSTRUCTIONS.join("\n");

    prompt.push_str("\nReturn ONLY strict JSON with exactly this shape:\n");
    prompt.push_str(RESPONSE_SHAPE);

    if let Some(hint) = &request.meal_hint {
        prompt.push_str("\nMeal hint: ");
        prompt.push_str(hint);
    }

    prompt
}
