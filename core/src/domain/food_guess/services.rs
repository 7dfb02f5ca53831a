use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_guess::{
        entities::{GuessRequest, GuessResponse},
        helpers::{parse_guess_response, to_jpeg_data_url},
        ports::{FoodGuessService, LLMClient},
        prompt::build_prompt,
        value_objects::MAX_IMAGE_BASE64_LEN,
    },
};

impl<LLM> FoodGuessService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn guess_food(&self, request: GuessRequest) -> Result<GuessResponse, CoreError> {
        // 1. Reject oversized photos before spending an upstream call
        let image_chars = request.image_base64.chars().count();
        if image_chars > MAX_IMAGE_BASE64_LEN {
            tracing::warn!(chars = image_chars, "Rejecting oversized image payload");
            return Err(CoreError::PayloadTooLarge);
        }

        // 2. Build prompt and image reference
        let prompt = build_prompt(&request);
        let image_data_url = to_jpeg_data_url(&request.image_base64);

        // 3. Call LLM
        let raw_output = self
            .llm_client
            .generate_with_image(prompt, image_data_url)
            .await?;

        // 4. Parse and validate response
        parse_guess_response(&raw_output)
    }
}
