use crate::{
    domain::common::{FoodGuessConfig, services::Service},
    infrastructure::llm::OpenAILLMClient,
};

pub type FoodGuessAppService = Service<OpenAILLMClient>;

pub fn create_service(config: FoodGuessConfig) -> FoodGuessAppService {
    let llm_client = OpenAILLMClient::new(config.llm);

    Service::new(llm_client)
}
