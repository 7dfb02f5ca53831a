use std::sync::Arc;

use foodguess_core::application::FoodGuessAppService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FoodGuessAppService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FoodGuessAppService) -> Self {
        Self { args, service }
    }
}
