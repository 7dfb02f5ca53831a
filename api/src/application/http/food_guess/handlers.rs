pub mod get_guess_info;
pub mod guess_food;
