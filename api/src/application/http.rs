pub mod food_guess;
pub mod server;

#[cfg(test)]
pub mod testing;
