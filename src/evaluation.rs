pub mod expected;
pub mod monte_carlo;
