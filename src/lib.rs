pub mod allocation;
pub mod augmentation;
pub mod evaluation;
pub mod network;
