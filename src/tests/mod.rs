pub mod common;
mod token_provider;
