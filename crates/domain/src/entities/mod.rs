pub mod token;

// Re-export for easier access
pub use token::TokenMeta;
