pub mod aggregate;
pub mod repository;

// Re-exports
pub use aggregate::ServingUnit;
pub use repository::UnitRepository;
