mod mock_registry;

pub use mock_registry::MockRegistry;
