mod mock_vector_store;

pub use mock_vector_store::MockVectorStore;
