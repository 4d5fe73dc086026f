mod simulated_llm_client;

pub use simulated_llm_client::SimulatedLlmClient;
