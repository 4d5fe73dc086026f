mod simulated_llm_client_test;
