mod text_normalizer_test;
