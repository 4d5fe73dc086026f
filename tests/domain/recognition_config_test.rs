use docsift::domain::{RecognitionConfig, SegmentationMode};

#[test]
fn given_default_config_when_created_then_uses_english_uniform_block() {
    let config = RecognitionConfig::default();

    assert_eq!(config.language(), "eng");
    assert_eq!(config.segmentation_mode(), SegmentationMode::UniformBlock);
    assert_eq!(config.char_whitelist(), None);
}

#[test]
fn given_config_when_switching_mode_then_original_is_untouched() {
    let base = RecognitionConfig::new("deu").with_char_whitelist(Some("0123456789".to_string()));

    let retry = base.with_segmentation_mode(SegmentationMode::SingleToken);

    assert_eq!(base.segmentation_mode(), SegmentationMode::UniformBlock);
    assert_eq!(retry.segmentation_mode(), SegmentationMode::SingleToken);
    assert_eq!(retry.language(), "deu");
    assert_eq!(retry.char_whitelist(), Some("0123456789"));
}

#[test]
fn given_segmentation_modes_then_map_to_tesseract_psm_values() {
    assert_eq!(SegmentationMode::UniformBlock.page_seg_mode(), 6);
    assert_eq!(SegmentationMode::SingleToken.page_seg_mode(), 8);
}

#[test]
fn given_empty_whitelist_when_configuring_then_it_is_dropped() {
    let config = RecognitionConfig::default().with_char_whitelist(Some(String::new()));

    assert_eq!(config.char_whitelist(), None);
}
