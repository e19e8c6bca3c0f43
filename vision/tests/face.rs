use vision::{EMBEDDING_LEN, FaceExtractor, VisionError, embed_crop, similarity};

#[test]
fn embed_crop_is_fixed_length_and_normalized() {
    let crop = image::GrayImage::from_pixel(80, 80, image::Luma([128]));
    let vec = embed_crop(&crop);
    assert_eq!(vec.len(), EMBEDDING_LEN);
    for v in vec {
        assert!((v - 128.0 / 255.0).abs() < 1e-6);
    }
}

#[test]
fn similarity_of_identical_embeddings_is_one() {
    let a = vec![0.2f32; EMBEDDING_LEN];
    assert!((similarity(&a, &a) - 1.0).abs() < 1e-6);
}

#[test]
fn similarity_rejects_length_mismatch() {
    assert_eq!(similarity(&[0.1, 0.2], &[0.1]), 0.0);
    assert_eq!(similarity(&[], &[]), 0.0);
}

#[test]
fn similarity_decreases_with_distance() {
    let a = [0.0f32, 0.0];
    let near = [0.1f32, 0.0];
    let far = [0.9f32, 0.4];
    assert!(similarity(&a, &near) > similarity(&a, &far));
}

#[test]
fn missing_model_fails_to_load() {
    let err = FaceExtractor::from_model_file("/nonexistent/model.bin").unwrap_err();
    assert!(matches!(err, VisionError::Io(_)));
}
