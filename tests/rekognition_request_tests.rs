use textscan::clients::rekognition::to_image;
use textscan::core::models::ObjectRef;

#[test]
fn test_image_references_bucket_and_decoded_key() {
    let object = ObjectRef {
        bucket: "road-signs".to_string(),
        key: "signs/speed limit.jpg".to_string(),
    };

    let image = to_image(&object);

    let s3_object = image.s3_object().expect("image should reference an S3 object");
    assert_eq!(s3_object.bucket(), Some("road-signs"));
    assert_eq!(s3_object.name(), Some("signs/speed limit.jpg"));
    assert_eq!(s3_object.version(), None);
    assert!(image.bytes().is_none());
}
