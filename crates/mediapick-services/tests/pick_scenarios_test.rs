mod helpers;

use helpers::fixtures::{fake_video, png_of_width, split_jpeg, split_jpeg_with_orientation};
use helpers::{setup_test_picker, source_file, uri_path};
use image::GenericImageView;
use mediapick_core::{
    MediaKind, MediaTypeFilter, PickRequest, PickStatus, PickerError, RawSelection,
};
use mediapick_processing::FileContentResolver;
use mediapick_services::LaunchAction;

#[tokio::test]
async fn test_single_image_rotated_90() {
    let sources = tempfile::tempdir().unwrap();
    let photo = source_file(sources.path(), "portrait.jpg", &split_jpeg_with_orientation(40, 20, 6));

    let picker = setup_test_picker(RawSelection::selected([photo]), FileContentResolver::new()).await;
    let result = picker
        .session
        .start_pick(PickRequest::single().with_image_quality(80))
        .await
        .unwrap();

    assert_eq!(result.status(), PickStatus::Ok);
    assert_eq!(result.files().len(), 1);

    let item = &result.files()[0];
    assert_eq!(item.kind, MediaKind::Image);
    assert!(item.local_file_reference.starts_with("file://"));

    let path = uri_path(&item.local_file_reference);
    assert_eq!(path, item.path);
    let output = image::open(&path).unwrap();
    assert_eq!(output.dimensions(), (20, 40));
}

#[tokio::test]
async fn test_single_image_final_encode_ignores_quality() {
    let sources = tempfile::tempdir().unwrap();
    let photo = source_file(sources.path(), "p.jpg", &split_jpeg(32, 32));

    let mut outputs = Vec::new();
    for quality in [0, 50, 100] {
        let picker =
            setup_test_picker(RawSelection::selected([photo.clone()]), FileContentResolver::new())
                .await;
        let result = picker
            .session
            .start_pick(PickRequest::single().with_image_quality(quality))
            .await
            .unwrap();
        outputs.push(std::fs::read(&result.files()[0].path).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[1], outputs[2]);
}

#[tokio::test]
async fn test_single_canceled() {
    let picker = setup_test_picker(RawSelection::canceled(), FileContentResolver::new()).await;
    let result = picker.session.start_pick(PickRequest::single()).await.unwrap();

    assert_eq!(result.status(), PickStatus::Canceled);
    assert!(result.files().is_empty());
    assert_eq!(picker.scratch_entries(), 0);
}

#[tokio::test]
async fn test_multi_capped_in_selection_order() {
    let sources = tempfile::tempdir().unwrap();
    let items: Vec<_> = (1..=5)
        .map(|w| source_file(sources.path(), &format!("img{}.png", w), &png_of_width(w)))
        .collect();

    let picker = setup_test_picker(RawSelection::selected(items), FileContentResolver::new()).await;
    let result = picker
        .session
        .start_pick(PickRequest::multiple().with_max_items(2))
        .await
        .unwrap();

    let widths: Vec<u32> = result
        .files()
        .iter()
        .map(|item| image::image_dimensions(&item.path).unwrap().0)
        .collect();
    assert_eq!(widths, vec![1, 2]);
    assert_eq!(picker.scratch_entries(), 2);
}

#[tokio::test]
async fn test_multi_drops_failed_item() {
    let sources = tempfile::tempdir().unwrap();
    let items = vec![
        source_file(sources.path(), "one.png", &png_of_width(3)),
        source_file(sources.path(), "two.jpg", b"truncated garbage"),
        source_file(sources.path(), "three.png", &png_of_width(7)),
    ];

    let picker = setup_test_picker(RawSelection::selected(items), FileContentResolver::new()).await;
    let result = picker.session.start_pick(PickRequest::multiple()).await.unwrap();

    assert_eq!(result.status(), PickStatus::Ok);
    let widths: Vec<u32> = result
        .files()
        .iter()
        .map(|item| image::image_dimensions(&item.path).unwrap().0)
        .collect();
    assert_eq!(widths, vec![3, 7]);
}

#[tokio::test]
async fn test_single_failure_is_error_not_cancel() {
    let sources = tempfile::tempdir().unwrap();
    let broken = source_file(sources.path(), "broken.jpg", b"not an image");

    let picker = setup_test_picker(RawSelection::selected([broken]), FileContentResolver::new()).await;
    let err = picker.session.start_pick(PickRequest::single()).await.unwrap_err();

    assert!(matches!(err, PickerError::NormalizationFailed));
    assert_eq!(err.to_string(), "Failed to process media file");
    assert_eq!(picker.scratch_entries(), 0);
}

#[tokio::test]
async fn test_single_video_copied_verbatim() {
    let sources = tempfile::tempdir().unwrap();
    let payload = fake_video(20_000);
    let clip = source_file(sources.path(), "clip", &payload);
    let resolver = FileContentResolver::new().with_declared_type(clip.as_str(), "video/mp4");

    let picker = setup_test_picker(RawSelection::selected([clip]), resolver).await;
    let result = picker
        .session
        .start_pick(PickRequest::single().with_image_quality(5))
        .await
        .unwrap();

    let item = &result.files()[0];
    assert_eq!(item.kind, MediaKind::Video);
    assert!(item.local_file_reference.ends_with(".mp4"));
    assert_eq!(std::fs::read(&item.path).unwrap(), payload);
}

#[tokio::test]
async fn test_media_type_all_routes_video() {
    let sources = tempfile::tempdir().unwrap();
    let payload = fake_video(4_096);
    let photo = source_file(sources.path(), "still.jpg", &split_jpeg(8, 8));
    let clip = source_file(sources.path(), "movie.webm", &payload);

    let picker = setup_test_picker(
        RawSelection::selected([photo, clip]),
        FileContentResolver::new(),
    )
    .await;
    let result = picker
        .session
        .start_pick(PickRequest::multiple().with_media_type(MediaTypeFilter::Any))
        .await
        .unwrap();

    let launch = picker.launcher.last_launch().unwrap();
    assert_eq!(launch.action, LaunchAction::PhotoPicker);
    assert_eq!(launch.mime_filter, "*/*");

    let kinds: Vec<MediaKind> = result.files().iter().map(|item| item.kind).collect();
    assert_eq!(kinds, vec![MediaKind::Image, MediaKind::Video]);
    assert!(result.files()[1].local_file_reference.ends_with(".webm"));
    assert_eq!(std::fs::read(&result.files()[1].path).unwrap(), payload);
}
