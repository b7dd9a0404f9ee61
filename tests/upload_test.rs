mod common;

use poem::http::StatusCode;
use poem::Endpoint;

use common::{json_body, multipart_upload, setup_context, TEST_BUCKET, TEST_URL_BASE};
use studio_portal_backend::api::build_app;

#[tokio::test]
async fn uploaded_images_are_stored_and_resolvable() {
    let ctx = setup_context().await;
    let app = build_app(ctx.app_data.clone());

    let resp = app
        .get_response(multipart_upload(
            "/api/upload-images",
            &[
                ("kitchen.jpg", b"kitchen bytes".as_slice()),
                ("facade.png", b"facade bytes".as_slice()),
            ],
        ))
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["success"], true);

    let urls = body["urls"].as_array().expect("urls should be an array");
    assert_eq!(urls.len(), 2);

    let expected_prefix = format!("{}/{}/", TEST_URL_BASE, TEST_BUCKET);
    let expected_bytes: [&[u8]; 2] = [b"kitchen bytes", b"facade bytes"];
    for (url, expected) in urls.iter().zip(expected_bytes) {
        let url = url.as_str().expect("url should be a string");
        assert!(url.starts_with(&expected_prefix), "unexpected url {url}");

        // Each URL resolves to a stored blob
        let key = url.rsplit('/').next().unwrap();
        let stored = std::fs::read(ctx.storage_dir.path().join(TEST_BUCKET).join(key))
            .expect("blob should exist on disk");
        assert_eq!(stored, expected);
    }

    assert!(urls[0].as_str().unwrap().ends_with("-kitchen.jpg"));
    assert!(urls[1].as_str().unwrap().ends_with("-facade.png"));
}

#[tokio::test]
async fn more_than_twelve_files_are_rejected() {
    let ctx = setup_context().await;
    let app = build_app(ctx.app_data.clone());

    let names: Vec<String> = (0..13).map(|i| format!("photo-{i}.jpg")).collect();
    let files: Vec<(&str, &[u8])> = names
        .iter()
        .map(|n| (n.as_str(), b"x".as_slice()))
        .collect();

    let resp = app
        .get_response(multipart_upload("/api/upload-images", &files))
        .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn twelve_files_is_the_accepted_boundary() {
    let ctx = setup_context().await;
    let app = build_app(ctx.app_data.clone());

    let names: Vec<String> = (0..12).map(|i| format!("photo-{i}.jpg")).collect();
    let files: Vec<(&str, &[u8])> = names
        .iter()
        .map(|n| (n.as_str(), b"x".as_slice()))
        .collect();

    let resp = app
        .get_response(multipart_upload("/api/upload-images", &files))
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["urls"].as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn empty_upload_succeeds_with_no_urls() {
    let ctx = setup_context().await;
    let app = build_app(ctx.app_data.clone());

    let resp = app
        .get_response(multipart_upload("/api/upload-images", &[]))
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["urls"].as_array().unwrap().len(), 0);
}
