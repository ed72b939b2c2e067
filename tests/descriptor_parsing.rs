// tests/descriptor_parsing.rs
//! Real-world-shaped info documents through the response parser.
//!
//! Image servers decorate their descriptors with tiles, sizes, rights and
//! service blocks this client never reads; parsing must tolerate all of it
//! and still pull out the fields that drive size negotiation.

use iiif2agent::{
    parse_info_response, ApiGeneration, ApiResponse, AppError, Dimensions, HandlerConfig,
    SizeLimits,
};
use reqwest::StatusCode;

fn ok_response(body: &str) -> ApiResponse<String> {
    ApiResponse {
        data: body.to_string(),
        status: StatusCode::OK,
        url: "https://iiif.example.org/image/abc/info.json".to_string(),
        content_type: Some("application/ld+json".to_string()),
    }
}

const V3_FULL_DOCUMENT: &str = r#"{
    "@context": "http://iiif.io/api/image/3/context.json",
    "id": "https://iiif.example.org/image/abc",
    "type": "ImageService3",
    "protocol": "http://iiif.io/api/image",
    "profile": "level2",
    "width": 5040,
    "height": 7520,
    "maxWidth": 3000,
    "maxArea": 6000000,
    "sizes": [
        {"width": 315, "height": 470},
        {"width": 630, "height": 940}
    ],
    "tiles": [
        {"width": 512, "scaleFactors": [1, 2, 4, 8]}
    ],
    "rights": "http://creativecommons.org/licenses/by/4.0/",
    "extraFeatures": ["regionByPct", "sizeByWh"]
}"#;

const V2_FULL_DOCUMENT: &str = r#"{
    "@context": "http://iiif.io/api/image/2/context.json",
    "@id": "https://iiif.example.org/image/abc",
    "protocol": "http://iiif.io/api/image",
    "width": 6000,
    "height": 4000,
    "sizes": [{"width": 150, "height": 100}],
    "profile": [
        "http://iiif.io/api/image/2/level2.json",
        {
            "formats": ["jpg", "png"],
            "qualities": ["default", "color", "gray"],
            "maxWidth": 2048,
            "maxHeight": 1024,
            "supports": ["regionByPct", "sizeByForcedWh"]
        }
    ]
}"#;

#[test]
fn v3_document_with_decorations_parses() {
    let info = parse_info_response(ok_response(V3_FULL_DOCUMENT)).unwrap();

    assert_eq!(info.generation(), ApiGeneration::V3);
    assert_eq!(info.native_dimensions(), Some(Dimensions::new(5040, 7520)));
    assert_eq!(info.max_width, Some(3000));
    assert_eq!(info.max_area, Some(6_000_000));
}

#[test]
fn v2_document_with_profile_list_parses() {
    let info = parse_info_response(ok_response(V2_FULL_DOCUMENT)).unwrap();

    assert_eq!(info.generation(), ApiGeneration::V2);
    assert_eq!(info.native_dimensions(), Some(Dimensions::new(6000, 4000)));
    assert_eq!(info.profile_limit_u32("maxWidth"), Some(2048));
    assert_eq!(info.profile_limit_u32("maxHeight"), Some(1024));
    assert_eq!(info.profile_limit_u64("maxArea"), None);
}

#[test]
fn parsed_documents_drive_limit_resolution() {
    let info = parse_info_response(ok_response(V3_FULL_DOCUMENT)).unwrap();
    let limits = SizeLimits::resolve(
        &info,
        Dimensions::new(5040, 7520),
        info.generation(),
        &HandlerConfig::new(100_000, None),
    );

    // maxWidth mirrors into the absent maxHeight; the area figure rides
    // along.
    assert_eq!(limits.max_width, 3000);
    assert_eq!(limits.max_height, 3000);
    assert_eq!(limits.max_area, Some(6_000_000));

    let info = parse_info_response(ok_response(V2_FULL_DOCUMENT)).unwrap();
    let limits = SizeLimits::resolve(
        &info,
        Dimensions::new(6000, 4000),
        info.generation(),
        &HandlerConfig::new(100_000, None),
    );

    assert_eq!(limits.max_width, 2048);
    assert_eq!(limits.max_height, 1024);
    assert_eq!(limits.max_area, None);
}

#[test]
fn error_statuses_surface_with_their_code() {
    let response = ApiResponse {
        data: "Service Unavailable".to_string(),
        status: StatusCode::SERVICE_UNAVAILABLE,
        url: "https://iiif.example.org/image/abc/info.json".to_string(),
        content_type: None,
    };

    match parse_info_response(response) {
        Err(AppError::TransportError { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected TransportError, got {:?}", other),
    }
}

#[test]
fn truncated_json_is_malformed_not_a_panic() {
    let response = ok_response(r#"{"@context": "http://iiif.io/api/image/3/context.json", "wid"#);
    assert!(matches!(
        parse_info_response(response),
        Err(AppError::MalformedDescriptor(_))
    ));
}
