// tests/resolution_pipeline.rs
//! End-to-end resolution over fixture descriptors: region parsing through
//! constraint resolution, dimension fitting, and request assembly. No I/O.

use iiif2agent::{plan_request, AppError, BaseUri, HandlerConfig, ImageInfo};
use pretty_assertions::assert_eq;

fn base() -> BaseUri {
    BaseUri::parse("https://iiif.example.org/image/abc").unwrap()
}

fn info(json: &str) -> ImageInfo {
    serde_json::from_str(json).expect("fixture descriptor parses")
}

fn v3_plain() -> ImageInfo {
    info(
        r#"{"@context": "http://iiif.io/api/image/3/context.json",
            "id": "https://iiif.example.org/image/abc",
            "type": "ImageService3",
            "protocol": "http://iiif.io/api/image",
            "width": 5040, "height": 7520}"#,
    )
}

#[test]
fn full_image_scales_to_the_handler_ceiling() {
    let request = plan_request(&base(), &v3_plain(), None, &HandlerConfig::new(1000, None)).unwrap();

    assert_eq!(request.region, "full");
    assert_eq!(request.size, "670,1000");
    assert_eq!(
        request.path,
        "https://iiif.example.org/image/abc/full/670,1000/0/default.jpg"
    );
}

#[test]
fn percentage_region_resolves_through_its_pixel_extent() {
    let request = plan_request(
        &base(),
        &v3_plain(),
        Some("pct:15,30,25,30"),
        &HandlerConfig::new(1000, None),
    )
    .unwrap();

    // Region pixels are (1260, 2256); the fit truncates to (558, 999).
    assert_eq!(request.region, "pct:15,30,25,30");
    assert_eq!(request.size, "558,999");
    assert_eq!(
        request.path,
        "https://iiif.example.org/image/abc/pct:15,30,25,30/558,999/0/default.jpg"
    );
}

#[test]
fn small_image_needs_no_scaling_and_uses_the_keyword() {
    let small = info(
        r#"{"@context": "http://iiif.io/api/image/3/context.json",
            "width": 100, "height": 100}"#,
    );
    let request = plan_request(&base(), &small, None, &HandlerConfig::new(1000, None)).unwrap();

    assert_eq!(request.size, "max");
    assert_eq!(
        request.path,
        "https://iiif.example.org/image/abc/full/max/0/default.jpg"
    );
}

#[test]
fn v2_keyword_differs_from_v3() {
    let small = info(
        r#"{"@context": "http://iiif.io/api/image/2/context.json",
            "@id": "https://iiif.example.org/image/abc",
            "width": 100, "height": 100}"#,
    );
    let request = plan_request(&base(), &small, None, &HandlerConfig::new(1000, None)).unwrap();

    assert_eq!(request.size, "full");
}

#[test]
fn server_max_width_mirrors_into_max_height() {
    let limited = info(
        r#"{"@context": "http://iiif.io/api/image/3/context.json",
            "width": 5040, "height": 7520, "maxWidth": 800}"#,
    );
    let request = plan_request(&base(), &limited, None, &HandlerConfig::new(100_000, None)).unwrap();

    // The mirrored maxHeight of 800 binds the taller axis.
    assert_eq!(request.size, "536,800");
}

#[test]
fn caller_ceiling_beats_a_looser_server_limit() {
    let limited = info(
        r#"{"@context": "http://iiif.io/api/image/3/context.json",
            "width": 5040, "height": 7520, "maxWidth": 4000, "maxHeight": 4000}"#,
    );
    let request = plan_request(&base(), &limited, None, &HandlerConfig::new(1000, None)).unwrap();

    assert_eq!(request.size, "670,1000");
}

#[test]
fn v3_area_ceiling_triggers_the_corrective_pass() {
    let square = info(
        r#"{"@context": "http://iiif.io/api/image/3/context.json",
            "width": 2000, "height": 2000}"#,
    );
    let request = plan_request(
        &base(),
        &square,
        None,
        &HandlerConfig::new(2000, Some(1_000_000)),
    )
    .unwrap();

    assert_eq!(request.size, "1000,1000");
}

#[test]
fn v2_area_figure_is_carried_but_inert() {
    let v2 = info(
        r#"{"@context": "http://iiif.io/api/image/2/context.json",
            "width": 2000, "height": 2000,
            "profile": ["http://iiif.io/api/image/2/level2.json",
                        {"maxArea": 1000000}]}"#,
    );
    let request = plan_request(&base(), &v2, None, &HandlerConfig::new(2000, None)).unwrap();

    // No declared area semantics under v2: the full 2000x2000 survives and
    // the size collapses to the keyword.
    assert_eq!(request.size, "full");
}

#[test]
fn v2_profile_extension_limits_apply() {
    let v2 = info(
        r#"{"@context": "http://iiif.io/api/image/2/context.json",
            "width": 6000, "height": 4000,
            "profile": ["http://iiif.io/api/image/2/level2.json",
                        {"maxWidth": 3000}]}"#,
    );
    let request = plan_request(&base(), &v2, None, &HandlerConfig::new(100_000, None)).unwrap();

    // 6000x4000 under a mirrored 3000x3000 limit halves both axes.
    assert_eq!(request.size, "3000,2000");
}

#[test]
fn bad_selectors_fail_with_the_right_taxonomy() {
    let config = HandlerConfig::new(1000, None);

    let err = plan_request(&base(), &v3_plain(), Some("pct:90,0,20,10"), &config).unwrap_err();
    assert!(matches!(err, AppError::InvalidRegionBounds(_)));

    let err = plan_request(&base(), &v3_plain(), Some("pct:a,0,10,10"), &config).unwrap_err();
    assert!(matches!(err, AppError::InvalidRegionSyntax(_)));

    let err = plan_request(&base(), &v3_plain(), Some("cropped"), &config).unwrap_err();
    assert!(matches!(err, AppError::InvalidRegionSyntax(_)));
}

#[test]
fn empty_selector_resolves_as_full() {
    let request = plan_request(
        &base(),
        &v3_plain(),
        Some(""),
        &HandlerConfig::new(1000, None),
    )
    .unwrap();
    assert_eq!(request.region, "full");
}

#[test]
fn targets_never_exceed_limits_or_source() {
    let configs = [
        HandlerConfig::new(1, None),
        HandlerConfig::new(317, None),
        HandlerConfig::new(1000, Some(123_456)),
        HandlerConfig::new(100_000, Some(999)),
        HandlerConfig::new(100_000, None),
    ];
    let selectors: [Option<&str>; 3] = [None, Some("pct:15,30,25,30"), Some("pct:0,0,1,99")];

    for config in &configs {
        for selector in &selectors {
            let request = plan_request(&base(), &v3_plain(), *selector, config).unwrap();
            if request.size == "max" {
                continue;
            }
            let (w, h) = request.size.split_once(',').expect("explicit pixel pair");
            let w: u64 = w.parse().unwrap();
            let h: u64 = h.parse().unwrap();
            assert!(w <= config.max_dimension as u64, "{} > {}", w, config.max_dimension);
            assert!(h <= config.max_dimension as u64, "{} > {}", h, config.max_dimension);
            assert!(w <= 5040 && h <= 7520, "never upsizes");
            if let Some(max_area) = config.max_area {
                assert!(w * h <= max_area, "{}x{} exceeds area {}", w, h, max_area);
            }
        }
    }
}
