// Export request handling
// Tests the full request path: body decoding, planning, and encoding,
// including how each failure is classified for the caller.

use serde_json::json;
use stitchkit_export::{EncoderRegistry, ExportOptions, ExportService, Metadata};

fn service() -> ExportService {
    ExportService::new(EncoderRegistry::probe())
}

#[test]
fn test_export_json_request() {
    let body = br#"{"stitches": [{"x": 0, "y": 0}, {"x": 500, "y": 0}]}"#;
    let output = service()
        .export_bytes(body, &ExportOptions::default())
        .unwrap();

    assert_eq!(output.file_name, "embroidery.json");
    assert_eq!(output.mime_type, "application/json");
    assert_eq!(output.statistics.jump_count, 1);
    assert_eq!(output.statistics.stitch_count, 1);

    let document: serde_json::Value = serde_json::from_slice(&output.bytes).unwrap();
    let instructions = document["plan"]["instructions"].as_array().unwrap();
    let listing: Vec<String> = instructions
        .iter()
        .map(|i| format!("{}({},{})", i["kind"].as_str().unwrap(), i["x"], i["y"]))
        .collect();
    assert_eq!(
        listing,
        vec![
            "MOVE(-250,0)",
            "TRIM(-250,0)",
            "MOVE(-125,0)",
            "MOVE(0,0)",
            "MOVE(125,0)",
            "MOVE(250,0)",
            "END(250,0)",
        ]
    );
    assert_eq!(document["metadata"]["name"], "Stitchkit Design");
    assert_eq!(document["threads"].as_array().unwrap().len(), 1);
}

#[test]
fn test_export_uses_options() {
    let options = ExportOptions {
        format: "TXT".to_string(),
        max_stitch_distance: 5.0,
        metadata: Metadata {
            name: "Star".to_string(),
            author: "Grace".to_string(),
        },
        file_stem: "star".to_string(),
        ..ExportOptions::default()
    };
    let body = json!([{"x": 0, "y": 0}, {"x": 10, "y": 0}]);
    let output = service().export_value(&body, &options).unwrap();

    assert_eq!(output.file_name, "star.txt");
    let text = String::from_utf8(output.bytes).unwrap();
    assert!(text.starts_with("# name: Star\n# author: Grace\n"));
    // 10 units with a 5 unit limit: floor(10 / 5) + 1 = 3 sub-steps
    assert!(text.contains("TRIM,-5,0\nMOVE,-2,0\nMOVE,2,0\nMOVE,5,0\nEND,5,0\n"));
}

#[test]
fn test_empty_request_is_input_error() {
    let err = service()
        .export_bytes(br#"{"stitches": []}"#, &ExportOptions::default())
        .unwrap_err();
    assert!(err.is_input_error());
    assert_eq!(err.kind(), "invalid_input");
}

#[test]
fn test_malformed_point_is_input_error() {
    let err = service()
        .export_value(&json!({"stitches": [{"x": 1}]}), &ExportOptions::default())
        .unwrap_err();
    assert!(err.is_input_error());
    assert_eq!(err.kind(), "malformed_point");
    assert_eq!(err.report().error, "Malformed point at index 0: missing numeric 'y'");
}

#[test]
fn test_invalid_json_body() {
    let err = service()
        .export_bytes(b"{\"stitches\": [", &ExportOptions::default())
        .unwrap_err();
    assert!(err.is_input_error());
    assert_eq!(err.kind(), "invalid_request");
}

#[test]
fn test_unknown_format_is_service_error() {
    let options = ExportOptions {
        format: "pes".to_string(),
        ..ExportOptions::default()
    };
    let err = service()
        .export_value(&json!([{"x": 0, "y": 0}]), &options)
        .unwrap_err();
    assert!(err.is_service_error());
    assert!(err.is_encoding_unavailable());
}

#[test]
fn test_service_is_shareable_across_threads() {
    let service = std::sync::Arc::new(service());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let service = std::sync::Arc::clone(&service);
            std::thread::spawn(move || {
                let body = json!([{"x": 0, "y": 0}, {"x": 10 * i, "y": 0}]);
                service
                    .export_value(&body, &ExportOptions::default())
                    .map(|out| out.statistics.point_count)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 2);
    }
}
