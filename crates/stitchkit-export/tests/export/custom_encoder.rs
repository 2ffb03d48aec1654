// Machine-format encoders plugged in from outside the crate.

use serde_json::json;
use stitchkit_core::EncodingError;
use stitchkit_export::{
    EmbroideryPattern, EncoderRegistry, ExportOptions, ExportService, PatternEncoder,
};

/// Writes one byte per instruction kind; enough to observe what the
/// encoder was handed.
struct KindBytesEncoder;

impl PatternEncoder for KindBytesEncoder {
    fn format(&self) -> &'static str {
        "kinds"
    }

    fn extension(&self) -> &'static str {
        "bin"
    }

    fn encode(&self, pattern: &EmbroideryPattern) -> Result<Vec<u8>, EncodingError> {
        Ok(pattern
            .plan()
            .iter()
            .map(|i| i.kind.mnemonic().as_bytes()[0])
            .collect())
    }
}

/// Always produces an empty file.
struct EmptyEncoder;

impl PatternEncoder for EmptyEncoder {
    fn format(&self) -> &'static str {
        "empty"
    }

    fn extension(&self) -> &'static str {
        "bin"
    }

    fn encode(&self, _pattern: &EmbroideryPattern) -> Result<Vec<u8>, EncodingError> {
        Ok(Vec::new())
    }
}

fn options(format: &str) -> ExportOptions {
    ExportOptions {
        format: format.to_string(),
        ..ExportOptions::default()
    }
}

#[test]
fn test_custom_encoder_receives_full_plan() {
    let mut registry = EncoderRegistry::probe();
    registry.register(KindBytesEncoder);
    let service = ExportService::new(registry);

    let body = json!([{"x": 0, "y": 0}, {"x": 20, "y": 0}, {"x": 400, "y": 0}]);
    let output = service.export_value(&body, &options("kinds")).unwrap();

    assert_eq!(output.bytes, b"MSTMMME".to_vec());
    assert_eq!(output.file_name, "embroidery.bin");
    assert_eq!(output.mime_type, "application/octet-stream");
    assert!(service.registry().capabilities().supports("kinds"));
}

#[test]
fn test_empty_encoding_is_rejected() {
    let mut registry = EncoderRegistry::empty();
    registry.register(EmptyEncoder);
    let service = ExportService::new(registry);

    let err = service
        .export_value(&json!([{"x": 0, "y": 0}]), &options("empty"))
        .unwrap_err();
    assert_eq!(err.kind(), "encoding_failed");
    assert!(err.is_service_error());
}
