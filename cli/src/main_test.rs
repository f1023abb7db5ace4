use super::*;

// =============================================================
// catalog commands
// =============================================================

#[test]
fn list_tools_filters_by_category_and_flags() {
    let catalog = Catalog::builtin();
    let all_generators = list_tools(&catalog, Some("generators"), false, false).unwrap();
    assert_eq!(all_generators.len(), catalog.count_in("generators"));

    let featured_new = list_tools(&catalog, None, true, true).unwrap();
    assert!(!featured_new.is_empty());
    assert!(featured_new.iter().all(|t| t.featured && t.is_new));
}

#[test]
fn list_tools_rejects_unknown_category() {
    let catalog = Catalog::builtin();
    let err = list_tools(&catalog, Some("astrology"), false, false).unwrap_err();
    assert_eq!(err.to_string(), "unknown category: astrology");
}

#[test]
fn tool_line_marks_flags() {
    let catalog = Catalog::builtin();
    let line = tool_line(catalog.tool("qr-generator").unwrap());
    assert!(line.starts_with("qr-generator"));
    assert!(line.contains("*+"));
    assert!(line.ends_with("QR Code Generator"));
}

// =============================================================
// admin helpers
// =============================================================

#[test]
fn build_patch_serializes_only_set_fields() {
    let fields = ToolFields { new: Some(true), category: Some("design".into()), ..ToolFields::default() };
    let body = serde_json::to_value(build_patch(fields)).unwrap();
    assert_eq!(body, serde_json::json!({ "new": true, "category_id": "design" }));
}

#[test]
fn build_patch_without_fields_is_empty() {
    assert!(build_patch(ToolFields::default()).is_empty());
}

#[test]
fn build_patch_validates_against_catalog() {
    let fields = ToolFields { category: Some("astrology".into()), ..ToolFields::default() };
    let err = build_patch(fields).validate(&Catalog::builtin()).unwrap_err();
    assert_eq!(err, RecordError::UnknownCategory("astrology".into()));
}

#[test]
fn api_url_joins_without_double_slash() {
    assert_eq!(api_url("http://localhost:3000/", "/api/tools"), "http://localhost:3000/api/tools");
    assert_eq!(api_url("http://localhost:3000", "/healthz"), "http://localhost:3000/healthz");
}

#[test]
fn error_message_prefers_body() {
    assert_eq!(error_message(&Value::Null, 404), "not found");
    assert_eq!(error_message(&serde_json::json!({"error": "x"}), 500), r#"{"error":"x"}"#);
}

#[test]
fn cli_parses_admin_update() {
    let cli = Cli::try_parse_from(["toolbox-cli", "admin", "update", "00000000-0000-0000-0000-000000000000", "--new", "true"])
        .unwrap();
    match cli.command {
        Command::Admin(AdminCommand { command: AdminSubcommand::Update { id, fields } }) => {
            assert!(id.is_nil());
            assert_eq!(fields.new, Some(true));
            assert!(fields.name.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}
