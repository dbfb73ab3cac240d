//! Serde roundtrip, wire-shape, and JsonSchema validation tests for wire types.

use nyaya_core::entities::*;
use nyaya_core::enums::*;
use pretty_assertions::assert_eq;
use schemars::schema_for;
use serde_json::json;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(turn_roundtrip, Turn, Turn::user("What is bail?"));

roundtrip_and_validate!(
    chat_request_roundtrip,
    ChatRequest,
    ChatRequest {
        message: "and anticipatory bail?".into(),
        history: vec![
            HistoryEntry {
                role: Role::User,
                content: "What is bail?".into(),
            },
            HistoryEntry {
                role: Role::Assistant,
                content: "Bail is conditional release.".into(),
            },
        ],
    }
);

roundtrip_and_validate!(
    consultation_roundtrip,
    ConsultationRequest,
    ConsultationRequest {
        name: "Asha".into(),
        phone: "+919800000000".into(),
        email: String::new(),
        message: "Property dispute".into(),
        preferred_method: PreferredMethod::Chat,
        cost: 500,
    }
);

roundtrip_and_validate!(
    search_envelope_roundtrip,
    SearchEnvelope,
    SearchEnvelope {
        query: "remand order under PMLA".into(),
        total_results: Some(1),
        results: vec![QueryResult {
            case_name: "V. Senthil Balaji v. State".into(),
            date: "2023-08-07".into(),
            matched_question: "Was the remand order valid under PMLA?".into(),
            answer: "Yes, the remand was upheld.".into(),
            confidence_score: 0.875,
        }],
        note: "All answers are derived from verified Supreme Court judgments.".into(),
    }
);

roundtrip_and_validate!(
    yearly_total_roundtrip,
    YearlyCrimeTotal,
    YearlyCrimeTotal {
        year: Some(2012),
        total: Some(3_389_925),
    }
);

roundtrip_and_validate!(
    state_total_roundtrip,
    StateCrimeTotal,
    StateCrimeTotal {
        state: Some("Uttar Pradesh".into()),
        total: None,
    }
);

roundtrip_and_validate!(
    backend_health_roundtrip,
    BackendHealth,
    BackendHealth {
        status: "Backend running".into(),
        ipc_rows: 9017,
        women_rows: 736,
        ipc_sections: 511,
        helplines: 12,
    }
);

#[test]
fn chat_request_uses_content_key_for_history() {
    let request = ChatRequest {
        message: "hello".into(),
        history: vec![Turn::assistant("hi").to_history_entry()],
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({
            "message": "hello",
            "history": [{ "role": "assistant", "content": "hi" }]
        })
    );
}

#[test]
fn consultation_serializes_backend_field_names() {
    let request = ConsultationRequest {
        name: "Ravi".into(),
        phone: "98".into(),
        email: "r@example.com".into(),
        message: "help".into(),
        preferred_method: PreferredMethod::Call,
        cost: 500,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["preferred_method"], "call");
    assert_eq!(value["cost"], 500);
}

#[test]
fn search_envelope_tolerates_missing_fields() {
    let envelope: SearchEnvelope =
        serde_json::from_value(json!({ "total_results": 0, "results": [] })).unwrap();
    assert!(envelope.is_empty_match());
    assert!(envelope.query.is_empty());
    assert!(envelope.note.is_empty());
}

#[test]
fn search_envelope_total_is_optional_and_lenient() {
    let null_total: SearchEnvelope =
        serde_json::from_value(json!({ "total_results": null, "results": [{ "case_name": "A v. B" }] }))
            .unwrap();
    assert_eq!(null_total.total_results, None);
    assert!(!null_total.is_empty_match());

    let missing: SearchEnvelope = serde_json::from_value(json!({ "results": [] })).unwrap();
    assert_eq!(missing.total_results, None);
    assert!(missing.is_empty_match());

    let float_total: SearchEnvelope =
        serde_json::from_value(json!({ "total_results": 3.0 })).unwrap();
    assert_eq!(float_total.total_results, Some(3));
}

#[test]
fn search_result_reads_judgement_date_key() {
    let result: QueryResult = serde_json::from_value(json!({
        "case_name": "A v. B",
        "judgement_date": "2019-01-01",
        "matched_question": "q",
        "answer": "a",
        "confidence_score": 0.5
    }))
    .unwrap();
    assert_eq!(result.date, "2019-01-01");
}

#[test]
fn crime_rows_decode_pandas_shapes() {
    let rows: Vec<YearlyCrimeTotal> = serde_json::from_value(json!([
        { "YEAR": 2001, "TOTAL IPC CRIMES": 1_769_308.0 },
        { "YEAR": "2002" },
        { "TOTAL IPC CRIMES": null }
    ]))
    .unwrap();

    assert_eq!(rows[0].year, Some(2001));
    assert_eq!(rows[0].total, Some(1_769_308));
    assert_eq!(rows[1].year, Some(2002));
    assert_eq!(rows[1].total, None);
    assert_eq!(rows[2], YearlyCrimeTotal::default());
}

#[test]
fn state_label_accepts_numbers() {
    let row: StateCrimeTotal = serde_json::from_value(json!({ "State": 7, "TOTAL": 3 })).unwrap();
    assert_eq!(row.state.as_deref(), Some("7"));
    assert_eq!(row.total, Some(3));
}
