//! Request/response bodies checked against their generated JSON Schemas.

use salp_core::schema::{SchemaKind, json_schema};
use salp_core::vocab::{
    Education, MaritalStatus, Occupation, Race, Relationship, Vocabulary, Workclass,
};
use salp_core::{InputRecord, PredictionResult, SalaryCategory};
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

/// One record per vocabulary member, cycling the other fields through their
/// own vocabularies so every literal of every field is exercised.
fn records_covering_every_literal() -> Vec<InputRecord> {
    let longest = [
        Workclass::all().len(),
        Education::all().len(),
        MaritalStatus::all().len(),
        Occupation::all().len(),
        Relationship::all().len(),
        Race::all().len(),
    ]
    .into_iter()
    .max()
    .unwrap_or(0);

    (0..longest)
        .map(|i| InputRecord {
            age: 17.0 + (i as f64),
            workclass: Workclass::all()[i % Workclass::all().len()],
            fnlwgt: 10_000.0 * (i as f64 + 1.0),
            education: Education::all()[i % Education::all().len()],
            education_num: 1.0 + (i % 16) as f64,
            marital_status: MaritalStatus::all()[i % MaritalStatus::all().len()],
            occupation: Occupation::all()[i % Occupation::all().len()],
            relationship: Relationship::all()[i % Relationship::all().len()],
            race: Race::all()[i % Race::all().len()],
        })
        .collect()
}

fn literals<V: Vocabulary>() -> Vec<&'static str> {
    V::all().iter().map(|member| member.as_str()).collect()
}

#[test]
fn every_record_body_matches_request_schema() {
    let schema = json_schema(SchemaKind::Request).unwrap();
    for record in records_covering_every_literal() {
        assert!(record.validate().is_ok(), "{record:?}");
        let body = serde_json::to_value(&record).unwrap();
        let errors = validate_against_schema(&schema, &body);
        assert!(errors.is_empty(), "schema errors for {body}: {errors:?}");
    }
}

#[test]
fn categorical_body_values_are_vocabulary_members() {
    for record in records_covering_every_literal() {
        let body = serde_json::to_value(&record).unwrap();
        let checks = [
            ("workclass", literals::<Workclass>()),
            ("education", literals::<Education>()),
            ("maritalStatus", literals::<MaritalStatus>()),
            ("occupation", literals::<Occupation>()),
            ("relationship", literals::<Relationship>()),
            ("race", literals::<Race>()),
        ];
        for (key, allowed) in checks {
            let value = body[key].as_str().expect("categorical value is a string");
            assert!(allowed.contains(&value), "{key}={value} not in vocabulary");
        }
    }
}

#[test]
fn request_schema_rejects_foreign_literal() {
    let schema = json_schema(SchemaKind::Request).unwrap();
    let mut body = serde_json::to_value(InputRecord::default()).unwrap();
    body["race"] = json!("Martian");
    assert!(!validate_against_schema(&schema, &body).is_empty());
}

#[test]
fn response_schema_accepts_both_categories() {
    let schema = json_schema(SchemaKind::Response).unwrap();
    for category in [SalaryCategory::AboveThreshold, SalaryCategory::AtOrBelowThreshold] {
        let result = PredictionResult {
            salary_category: category,
            explanation: "High education and occupation level.".into(),
        };
        let body = serde_json::to_value(&result).unwrap();
        let errors = validate_against_schema(&schema, &body);
        assert!(errors.is_empty(), "{errors:?}");
    }
}

#[test]
fn response_schema_rejects_invalid_category() {
    let schema = json_schema(SchemaKind::Response).unwrap();
    let body = json!({"salaryCategory": "50K", "explanation": "x"});
    assert!(!validate_against_schema(&schema, &body).is_empty());
}
