use atrius_fhir_stu3::stu3::{Bundle, Observation, Resource};
use atrius_fhir_stu3::{from_str, from_value, to_string, to_value};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use serde_json::Value;

const OBSERVATION: &str = r#"{
    "resourceType": "Observation",
    "id": "blood-pressure",
    "meta": {"lastUpdated": "2014-01-30T22:35:23+11:00"},
    "status": "final",
    "category": [{"coding": [{"system": "http://hl7.org/fhir/observation-category", "code": "vital-signs"}]}],
    "code": {"coding": [{"system": "http://loinc.org", "code": "85354-9"}], "text": "Blood pressure"},
    "subject": {"reference": "Patient/example"},
    "effectiveDateTime": "2012-09-17",
    "performer": [{"reference": "Practitioner/example"}],
    "component": [
        {
            "code": {"coding": [{"system": "http://loinc.org", "code": "8480-6"}]},
            "valueQuantity": {"value": 107, "unit": "mmHg", "system": "http://unitsofmeasure.org", "code": "mm[Hg]"}
        },
        {
            "code": {"coding": [{"system": "http://loinc.org", "code": "8462-4"}]},
            "valueQuantity": {"value": 60, "unit": "mmHg", "system": "http://unitsofmeasure.org", "code": "mm[Hg]"}
        }
    ]
}"#;

fn search_bundle(entries: usize) -> String {
    let entry = format!(
        r#"{{"fullUrl":"http://example.org/fhir/Observation/bp","resource":{OBSERVATION},"search":{{"mode":"match"}}}}"#
    );
    let entries = vec![entry; entries].join(",");
    format!(r#"{{"resourceType":"Bundle","type":"searchset","entry":[{entries}]}}"#)
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/decode");
    let observation_value: Value = serde_json::from_str(OBSERVATION).unwrap();
    let bundle = search_bundle(50);

    group.bench_function("observation_from_str", |b| {
        b.iter(|| from_str::<Observation>(black_box(OBSERVATION)))
    });

    group.bench_function("observation_from_value", |b| {
        b.iter(|| from_value::<Observation>(black_box(&observation_value)))
    });

    group.bench_function("observation_as_resource", |b| {
        b.iter(|| from_value::<Resource>(black_box(&observation_value)))
    });

    group.bench_function("bundle_50_entries", |b| {
        b.iter(|| from_str::<Bundle>(black_box(&bundle)))
    });

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/encode");
    let observation: Observation = from_str(OBSERVATION).unwrap();
    let bundle: Bundle = from_str(&search_bundle(50)).unwrap();

    group.bench_function("observation_to_value", |b| {
        b.iter(|| to_value(black_box(&observation)))
    });

    group.bench_function("observation_to_string", |b| {
        b.iter(|| to_string(black_box(&observation)))
    });

    group.bench_function("bundle_50_entries", |b| {
        b.iter(|| to_string(black_box(&bundle)))
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
