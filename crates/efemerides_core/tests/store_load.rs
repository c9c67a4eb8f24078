use efemerides_core::{
    load_with_fallback, try_load, DateKey, Efemeride, EventSource, EventStore, FileSource,
    HttpSource, LoadError, SourceLocation,
};
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;

fn write_document(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(body.as_bytes()).expect("write document");
    file
}

#[test]
fn file_source_loads_document() {
    let document = json!({
        "7-20": [
            {"tipo": "Historia", "evento": "Independencia de Colombia", "descripcion": "1810"}
        ],
        "12-25": [
            {"tipo": "Religioso", "evento": "Navidad", "descripcion": "..."},
            {"tipo": "Mundial", "evento": "Navidad", "descripcion": "..."}
        ]
    });
    let file = write_document(&document.to_string());

    let store = try_load(&FileSource::new(file.path())).expect("valid document");
    assert_eq!(store.len(), 2);
    assert_eq!(
        store.lookup(DateKey::new(7, 20).unwrap()),
        &[Efemeride::new("Historia", "Independencia de Colombia", "1810")]
    );
    assert_eq!(store.lookup(DateKey::new(12, 25).unwrap()).len(), 2);
}

#[test]
fn missing_file_falls_back_to_embedded_dataset() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = FileSource::new(dir.path().join("efemerides.json"));

    assert!(matches!(try_load(&source), Err(LoadError::Io(_))));
    assert_eq!(load_with_fallback(&source), EventStore::fallback());
}

#[test]
fn malformed_document_falls_back_to_embedded_dataset() {
    let file = write_document(r#"{"1-1": [{"tipo": "Mundial"}"#);
    let source = FileSource::new(file.path());

    assert!(matches!(try_load(&source), Err(LoadError::Parse(_))));
    assert_eq!(load_with_fallback(&source), EventStore::fallback());
}

#[test]
fn unreachable_http_source_falls_back_to_embedded_dataset() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind free port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    let source = HttpSource::new(format!("http://127.0.0.1:{port}/efemerides.json"));
    assert!(matches!(try_load(&source), Err(LoadError::Http(_))));
    assert_eq!(load_with_fallback(&source), EventStore::fallback());
}

#[test]
fn permissive_records_keep_absent_fields() {
    let file = write_document(r#"{"3-8": [{"evento": "Día de la Mujer"}, {}]}"#);
    let store = try_load(&FileSource::new(file.path())).expect("shape is valid");

    let day = store.lookup(DateKey::new(3, 8).unwrap());
    assert_eq!(day.len(), 2);
    assert_eq!(day[0].category, None);
    assert_eq!(day[0].title_text(), "Día de la Mujer");
    assert_eq!(day[1].title, None);
}

#[test]
fn fallback_dataset_is_single_new_year_entry() {
    let store = EventStore::fallback();
    let keys = store.iter().map(|(key, _)| key).collect::<Vec<_>>();
    assert_eq!(keys, vec!["1-1"]);

    let categories = store
        .lookup(DateKey::new(1, 1).unwrap())
        .iter()
        .map(Efemeride::category_text)
        .collect::<Vec<_>>();
    assert_eq!(categories, vec!["Mundial", "Historia", "Religioso"]);
}

#[test]
fn source_location_builds_matching_source() {
    let file = write_document(r#"{"2-14": [{"tipo": "Mundial"}]}"#);
    let location = SourceLocation::parse(file.path().to_str().expect("utf-8 path"));
    assert_eq!(location, SourceLocation::File(PathBuf::from(file.path())));

    let source: Box<dyn EventSource> = location.into_source();
    let store = load_with_fallback(source.as_ref());
    assert_eq!(store.lookup(DateKey::new(2, 14).unwrap()).len(), 1);
}

#[test]
fn mistyped_field_keeps_rest_of_document() {
    let file = write_document(
        r#"{
            "3-8": [{"tipo": "Mundial", "evento": "Día de la Mujer", "descripcion": "..."}],
            "5-1": [{"tipo": "Mundial", "evento": "Trabajo", "descripcion": 1886}]
        }"#,
    );
    let store = load_with_fallback(&FileSource::new(file.path()));

    assert_ne!(store, EventStore::fallback());
    assert_eq!(store.lookup(DateKey::new(3, 8).unwrap()).len(), 1);
    let may_day = store.lookup(DateKey::new(5, 1).unwrap());
    assert_eq!(may_day[0].title_text(), "Trabajo");
    assert_eq!(may_day[0].description_text(), "1886");
}

#[test]
fn null_day_has_no_events_and_keeps_rest_of_document() {
    let file = write_document(
        r#"{"3-8": [{"tipo": "Mundial", "evento": "Día de la Mujer"}], "4-1": null}"#,
    );
    let store = try_load(&FileSource::new(file.path())).expect("object document");

    assert_eq!(store.len(), 2);
    assert_eq!(store.lookup(DateKey::new(3, 8).unwrap()).len(), 1);
    assert!(store.lookup(DateKey::new(4, 1).unwrap()).is_empty());
}

#[test]
fn non_object_document_falls_back() {
    let file = write_document(r#"[{"tipo": "Mundial"}]"#);
    let source = FileSource::new(file.path());

    assert!(matches!(try_load(&source), Err(LoadError::Parse(_))));
    assert_eq!(load_with_fallback(&source), EventStore::fallback());
}
