use cinedex_db::open_memory;
use cinedex_db::schema::{create_schema, open_database, SchemaError, CURRENT_VERSION};
use rusqlite::Connection;

fn recorded_versions(conn: &Connection) -> Vec<i32> {
    let mut stmt = conn
        .prepare("SELECT version FROM schema_version ORDER BY version")
        .unwrap();
    let rows = stmt.query_map([], |row| row.get::<_, i32>(0)).unwrap();
    rows.collect::<Result<_, _>>().unwrap()
}

fn table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    let rows = stmt.query_map([], |row| row.get::<_, String>(0)).unwrap();
    rows.collect::<Result<_, _>>().unwrap()
}

#[test]
fn fresh_catalog_is_at_current_version() {
    let conn = open_memory().unwrap();
    assert_eq!(recorded_versions(&conn), vec![CURRENT_VERSION]);
}

#[test]
fn rerunning_migrations_changes_nothing() {
    let conn = open_memory().unwrap();
    create_schema(&conn).unwrap();
    create_schema(&conn).unwrap();
    assert_eq!(recorded_versions(&conn), vec![CURRENT_VERSION]);
}

#[test]
fn catalog_tables() {
    let conn = open_memory().unwrap();
    let names = table_names(&conn);
    for table in ["castings", "movies", "people", "schema_version"] {
        assert!(names.iter().any(|n| n == table), "missing {table}: {names:?}");
    }
}

#[test]
fn foreign_keys_are_enforced() {
    let conn = open_memory().unwrap();
    let enabled: bool = conn
        .pragma_query_value(None, "foreign_keys", |row| row.get(0))
        .unwrap();
    assert!(enabled);

    let orphan = conn.execute(
        "INSERT INTO movies (title, director_name, length_in_seconds) VALUES ('Ghost', 'Nobody', 60)",
        [],
    );
    assert!(orphan.is_err());
}

#[test]
fn file_catalog_keeps_rows_across_opens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");

    open_database(&path)
        .unwrap()
        .execute(
            "INSERT INTO people (name, nationality) VALUES ('Agnes Varda', 'French')",
            [],
        )
        .unwrap();

    let conn = open_database(&path).unwrap();
    let nationality: String = conn
        .query_row(
            "SELECT nationality FROM people WHERE name = 'Agnes Varda'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(nationality, "French");
    assert_eq!(recorded_versions(&conn), vec![CURRENT_VERSION]);

    // REGEXP is registered on reopened connections too
    let matched: bool = conn
        .query_row("SELECT 'Agnes Varda' REGEXP 'Var'", [], |row| row.get(0))
        .unwrap();
    assert!(matched);
}

#[test]
fn catalog_from_a_newer_build_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");

    open_database(&path)
        .unwrap()
        .execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_VERSION + 1],
        )
        .unwrap();

    match open_database(&path) {
        Err(SchemaError::VersionMismatch { expected, found }) => {
            assert_eq!(expected, CURRENT_VERSION);
            assert_eq!(found, CURRENT_VERSION + 1);
        }
        other => panic!("expected version mismatch, got {:?}", other.map(|_| ())),
    }
}
