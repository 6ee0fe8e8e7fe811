use scabbard_cli::run;
use std::path::Path;

fn run_memo(db: &Path, args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let db_text = db.to_str().unwrap();
    let mut argv = vec!["scabbard", "memo", "--db", db_text];
    argv.extend_from_slice(args);
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn add_list_show_update_delete_against_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("memo.db");

    let (code, stdout, stderr) = run_memo(&db, &["add", "--title", "Groceries", "--content", "milk"]);
    assert_eq!(code, 0, "stderr: {stderr}");
    let id: i64 = stdout.trim().parse().unwrap();
    assert!(db.exists());

    let (code, stdout, _) = run_memo(&db, &["list"]);
    assert_eq!(code, 0);
    let fields: Vec<&str> = stdout.trim_end().split('\t').collect();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0], id.to_string());
    assert_eq!(fields[1].len(), 19);
    assert_eq!(fields[2], "Groceries");

    let id_text = id.to_string();
    let (code, stdout, _) = run_memo(&db, &["show", &id_text]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "Groceries\n\nmilk\n");

    let (code, _, stderr) = run_memo(
        &db,
        &["update", &id_text, "--title", "Groceries", "--content", "milk, eggs"],
    );
    assert_eq!(code, 0, "stderr: {stderr}");
    let (_, stdout, _) = run_memo(&db, &["show", &id_text]);
    assert_eq!(stdout, "Groceries\n\nmilk, eggs\n");

    let (code, _, _) = run_memo(&db, &["delete", &id_text]);
    assert_eq!(code, 0);
    let (code, stdout, _) = run_memo(&db, &["list"]);
    assert_eq!(code, 0);
    assert!(stdout.is_empty());

    let (code, _, stderr) = run_memo(&db, &["show", &id_text]);
    assert_ne!(code, 0);
    assert!(stderr.contains("memo not found"));
}

#[test]
fn list_json_is_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("memo.db");
    run_memo(&db, &["add", "--title", "first"]);
    run_memo(&db, &["add", "--title", "second"]);

    let (code, stdout, _) = run_memo(&db, &["list", "--json"]);
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let titles: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|memo| memo["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["second", "first"]);
}

#[test]
fn blank_memo_and_unknown_ids_exit_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("memo.db");

    let (code, _, stderr) = run_memo(&db, &["add"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("memo needs a title or content"));

    let (code, _, stderr) = run_memo(&db, &["delete", "41"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("memo not found: 41"));
}
