use scabbard_cli::run;

#[test]
fn no_file_logging_without_log_dir() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["scabbard", "teams", "--seed", "3"], &mut out, &mut err);
    assert_eq!(code, 0);
    assert!(scabbard_core::logging_status().is_none());
}
