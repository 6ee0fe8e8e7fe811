use scabbard_cli::run;

struct Output {
    code: i32,
    stdout: String,
    stderr: String,
}

fn run_cli(args: &[&str]) -> Output {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["scabbard"];
    argv.extend_from_slice(args);
    let code = run(argv, &mut out, &mut err);
    Output {
        code,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
    }
}

fn players_in(line: &str) -> Vec<String> {
    let (_, players) = line.split_once(": ").unwrap();
    if players.is_empty() {
        return Vec::new();
    }
    players.split(", ").map(str::to_string).collect()
}

#[test]
fn teams_defaults_to_whole_roster_in_two_groups() {
    let output = run_cli(&["teams", "--seed", "4"]);
    assert_eq!(output.code, 0, "stderr: {}", output.stderr);

    let lines: Vec<&str> = output.stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Group A: "));
    assert!(lines[1].starts_with("Group B: "));
    assert_eq!(players_in(lines[0]).len(), 5);
    assert_eq!(players_in(lines[1]).len(), 4);

    let mut all: Vec<String> = lines.iter().flat_map(|line| players_in(line)).collect();
    all.sort();
    let mut expected: Vec<String> = (1..=9).map(|idx| idx.to_string()).collect();
    expected.sort();
    assert_eq!(all, expected);
}

#[test]
fn same_seed_prints_same_groups() {
    let args = ["teams", "--players", "a b c d e f g", "--groups", "3", "--seed", "17"];
    let first = run_cli(&args);
    let second = run_cli(&args);
    assert_eq!(first.code, 0);
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stdout.lines().count(), 3);
}

#[test]
fn select_limits_players_and_labels_map_to_counts() {
    let output = run_cli(&[
        "teams", "--players", "a,b,c,d,e,f", "--select", "a;b;c;d", "--groups", "四分类",
        "--seed", "1",
    ]);
    assert_eq!(output.code, 0, "stderr: {}", output.stderr);
    let sizes: Vec<usize> = output
        .stdout
        .lines()
        .map(|line| players_in(line).len())
        .collect();
    assert_eq!(sizes, vec![1, 1, 1, 1]);
}

#[test]
fn unsupported_group_count_falls_back_to_two() {
    let output = run_cli(&["teams", "--groups", "9", "--seed", "2"]);
    assert_eq!(output.code, 0);
    assert_eq!(output.stdout.lines().count(), 2);
}

#[test]
fn json_output_has_count_and_labelled_groups() {
    let output = run_cli(&["teams", "--groups", "3", "--seed", "8", "--json"]);
    assert_eq!(output.code, 0, "stderr: {}", output.stderr);

    let value: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(value["group_count"], serde_json::json!(3));
    let groups = value["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 3);
    let labels: Vec<&str> = groups
        .iter()
        .map(|group| group["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["A", "B", "C"]);
    for group in groups {
        assert_eq!(group["players"].as_array().unwrap().len(), 3);
    }
}

#[test]
fn empty_selection_exits_non_zero() {
    let output = run_cli(&["teams", "--select", ""]);
    assert_ne!(output.code, 0);
    assert!(output.stdout.is_empty());
    assert!(output
        .stderr
        .contains("Select players before allocating teams"));
}

#[test]
fn unknown_selection_exits_non_zero() {
    let output = run_cli(&["teams", "--players", "ann,bob", "--select", "ann,zed"]);
    assert_ne!(output.code, 0);
    assert!(output.stderr.contains("zed"));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let output = run_cli(&[]);
    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("Usage"));
}
