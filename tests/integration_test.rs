use std::ffi::OsStr;

#[test]
fn search_scenarios() {
    testcase("search", "words", ["--query-file=tests/inputs/queries.txt"]);
}

#[test]
fn match_policies() {
    testcase("terminal-policy", "words", ["-q", "tan", "-q", "tank", "-q", "tap"]);
    testcase("path-policy", "words", ["-q", "tan", "-q", "tank", "-q", "tap", "--match-policy=path"]);
}

#[test]
fn print_tree() {
    testcase("tree", "words", ["--quote"]);
    testcase("compact", "words", ["--compact", "--sort=count"]);
}

#[test]
fn split_and_trim_input() {
    testcase("split", "comma-separated", ["-d", ",", "--trim-input", "--compact", "--percent", "-q", "tan", "--tree"]);
}

#[test]
fn grapheme_symbols() {
    // "été" with decomposed accents, queried with a grave instead of an acute accent.
    let query = "e\u{300}t";
    testcase("chars-accents", "accents", ["-q", query]);
    testcase("graphemes-accents", "accents", ["-q", query, "--symbols=graphemes"]);
}

#[test]
fn min_threshold() {
    testcase("min-count", "words", ["--min", "2"]);
    testcase("min-fraction", "words", ["--min", ".5"]);
}

#[test]
fn bar_and_percent() {
    testcase("bar", "words", ["--bar", "--percent", "--min=2"]);

    let output = run_wt(["--bar", "tests/inputs/words.txt"]);
    for line in output.lines() {
        // The tree is padded to 80 columns, followed by a 20 column bar.
        assert_eq!(line.chars().count(), 100, "{line:?}");
    }
}

#[test]
fn indent_with() {
    testcase("indent-with", "words", ["--indent-with=.", "--compact"]);
}

#[test]
fn trim_queries() {
    testcase("trimmed-queries", "words", ["--trim-input", "-q", " taco ", "--query-file=tests/inputs/padded-queries.txt"]);
    testcase("untrimmed-queries", "words", ["-q", " taco "]);
}

#[test]
fn output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("results.txt");

    let stdout = run_wt([
        OsStr::new("--out"),
        out.as_os_str(),
        OsStr::new("--query-file=tests/inputs/queries.txt"),
        OsStr::new("tests/inputs/words.txt"),
    ]);
    assert!(stdout.is_empty(), "stdout:\n{stdout}");

    let written = std::fs::read_to_string(&out).unwrap();
    assert_lines_eq(&written, "search");
}

#[test]
fn missing_input_file() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_wt"))
        .arg("tests/inputs/does-not-exist.txt")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not open file"), "stderr:\n{stderr}");
}

fn testcase<const N: usize>(name: &str, input: &str, options: [&str; N]) {
    let input = format!("tests/inputs/{input}.txt");
    let stdout = run_wt(options.iter().copied().chain([input.as_str()]));
    assert_lines_eq(&stdout, name);
}

/// Runs the binary with the given arguments, asserts success, and returns its stdout.
fn run_wt<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_wt"))
        .args(args)
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        output.status.success(),
        "\nstdout:\n{stdout}stderr:\n{stderr}"
    );
    stdout
}

fn assert_lines_eq(output: &str, name: &str) {
    let expected = std::fs::read_to_string(format!("tests/expected_outputs/{name}.txt")).unwrap();

    // Ignore line ending differences, i.e., LF vs CRLF.
    let mut output_lines = output.lines();
    let mut expected_lines = expected.lines();
    loop {
        let output_line = output_lines.next();
        let expected_line = expected_lines.next();
        match (output_line, expected_line) {
            (None, None) => break,
            (output_line, expected_line) => assert_eq!(
                output_line, expected_line,
                "\noutput:\n{output}\nexpected:\n{expected}"
            ),
        }
    }
}
