use super::*;
use pretty_assertions::assert_eq;

/// Helper: run the REPL over `input` and return everything it printed.
fn run(input: &[u8], config: &ReplConfig) -> String {
    let mut output = Vec::new();
    if let Err(err) = start(input, &mut output, config) {
        panic!("repl failed: {err}");
    }
    String::from_utf8_lossy(&output).into_owned()
}

#[test]
fn empty_input_prints_one_prompt() {
    assert_eq!(run(b"", &ReplConfig::default()), ">> ");
}

#[test]
fn prints_tokens_for_each_line() {
    let out = run(b"let x = 5;\n", &ReplConfig::default());
    assert_eq!(
        out,
        concat!(
            ">> ",
            "{kind: LET, literal: \"let\"}\n",
            "{kind: IDENT, literal: \"x\"}\n",
            "{kind: =, literal: \"=\"}\n",
            "{kind: INT, literal: \"5\"}\n",
            "{kind: ;, literal: \";\"}\n",
            "{kind: EOF, literal: \"\"}\n",
            ">> ",
        )
    );
}

#[test]
fn last_line_without_newline_is_scanned() {
    let out = run(b"a\nb", &ReplConfig::default());
    assert_eq!(
        out,
        concat!(
            ">> ",
            "{kind: IDENT, literal: \"a\"}\n",
            "{kind: EOF, literal: \"\"}\n",
            ">> ",
            "{kind: IDENT, literal: \"b\"}\n",
            "{kind: EOF, literal: \"\"}\n",
            ">> ",
        )
    );
}

#[test]
fn crlf_is_stripped() {
    let out = run(b"!=\r\n", &ReplConfig::default());
    assert_eq!(
        out,
        concat!(
            ">> ",
            "{kind: !=, literal: \"!=\"}\n",
            "{kind: EOF, literal: \"\"}\n",
            ">> ",
        )
    );
}

#[test]
fn invalid_byte_reports_and_continues() {
    let out = run(b"=\xFF\n1\n", &ReplConfig::default());
    assert_eq!(
        out,
        concat!(
            ">> ",
            "{kind: =, literal: \"=\"}\n",
            "lexer: invalid ASCII byte 0xFF at byte 1\n",
            ">> ",
            "{kind: INT, literal: \"1\"}\n",
            "{kind: EOF, literal: \"\"}\n",
            ">> ",
        )
    );
}

#[test]
fn illegal_characters_do_not_stop_the_line() {
    let out = run(b"\\+\n", &ReplConfig::default());
    assert_eq!(
        out,
        concat!(
            ">> ",
            "{kind: ILLEGAL, literal: \"\\\\\"}\n",
            "{kind: +, literal: \"+\"}\n",
            "{kind: EOF, literal: \"\"}\n",
            ">> ",
        )
    );
}

#[test]
fn greeting_and_custom_prompt() {
    let config = ReplConfig {
        prompt: "monkey> ".to_string(),
        greeting: Some(greeting(Some("ada"))),
    };
    let out = run(b"", &config);
    assert_eq!(
        out,
        "Hello ada! This is the Monkey programming language!\nmonkey> "
    );
}

#[test]
fn greeting_without_user() {
    assert_eq!(greeting(None), "Hello! This is the Monkey programming language!");
    assert_eq!(greeting(Some("")), "Hello! This is the Monkey programming language!");
}

#[test]
fn strip_line_ending_variants() {
    assert_eq!(strip_line_ending(b"abc\r\n"), b"abc");
    assert_eq!(strip_line_ending(b"abc\n"), b"abc");
    assert_eq!(strip_line_ending(b"abc"), b"abc");
    assert_eq!(strip_line_ending(b"\r\n"), b"");
}
