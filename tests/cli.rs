use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hyperheaders"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // usage errors exit before stdin is read, so the pipe may already be closed
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }
    child.wait_with_output().unwrap()
}

#[test]
fn normalizes_block_with_split() {
    let out = run(
        &["--split"],
        "accept-encoding: gzip, br\r\nset-cookie: a=1; Expires=Wed, 21 Oct 2015 07:28:00 GMT\r\nSet-Cookie: b=2\r\n",
    );
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Accept-Encoding: gzip, br\r\nSet-Cookie: a=1; Expires=Wed, 21 Oct 2015 07:28:00 GMT\r\nSet-Cookie: b=2\r\n"
    );
}

#[test]
fn status_line_exits_with_failure() {
    let out = run(&[], "HTTP/1.1 400 BAD REQUEST\r\nHost: example.com\r\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let out = run(&["--splt"], "Accept: a, b\n");
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}

#[test]
fn rules_file_extends_folded_headers() {
    let path = std::env::temp_dir().join(format!("hyperheaders-cli-{}.toml", std::process::id()));
    std::fs::write(&path, "folded_multi_names = [\"link\"]\n").unwrap();

    let out = run(&["--split", path.to_str().unwrap()], "Link: </a>, </b>\nLink: </c>\n");
    std::fs::remove_file(&path).unwrap();

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Link: </a>, </b>\r\nLink: </c>\r\n"
    );
}
