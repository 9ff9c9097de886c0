use std::{
    io::Write,
    process::{Command, Stdio},
};

/// Feeds the script to the compiled binary on stdin and returns its stdout
fn run_session(script: &str) -> String {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bank-console"))
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();

    println!("{}", String::from_utf8_lossy(&output.stderr));

    assert!(output.status.success());

    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn console_session() {
    let script = [
        "nu",
        "12345678900",
        "Ana Lima",
        "10-02-1993",
        "Rua das Flores, 12 - Centro - Natal/RN",
        "nu",
        "98765432100",
        "Bruno Costa",
        "01-12-1980",
        "Av. Paulista, 1000 - Bela Vista - São Paulo/SP",
        "nc",
        "12345678900",
        "nc",
        "98765432100",
        "d",
        "12345678900",
        "100",
        "s",
        "12345678900",
        "600",
        "s",
        "12345678900",
        "50,5",
        "e",
        "12345678900",
        "lc",
        "q",
    ]
    .join("\n");

    let output = run_session(&format!("{script}\n"));

    assert!(output.contains("=== Account 1001 created successfully! ==="));
    assert!(output.contains("=== Account 1002 created successfully! ==="));
    assert!(output.contains("@@@ Withdrawal of R$ 600.00 exceeds the limit of R$ 500.00 @@@"));
    assert!(output.contains("Withdrawal:\tR$ 50.50"));
    assert!(output.contains("Balance:\tR$ 49.50"));
    assert!(output.contains("Holder:\t\tAna Lima"));
    assert!(output.contains("Holder:\t\tBruno Costa"));
    assert!(output.contains("=== Leaving the system... ==="));
}

#[test]
fn closed_input_exits_cleanly() {
    let output = run_session("nu\n111\n");

    assert!(output.contains("Full name: "));
    assert!(!output.contains("Client created successfully!"));
}
