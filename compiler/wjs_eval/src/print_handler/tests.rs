use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_lines_end_with_newline() {
    let handler = buffer_handler();
    handler.write_line("hello world");
    handler.write_line("");
    assert_eq!(handler.output(), "hello world\n\n");
}

#[test]
fn output_does_not_drain() {
    let handler = buffer_handler();
    handler.write_line("a");
    assert_eq!(handler.output(), "a\n");
    assert_eq!(handler.output(), "a\n");
}

#[test]
fn take_output_resets_buffer() {
    let handler = buffer_handler();
    handler.write_line("first");
    assert_eq!(handler.take_output(), "first\n");
    handler.write_line("second");
    assert_eq!(handler.take_output(), "second\n");
    assert_eq!(handler.take_output(), "");
}

#[test]
fn stdout_and_silent_capture_nothing() {
    let stdout = stdout_handler();
    assert_eq!(stdout.output(), "");
    assert_eq!(stdout.take_output(), "");

    let silent = silent_handler();
    silent.write_line("dropped");
    assert_eq!(silent.output(), "");
}

#[test]
fn buffer_is_shared_across_threads() {
    let handler = buffer_handler();
    let other = Arc::clone(&handler);

    let worker = std::thread::spawn(move || {
        for _ in 0..50 {
            other.write_line("a");
        }
    });
    for _ in 0..50 {
        handler.write_line("b");
    }
    worker.join().unwrap();

    let output = handler.output();
    assert_eq!(output.lines().count(), 100);
    assert!(output.lines().all(|line| line == "a" || line == "b"));
}
