#![allow(dead_code)]

pub mod mock_buffer;

/// Route `log` output through the test harness; `RUST_LOG=selkit=debug` shows
/// why commands stopped early.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|s| s.to_string()).collect()
}
