//! Exit callback invoked after a fatal record is emitted

use std::sync::Arc;

/// Status code handed to the exit callback on a fatal log call
pub const FATAL_EXIT_CODE: i32 = 1;

/// Terminal effect run by fatal logging, receives the exit status
pub type ExitCallback = Arc<dyn Fn(i32) + Send + Sync>;

/// Terminates the process with the given status
pub fn process_exit() -> ExitCallback {
    Arc::new(|code| std::process::exit(code))
}

/// Does nothing; lets fatal logging return to the caller
pub fn noop_exit() -> ExitCallback {
    Arc::new(|_| {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI32, Ordering};

    #[test]
    fn test_noop_exit_returns() {
        let exit = noop_exit();
        exit(FATAL_EXIT_CODE);
    }

    #[test]
    fn test_custom_callback_receives_code() {
        let seen = Arc::new(AtomicI32::new(0));
        let seen_clone = Arc::clone(&seen);
        let exit: ExitCallback = Arc::new(move |code| seen_clone.store(code, Ordering::SeqCst));

        exit(FATAL_EXIT_CODE);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
