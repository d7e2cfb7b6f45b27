//! Process-wide terminal environment
//!
//! Raw mode and the alternate screen are entered once when the TUI starts
//! and restored when the guard drops, including on early returns.

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;

/// Environment hooks entered on start and restored on exit
pub trait TerminalOps {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::SetCursorStyle::BlinkingBlock)?;
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        // Try every step even if one fails
        let mut first_err: Option<io::Error> = None;

        if let Err(err) = disable_raw_mode() {
            first_err.get_or_insert(err);
        }
        if let Err(err) = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            cursor::SetCursorStyle::DefaultUserShape,
            cursor::Show
        ) {
            first_err.get_or_insert(err);
        }

        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Restores the terminal environment exactly once
pub struct TerminalGuard {
    ops: Box<dyn TerminalOps>,
    restored: bool,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Box::new(CrosstermTerminalOps))
    }

    pub fn with_ops(ops: Box<dyn TerminalOps>) -> io::Result<Self> {
        ops.setup()?;
        Ok(Self {
            ops,
            restored: false,
        })
    }

    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        self.ops.restore()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!("Failed to restore terminal: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct CountingOps {
        setups: Arc<AtomicUsize>,
        restores: Arc<AtomicUsize>,
    }

    impl TerminalOps for CountingOps {
        fn setup(&self) -> io::Result<()> {
            self.setups.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn restore(&self) -> io::Result<()> {
            self.restores.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_restores_once() {
        let ops = CountingOps::default();
        let setups = ops.setups.clone();
        let restores = ops.restores.clone();

        {
            let mut guard = TerminalGuard::with_ops(Box::new(ops)).unwrap();
            assert_eq!(setups.load(Ordering::SeqCst), 1);
            guard.restore().unwrap();
        }
        assert_eq!(restores.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_restores() {
        let ops = CountingOps::default();
        let restores = ops.restores.clone();
        drop(TerminalGuard::with_ops(Box::new(ops)).unwrap());
        assert_eq!(restores.load(Ordering::SeqCst), 1);
    }
}
