/// Command system for TEA pattern
///
/// Commands represent side effects produced by `update`. The executor runs
/// them on tokio and feeds resulting messages back to the update loop.
use crate::tea::Message;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

/// Command that can be executed to perform side effects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No operation - used when no side effects are needed
    None,

    /// Send a message back to the update loop
    SendMessage(Message),

    /// Batch multiple commands
    Batch(Vec<Command>),

    /// Send a message after a delay
    Delay { after: Duration, message: Message },

    /// Abort every pending delayed message
    CancelTimers,
}

/// Helper functions for creating common commands
impl Command {
    /// Create a no-op command
    pub fn none() -> Self {
        Command::None
    }

    /// Create a command to send a message
    pub fn message(msg: Message) -> Self {
        Command::SendMessage(msg)
    }

    /// Create a batch of commands
    pub fn batch(commands: Vec<Command>) -> Self {
        Command::Batch(commands)
    }

    /// Create a delayed message
    pub fn delay(after: Duration, message: Message) -> Self {
        Command::Delay { after, message }
    }
}

/// Command executor that processes commands on the tokio runtime
pub struct CommandExecutor {
    message_sender: mpsc::UnboundedSender<Message>,
    timers: Vec<JoinHandle<()>>,
}

impl CommandExecutor {
    /// Create a new command executor
    pub fn new(message_sender: mpsc::UnboundedSender<Message>) -> Self {
        Self {
            message_sender,
            timers: Vec::new(),
        }
    }

    /// Execute a command
    ///
    /// Must be called from within a tokio runtime.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::None => {
                // No operation
            }
            Command::SendMessage(message) => {
                if let Err(e) = self.message_sender.send(message) {
                    tracing::error!("Failed to send message: {}", e);
                }
            }
            Command::Batch(commands) => {
                for cmd in commands {
                    self.execute(cmd);
                }
            }
            Command::Delay { after, message } => {
                self.timers.retain(|handle| !handle.is_finished());
                let sender = self.message_sender.clone();
                self.timers.push(tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    if let Err(e) = sender.send(message) {
                        tracing::debug!("Delayed message dropped: {}", e);
                    }
                }));
            }
            Command::CancelTimers => {
                self.cancel_timers();
            }
        }
    }

    /// Execute several commands in order
    pub fn execute_all(&mut self, commands: Vec<Command>) {
        for command in commands {
            self.execute(command);
        }
    }

    /// Number of delayed messages still waiting
    pub fn pending_timers(&self) -> usize {
        self.timers.iter().filter(|handle| !handle.is_finished()).count()
    }

    fn cancel_timers(&mut self) {
        let pending = self.pending_timers();
        if pending > 0 {
            tracing::debug!(pending, "Cancelling pending timers");
        }
        for handle in self.timers.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for CommandExecutor {
    fn drop(&mut self) {
        self.cancel_timers();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tea::message::SystemMessage;

    #[tokio::test]
    async fn test_send_and_batch() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut executor = CommandExecutor::new(tx);

        executor.execute(Command::batch(vec![
            Command::none(),
            Command::message(Message::System(SystemMessage::Tick)),
            Command::message(Message::System(SystemMessage::Quit)),
        ]));

        assert_eq!(rx.recv().await, Some(Message::System(SystemMessage::Tick)));
        assert_eq!(rx.recv().await, Some(Message::System(SystemMessage::Quit)));
    }

    #[tokio::test]
    async fn test_delay_delivers_after_sleep() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut executor = CommandExecutor::new(tx);

        executor.execute(Command::delay(
            Duration::from_millis(10),
            Message::System(SystemMessage::Tick),
        ));
        assert!(rx.try_recv().is_err());

        let received = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap();
        assert_eq!(received, Some(Message::System(SystemMessage::Tick)));
    }

    #[tokio::test]
    async fn test_cancel_timers() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut executor = CommandExecutor::new(tx);

        executor.execute(Command::delay(
            Duration::from_millis(20),
            Message::System(SystemMessage::Quit),
        ));
        assert_eq!(executor.pending_timers(), 1);
        executor.execute(Command::CancelTimers);
        assert_eq!(executor.pending_timers(), 0);

        let received = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;
        assert!(received.is_err());
    }
}
