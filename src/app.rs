use anyhow::Result;
use crossterm::{event, tty::IsTty};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::events::EventHandler;
use crate::tea::message::{Screen, SystemMessage, TerminalMessage, UIMessage};
use crate::tea::{update, CommandExecutor, Message, Model, UpdateResult};
use crate::tui::TerminalGuard;

pub struct App {
    model: Model,
    executor: CommandExecutor,
    receiver: mpsc::UnboundedReceiver<Message>,
    tick_rate: Duration,
    last_tick: Instant,
    last_reveal: Instant,
}

impl App {
    /// Create the application and open the starting screen
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: AppConfig, start: Screen) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let now = Instant::now();
        let mut app = Self {
            model: Model::new(config),
            executor: CommandExecutor::new(sender),
            receiver,
            tick_rate: Duration::from_millis(50),
            last_tick: now,
            last_reveal: now,
        };
        app.dispatch(Message::UI(UIMessage::Navigate(start)));
        app
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Run one message through `update` and execute the resulting commands
    pub fn dispatch(&mut self, message: Message) {
        let model = std::mem::take(&mut self.model);
        let UpdateResult { model, commands } = update(model, message);
        self.model = model;
        self.executor.execute_all(commands);
    }

    /// Apply every message that is already waiting (expired timers, follow-ups)
    pub fn drain_messages(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(message) = self.receiver.try_recv() {
            self.dispatch(message);
            handled += 1;
        }
        handled
    }

    /// Wait for the next queued message and apply it
    pub async fn next_message(&mut self) -> Option<Message> {
        let message = self.receiver.recv().await?;
        self.dispatch(message.clone());
        Some(message)
    }

    fn reveal_interval(&self) -> Duration {
        self.model.config.timing.reveal_interval()
    }

    /// Issue a reveal tick if one is due
    fn advance_reveal(&mut self) {
        if !self.model.is_typing() {
            self.last_reveal = Instant::now();
            return;
        }
        if self.last_reveal.elapsed() >= self.reveal_interval() {
            self.last_reveal = Instant::now();
            self.dispatch(Message::Terminal(TerminalMessage::RevealTick));
        }
    }

    fn poll_timeout(&self) -> Duration {
        let until_tick = self
            .tick_rate
            .checked_sub(self.last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));
        if self.model.is_typing() {
            let until_reveal = self
                .reveal_interval()
                .checked_sub(self.last_reveal.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));
            until_tick.min(until_reveal)
        } else {
            until_tick
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Check if we're running in a proper terminal
        if !io::stdout().is_tty() {
            return Err(anyhow::anyhow!(
                "folioterm requires a proper terminal (TTY) to run. Use `folioterm exec` for scripted output."
            ));
        }

        let mut guard = TerminalGuard::new().map_err(|e| {
            anyhow::anyhow!(
                "Failed to setup terminal: {}. Make sure you're running in a proper terminal.",
                e
            )
        })?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal =
            Terminal::new(backend).map_err(|e| anyhow::anyhow!("Failed to create terminal: {}", e))?;
        if let Ok(size) = terminal.size() {
            self.dispatch(Message::System(SystemMessage::Resize(size.width, size.height)));
        }

        let result = self.run_loop(&mut terminal).await;

        // Pending timers must not fire into a torn-down view
        self.executor.execute(crate::tea::Command::CancelTimers);
        guard.restore()?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            // Let spawned timers run on single-threaded runtimes too
            tokio::task::yield_now().await;
            self.drain_messages();
            self.advance_reveal();

            terminal.draw(|f| crate::ui::render(f, &mut self.model))?;

            if event::poll(self.poll_timeout())? {
                if let Some(message) = EventHandler::handle_event(event::read()?) {
                    self.dispatch(message);
                }
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                self.last_tick = Instant::now();
                self.dispatch(Message::System(SystemMessage::Tick));
            }

            if self.model.app_state.should_quit {
                tracing::info!("Quitting");
                break;
            }
        }

        Ok(())
    }
}
