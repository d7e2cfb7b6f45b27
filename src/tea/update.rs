/// Update function for TEA pattern
///
/// Every state change happens here. Side effects (timers, follow-up
/// messages) are returned as commands.
use crate::events::EventHandler;
use crate::tea::message::{MenuMessage, Screen, SystemMessage, TerminalMessage, UIMessage};
use crate::tea::model::TerminalView;
use crate::tea::{Command, Message, Model, UpdateResult};
use crate::terminal::SubmitOutcome;
use tokio::time::Instant;

/// Rows moved by one scroll step
const SCROLL_STEP: usize = 3;

/// Main update function that processes messages and returns updated model with commands
pub fn update(model: Model, message: Message) -> UpdateResult<Model> {
    match message {
        Message::System(msg) => update_system(model, msg),
        Message::UI(msg) => update_ui(model, msg),
        Message::Terminal(msg) => update_terminal(model, msg),
        Message::Menu(msg) => update_menu(model, msg),
    }
}

/// Handle system messages
fn update_system(mut model: Model, message: SystemMessage) -> UpdateResult<Model> {
    match message {
        SystemMessage::Quit => {
            unmount_terminal(&mut model);
            model.app_state.should_quit = true;
            UpdateResult::with_command(model, Command::CancelTimers)
        }

        SystemMessage::Resize(width, height) => {
            model.app_state.terminal_size = (width, height);
            UpdateResult::just_model(model)
        }

        SystemMessage::Tick => {
            model.app_state.last_tick = Instant::now();
            UpdateResult::just_model(model)
        }
    }
}

/// Handle UI messages
fn update_ui(mut model: Model, message: UIMessage) -> UpdateResult<Model> {
    match message {
        UIMessage::KeyPressed(key) => match EventHandler::map_key(key, &model) {
            Some(mapped) => update(model, mapped),
            None => UpdateResult::just_model(model),
        },

        UIMessage::Navigate(Screen::Terminal) => {
            unmount_terminal(&mut model);
            let view = TerminalView::mount(&model.config);
            let focus = Command::delay(
                model.config.timing.focus_delay(),
                Message::Terminal(TerminalMessage::FocusInput(view.session.id())),
            );
            model.terminal = Some(view);
            model.screen = Screen::Terminal;
            UpdateResult::new(model, vec![Command::CancelTimers, focus])
        }

        UIMessage::Navigate(Screen::Menu) => {
            unmount_terminal(&mut model);
            model.screen = Screen::Menu;
            UpdateResult::with_command(model, Command::CancelTimers)
        }
    }
}

fn unmount_terminal(model: &mut Model) {
    if let Some(mut view) = model.terminal.take() {
        view.session.unmount();
    }
}

/// Handle terminal messages
fn update_terminal(mut model: Model, message: TerminalMessage) -> UpdateResult<Model> {
    if message == TerminalMessage::Close {
        return UpdateResult::with_command(
            model,
            Command::message(Message::UI(UIMessage::Navigate(Screen::Menu))),
        );
    }

    let clear_delay = model.config.timing.clear_delay();
    let Some(view) = model.terminal.as_mut() else {
        tracing::debug!(?message, "Terminal message without a mounted terminal");
        return UpdateResult::just_model(model);
    };

    let command = match message {
        TerminalMessage::InputChar(ch) => {
            if view.input_enabled() {
                view.session.insert_char(ch);
            }
            Command::None
        }

        TerminalMessage::Backspace => {
            if view.input_enabled() {
                view.session.backspace();
            }
            Command::None
        }

        TerminalMessage::Submit => {
            if !view.focused {
                return UpdateResult::just_model(model);
            }
            match view.session.submit() {
                SubmitOutcome::ClearScheduled => Command::delay(
                    clear_delay,
                    Message::Terminal(TerminalMessage::ClearTranscript(view.session.id())),
                ),
                SubmitOutcome::NavigateBack => {
                    Command::message(Message::UI(UIMessage::Navigate(Screen::Menu)))
                }
                SubmitOutcome::Busy => {
                    tracing::debug!("Submission dropped while output is typing");
                    Command::None
                }
                SubmitOutcome::Ignored | SubmitOutcome::Echoed | SubmitOutcome::Revealing => {
                    Command::None
                }
            }
        }

        TerminalMessage::RevealTick => {
            view.session.tick();
            Command::None
        }

        TerminalMessage::ClearTranscript(session_id) => {
            if session_id == view.session.id() {
                view.session.clear();
            }
            Command::None
        }

        TerminalMessage::FocusInput(session_id) => {
            if session_id == view.session.id() {
                view.focused = true;
            }
            Command::None
        }

        TerminalMessage::ScrollUp => {
            view.scroll.scroll_up(SCROLL_STEP);
            Command::None
        }

        TerminalMessage::ScrollDown => {
            view.scroll.scroll_down(SCROLL_STEP);
            Command::None
        }

        TerminalMessage::ScrollTop => {
            view.scroll.scroll_to_top();
            Command::None
        }

        TerminalMessage::Close => Command::None,
    };

    UpdateResult::with_command(model, command)
}

/// Handle menu messages
fn update_menu(mut model: Model, message: MenuMessage) -> UpdateResult<Model> {
    match message {
        MenuMessage::Next => {
            model.menu.next();
            UpdateResult::just_model(model)
        }

        MenuMessage::Previous => {
            model.menu.previous();
            UpdateResult::just_model(model)
        }

        MenuMessage::Select(index) => {
            if index < model.menu.items.len() {
                model.menu.selected = index;
            }
            UpdateResult::just_model(model)
        }

        MenuMessage::Activate => {
            let section = model
                .menu
                .selected_item()
                .and_then(|item| item.id.clone());

            let UpdateResult {
                mut model,
                commands,
            } = update_ui(model, UIMessage::Navigate(Screen::Terminal));

            // Sections open the terminal with their command already running
            if let (Some(section), Some(view)) = (section, model.terminal.as_mut()) {
                view.session.submit_line(&section);
            }
            UpdateResult::new(model, commands)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::LineKind;

    fn mounted() -> Model {
        let mut model = update(
            Model::default(),
            Message::UI(UIMessage::Navigate(Screen::Terminal)),
        )
        .model;
        let id = model.terminal.as_ref().unwrap().session.id();
        model = update(model, Message::Terminal(TerminalMessage::FocusInput(id))).model;
        model
    }

    fn type_line(mut model: Model, text: &str) -> Model {
        for ch in text.chars() {
            model = update(model, Message::Terminal(TerminalMessage::InputChar(ch))).model;
        }
        model
    }

    #[test]
    fn test_navigate_mounts_and_schedules_focus() {
        let result = update(
            Model::default(),
            Message::UI(UIMessage::Navigate(Screen::Terminal)),
        );
        let view = result.model.terminal.as_ref().unwrap();
        assert!(!view.focused);
        assert_eq!(view.session.lines().len(), 1);
        assert_eq!(result.model.screen, Screen::Terminal);
        assert!(result.commands.iter().any(|cmd| matches!(
            cmd,
            Command::Delay { message: Message::Terminal(TerminalMessage::FocusInput(id)), .. }
                if *id == view.session.id()
        )));
    }

    #[test]
    fn test_keys_ignored_before_focus() {
        let model = update(
            Model::default(),
            Message::UI(UIMessage::Navigate(Screen::Terminal)),
        )
        .model;
        let model = type_line(model, "about");
        assert_eq!(model.terminal.unwrap().session.input(), "");
    }

    #[test]
    fn test_clear_is_deferred() {
        let model = type_line(mounted(), "clear");
        let result = update(model, Message::Terminal(TerminalMessage::Submit));
        let id = result.model.terminal.as_ref().unwrap().session.id();
        assert_eq!(result.model.terminal.as_ref().unwrap().session.lines().len(), 2);
        assert_eq!(
            result.commands,
            vec![Command::delay(
                result.model.config.timing.clear_delay(),
                Message::Terminal(TerminalMessage::ClearTranscript(id)),
            )]
        );

        let model = update(
            result.model,
            Message::Terminal(TerminalMessage::ClearTranscript(id)),
        )
        .model;
        assert!(model.terminal.unwrap().session.lines().is_empty());
    }

    #[test]
    fn test_input_disabled_while_typing() {
        let model = type_line(mounted(), "about");
        let model = update(model, Message::Terminal(TerminalMessage::Submit)).model;
        assert!(model.is_typing());

        let mut model = type_line(model, "skills");
        assert_eq!(model.terminal.as_ref().unwrap().session.input(), "");

        while model.is_typing() {
            model = update(model, Message::Terminal(TerminalMessage::RevealTick)).model;
        }
        let lines = model.terminal.unwrap().session.lines().to_vec();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].kind, LineKind::Output);
    }

    #[test]
    fn test_back_returns_to_menu() {
        let model = type_line(mounted(), "back");
        let result = update(model, Message::Terminal(TerminalMessage::Submit));
        assert_eq!(
            result.commands,
            vec![Command::message(Message::UI(UIMessage::Navigate(Screen::Menu)))]
        );

        let result = update(result.model, Message::UI(UIMessage::Navigate(Screen::Menu)));
        assert!(result.model.terminal.is_none());
        assert_eq!(result.model.screen, Screen::Menu);
        assert_eq!(result.commands, vec![Command::CancelTimers]);
    }

    #[test]
    fn test_stale_deferred_messages_are_ignored() {
        let model = mounted();
        let old_id = model.terminal.as_ref().unwrap().session.id();
        let model = update(model, Message::UI(UIMessage::Navigate(Screen::Terminal))).model;

        let model = update(
            model,
            Message::Terminal(TerminalMessage::ClearTranscript(old_id)),
        )
        .model;
        let model = update(model, Message::Terminal(TerminalMessage::FocusInput(old_id))).model;
        let view = model.terminal.unwrap();
        assert_eq!(view.session.lines().len(), 1);
        assert!(!view.focused);
    }

    #[test]
    fn test_menu_activate_runs_section() {
        let model = update(Model::default(), Message::Menu(MenuMessage::Next)).model;
        let result = update(model, Message::Menu(MenuMessage::Activate));
        let view = result.model.terminal.as_ref().unwrap();
        assert!(view.session.is_typing());
        assert_eq!(view.session.lines()[1].content, "C:\\Users\\james> skills");
    }

    #[test]
    fn test_quit_unmounts() {
        let result = update(mounted(), Message::System(SystemMessage::Quit));
        assert!(result.model.app_state.should_quit);
        assert!(result.model.terminal.is_none());
    }
}
