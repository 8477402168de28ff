//! Application state and main event loop.

use std::time::Duration;

use chatbot_core::{ChatConfig, InteractionController, ReplyState, Responder};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::backend::ChannelScheduler;
use crate::event::{BackendCommand, UiEvent};
use crate::render;

/// Lines moved by PageUp/PageDown.
const PAGE_SCROLL: usize = 10;

/// Main application with the conversation controller and channel handles.
pub struct App {
    /// Conversation log, draft and pending replies.
    controller: InteractionController<ChannelScheduler>,

    /// Lines scrolled back from the newest message (0 = follow).
    scroll_back: usize,

    /// Furthest the message list can scroll back, as of the last draw.
    max_scroll_back: usize,

    /// Receiver for events from the scheduler.
    ui_rx: mpsc::Receiver<UiEvent>,

    /// Sender for commands to the scheduler.
    cmd_tx: mpsc::Sender<BackendCommand>,
}

impl App {
    /// Create a new application instance with channel handles.
    pub fn new(
        config: &ChatConfig,
        responder: Responder,
        ui_rx: mpsc::Receiver<UiEvent>,
        cmd_tx: mpsc::Sender<BackendCommand>,
    ) -> Self {
        let scheduler = ChannelScheduler::new(cmd_tx.clone());
        Self {
            controller: InteractionController::new(config, responder, scheduler),
            scroll_back: 0,
            max_scroll_back: 0,
            ui_rx,
            cmd_tx,
        }
    }

    pub fn controller(&self) -> &InteractionController<ChannelScheduler> {
        &self.controller
    }

    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    /// Record how far the message list can scroll back at its current size.
    pub fn set_max_scroll_back(&mut self, max: usize) {
        self.max_scroll_back = max;
        self.scroll_back = self.scroll_back.min(max);
    }

    fn scroll_up(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_add(lines).min(self.max_scroll_back);
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
    }

    /// Footer status line.
    pub fn status_message(&self) -> String {
        match self.controller.reply_state() {
            ReplyState::Idle => format!("{} messages", self.controller.state().current_log().len()),
            ReplyState::AwaitingReply { pending: 1 } => "Bot is replying...".to_string(),
            ReplyState::AwaitingReply { pending } => format!("Bot is replying to {} messages...", pending),
        }
    }

    /// Run the main event loop.
    ///
    /// This runs on the main thread and handles:
    /// - Drawing the UI
    /// - Processing keyboard input
    /// - Appending replies whose delay has elapsed
    ///
    /// The scheduler is told to quit however the loop ends, including on a
    /// terminal I/O error.
    pub fn run(&mut self, mut terminal: DefaultTerminal) -> std::io::Result<()> {
        let result = self.event_loop(&mut terminal);

        info!(
            messages = self.controller.state().current_log().len(),
            pending = self.controller.pending_replies(),
            ok = result.is_ok(),
            "Chat session closed"
        );
        self.shutdown();

        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> std::io::Result<()> {
        loop {
            let mut max_scroll_back = 0;
            terminal.draw(|frame| max_scroll_back = render::render(frame, self))?;
            self.set_max_scroll_back(max_scroll_back);

            // Poll terminal events (non-blocking with short timeout)
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key) {
                        break; // quit requested
                    }
                }
            }

            self.process_events();
        }

        Ok(())
    }

    /// Send the quit command to the scheduler.
    pub fn shutdown(&self) {
        if self.cmd_tx.blocking_send(BackendCommand::Quit).is_err() {
            debug!("Scheduler already stopped");
        }
    }

    /// Apply every event the scheduler has sent so far.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.apply_event(event);
        }
    }

    /// Apply an event from the scheduler to the UI state.
    fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::ReplyDue(pending) => {
                let reply = self.controller.deliver_reply(pending);
                debug!(len = reply.text().len(), "Bot reply appended");
            }
        }
    }

    /// Handle a key press.
    ///
    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            // Quit
            KeyCode::Esc => return true,
            KeyCode::Char('c') if ctrl => return true,

            // Enter submits; Shift+Enter does nothing in a single-line input
            KeyCode::Enter => {
                if !key.modifiers.contains(KeyModifiers::SHIFT) && self.controller.submit().is_some() {
                    self.scroll_back = 0;
                }
            }

            // Draft editing
            KeyCode::Char(c) if !ctrl => self.controller.state_mut().draft_mut().insert_char(c),
            KeyCode::Backspace => self.controller.state_mut().draft_mut().backspace(),
            KeyCode::Delete => self.controller.state_mut().draft_mut().delete(),
            KeyCode::Left => self.controller.state_mut().draft_mut().move_left(),
            KeyCode::Right => self.controller.state_mut().draft_mut().move_right(),
            KeyCode::Home => self.controller.state_mut().draft_mut().move_home(),
            KeyCode::End => self.controller.state_mut().draft_mut().move_end(),

            // Message list scrolling
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(PAGE_SCROLL),
            KeyCode::PageDown => self.scroll_down(PAGE_SCROLL),

            _ => {}
        }
        false
    }
}
