use std::io;
use std::time::Duration;

use async_trait::async_trait;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use ts_scaffold::{Error, Prompter, Question, Result};

use crate::app::{App, Outcome};
use crate::ui::draw;

enum AppEvent {
    Key(event::KeyEvent),
    Error(String),
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode().map_err(Error::Terminal)?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(Error::Terminal)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(Error::Terminal)?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<io::Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Full-screen prompt provider. The terminal is taken over for one question
/// at a time and restored in between, so log output stays readable.
pub struct TerminalPrompter;

impl TerminalPrompter {
    async fn run(&self, mut app: App) -> Result<App> {
        let mut session = TerminalSession::new()?;
        let (tx, mut rx) = mpsc::channel(100);

        // Reader thread stops once the form is done and the receiver is gone.
        let reader = tokio::task::spawn_blocking(move || {
            while !tx.is_closed() {
                match event::poll(Duration::from_millis(100)) {
                    Ok(false) => {}
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx.blocking_send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(err) => {
                            let _ = tx.blocking_send(AppEvent::Error(err.to_string()));
                            break;
                        }
                    },
                    Err(err) => {
                        let _ = tx.blocking_send(AppEvent::Error(err.to_string()));
                        break;
                    }
                }
            }
        });

        let result = loop {
            if let Err(e) = session.terminal_mut().draw(|f| draw(f, &app)) {
                break Err(Error::Terminal(e));
            }
            if app.is_done() {
                break Ok(());
            }

            match rx.recv().await {
                Some(AppEvent::Key(key)) => app.handle_key(key),
                Some(AppEvent::Error(e)) => break Err(Error::Terminal(io::Error::other(e))),
                None => break Err(Error::Terminal(io::Error::other("input closed"))),
            }
        };

        drop(rx);
        let _ = reader.await;
        drop(session);

        result?;
        match app.outcome {
            Outcome::Cancelled => Err(Error::Cancelled),
            _ => Ok(app),
        }
    }
}

#[async_trait]
impl Prompter for TerminalPrompter {
    async fn ask(&mut self, question: &Question) -> Result<String> {
        let app = self.run(App::ask(question)).await?;
        Ok(app.answer())
    }

    async fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let app = self.run(App::confirm(message, default)).await?;
        Ok(app.confirmed())
    }
}
