//! Interactive terminal demo.
//!
//! The editor buffer is shown on top with the live preview below it.
//! Toolbar commands are bound to control keys; the link and explanation
//! dialogs become a one-line prompt.

use std::io::{self, Write};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::{cursor, execute, queue, terminal};
use editor::{EditorError, ExplanationDialog, LinkDialog};
use futures::StreamExt;

use crate::demo::Demo;
use crate::error::Result;
use crate::preview;

const HELP: &str = "^B bold  ^E italic  Enter break  ^K link  ^X explain  \
                    ^S save  ^R reset  ^L language  Esc quit";

enum Prompt {
    Link {
        dialog: LinkDialog,
        input: String,
    },
    Explanation {
        dialog: ExplanationDialog,
        input: String,
    },
}

/// Event-driven wrapper around a [`Demo`].
pub struct DemoApp {
    demo: Demo,
    prompt: Option<Prompt>,
    status: Option<String>,
    quit: bool,
}

impl DemoApp {
    pub fn new(demo: Demo) -> Self {
        Self {
            demo,
            prompt: None,
            status: None,
            quit: false,
        }
    }

    pub fn demo(&self) -> &Demo {
        &self.demo
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Message shown in the status line.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns true while a dialog prompt is open.
    pub fn is_prompting(&self) -> bool {
        self.prompt.is_some()
    }

    fn report(&mut self, error: EditorError) {
        match &error {
            EditorError::Store(e) => log::error!("store operation failed: {e}"),
            _ => log::debug!("editor action rejected: {error}"),
        }
        let message = match error.message_key() {
            Some(key) => self.demo.t(key),
            None => error.to_string(),
        };
        self.status = Some(message);
    }

    /// Handle one key press.
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.prompt.is_some() {
            return self.handle_prompt_key(key).await;
        }
        self.status = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => self.quit = true,
                KeyCode::Char('s') => {
                    self.demo.save();
                    self.status = Some(self.demo.t("demo.saved-content-title"));
                }
                KeyCode::Char('r') => self.demo.reset(),
                KeyCode::Char('l') => {
                    let language = self.demo.toggle_language();
                    self.status = Some(language.name().to_string());
                }
                KeyCode::Char('b') => self.demo.editor_mut().bold(),
                KeyCode::Char('e') => self.demo.editor_mut().italic(),
                KeyCode::Char('k') => match LinkDialog::open(self.demo.editor()) {
                    Ok(dialog) => {
                        self.prompt = Some(Prompt::Link {
                            dialog,
                            input: String::new(),
                        })
                    }
                    Err(e) => self.report(e),
                },
                KeyCode::Char('x') => {
                    match ExplanationDialog::open(self.demo.editor(), self.demo.store()).await {
                        Ok(dialog) => {
                            let input = dialog.existing().unwrap_or_default().to_string();
                            if dialog.is_edit() {
                                self.status = Some(self.demo.t("editor.existing-explanation"));
                            }
                            self.prompt = Some(Prompt::Explanation { dialog, input });
                        }
                        Err(e) => self.report(e),
                    }
                }
                _ => {}
            }
            return Ok(());
        }

        if key.code == KeyCode::Esc {
            self.quit = true;
        } else {
            self.demo.editor_mut().on_key_event(key);
        }
        Ok(())
    }

    async fn handle_prompt_key(&mut self, key: KeyEvent) -> Result<()> {
        let input = match &mut self.prompt {
            Some(Prompt::Link { input, .. } | Prompt::Explanation { input, .. }) => input,
            None => return Ok(()),
        };
        match key.code {
            KeyCode::Char(ch) => input.push(ch),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Esc => self.prompt = None,
            KeyCode::Enter => {
                let result = match self.prompt.take() {
                    Some(Prompt::Link { dialog, input }) => {
                        dialog.confirm(self.demo.editor_mut(), &input)
                    }
                    Some(Prompt::Explanation { dialog, input }) => {
                        dialog.confirm(self.demo.editor_mut(), &input).await
                    }
                    None => Ok(()),
                };
                if let Err(e) = result {
                    self.report(e);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Draw the whole screen.
    pub fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
            SetAttribute(Attribute::Bold),
            Print(self.demo.t("demo.title")),
            SetAttribute(Attribute::Reset),
            Print(format!(" [{}]\r\n", self.demo.store().language())),
            Print(self.demo.t("demo.description")),
            Print("\r\n\r\n")
        )?;

        self.draw_editor(out)?;

        let store = self.demo.store();
        let body = preview::to_ansi_string(&self.demo.preview(), store);
        queue!(out, Print("\r\n\r\n"), Print(raw_newlines(&body)))?;

        if let Some(saved) = self.demo.saved_preview() {
            let body = preview::to_ansi_string(&saved, store);
            queue!(
                out,
                Print("\r\n\r\n"),
                SetAttribute(Attribute::Bold),
                Print(self.demo.t("demo.saved-content-title")),
                SetAttribute(Attribute::Reset),
                Print("\r\n"),
                Print(raw_newlines(&body))
            )?;
        }

        queue!(out, Print("\r\n\r\n"))?;
        match &self.prompt {
            Some(Prompt::Link { dialog, input }) => {
                queue!(out, Print(format!("{} -> URL: {input}", dialog.selected_text())))?
            }
            Some(Prompt::Explanation { dialog, input }) => queue!(
                out,
                Print(format!("I18n-Key {}: {input}", dialog.key()))
            )?,
            None => queue!(out, SetAttribute(Attribute::Dim), Print(HELP))?,
        }
        queue!(out, SetAttribute(Attribute::Reset))?;
        if let Some(status) = &self.status {
            queue!(out, Print("\r\n"), Print(status))?;
        }
        out.flush()
    }

    fn draw_editor(&self, out: &mut impl Write) -> io::Result<()> {
        let editor = self.demo.editor();
        let value = editor.value();
        let mut selection = editor.selection();
        if selection.is_empty() {
            // Show the caret as the highlighted character under it.
            selection.end += value[selection.start..]
                .chars()
                .next()
                .filter(|&c| c != '\n')
                .map_or(0, char::len_utf8);
        }
        let highlighted = &value[selection.clone()];

        queue!(
            out,
            Print(raw_newlines(&value[..selection.start])),
            SetAttribute(Attribute::Reverse),
            Print(if highlighted.is_empty() {
                " ".to_string()
            } else {
                raw_newlines(highlighted)
            }),
            SetAttribute(Attribute::Reset),
            Print(raw_newlines(&value[selection.end..]))
        )?;
        if editor.has_unsaved_changes() {
            queue!(
                out,
                Print("\r\n"),
                SetAttribute(Attribute::Dim),
                Print(self.demo.t("editor.unsaved-changes")),
                SetAttribute(Attribute::Reset)
            )?;
        }
        Ok(())
    }

    /// Run the demo in the alternate screen until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.event_loop(&mut stdout).await;

        // Restore the terminal even when the loop failed.
        execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;

        result
    }

    async fn event_loop(&mut self, out: &mut impl Write) -> Result<()> {
        let mut events = EventStream::new();
        self.draw(out)?;

        while !self.should_quit() {
            match events.next().await {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key).await?;
                }
                Some(Ok(Event::Resize(..))) => {}
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(e.into()),
                None => break,
            }
            self.draw(out)?;
        }
        Ok(())
    }
}

/// Raw mode needs explicit carriage returns.
fn raw_newlines(text: &str) -> String {
    text.replace('\n', "\r\n")
}
