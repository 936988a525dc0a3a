//! Test harness driving the real `App` through a ratatui `TestBackend`.

use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use vitae::app::{App, AppOutcome};
use vitae::view::theme::Theme;

pub struct FormTestHarness {
    terminal: Terminal<TestBackend>,
    app: App,
}

impl FormTestHarness {
    /// Start without a backing file (one blank project).
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Self::with_file(None, width, height)
    }

    /// Start against a file path (loaded when it exists).
    pub fn with_file(path: Option<PathBuf>, width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend)?;
        let app = App::load(path, Theme::dark())?;
        let mut harness = Self { terminal, app };
        harness.render()?;
        Ok(harness)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn render(&mut self) -> Result<()> {
        let app = &mut self.app;
        self.terminal.draw(|frame| app.render(frame))?;
        Ok(())
    }

    /// Send one key press and re-render.
    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<AppOutcome> {
        let outcome = self
            .app
            .handle_event(Event::Key(KeyEvent::new(code, modifiers)));
        self.render()?;
        Ok(outcome)
    }

    /// Type a string one character at a time.
    pub fn type_text(&mut self, text: &str) -> Result<()> {
        for c in text.chars() {
            self.send_key(KeyCode::Char(c), KeyModifiers::NONE)?;
        }
        Ok(())
    }

    /// Left-click a screen position and re-render.
    pub fn click(&mut self, x: u16, y: u16) -> Result<()> {
        self.app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }));
        self.render()?;
        Ok(())
    }

    /// The rendered screen as one newline-separated string.
    pub fn screen_to_string(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    /// Screen position of the first occurrence of `needle`, for clicking on
    /// rendered affordances.
    pub fn find(&self, needle: &str) -> Option<(u16, u16)> {
        for (y, line) in self.screen_to_string().lines().enumerate() {
            if let Some(byte_x) = line.find(needle) {
                let x = line[..byte_x].chars().count();
                return Some((x as u16, y as u16));
            }
        }
        None
    }

    /// Click the first occurrence of `needle` on screen.
    pub fn click_on(&mut self, needle: &str) -> Result<()> {
        let (x, y) = self
            .find(needle)
            .unwrap_or_else(|| panic!("'{}' not found on screen", needle));
        self.click(x, y)
    }

    pub fn assert_screen_contains(&self, needle: &str) {
        assert!(
            self.screen_to_string().contains(needle),
            "expected screen to contain '{}', got:\n{}",
            needle,
            self.screen_to_string()
        );
    }

    pub fn assert_screen_not_contains(&self, needle: &str) {
        assert!(
            !self.screen_to_string().contains(needle),
            "expected screen to not contain '{}', got:\n{}",
            needle,
            self.screen_to_string()
        );
    }
}
