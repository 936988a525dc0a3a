//! Application shell: the external owner of the project list.
//!
//! The form never holds project data; this struct does. Every frame it lends
//! the current list to the form, and whenever the form reports a replacement
//! list it swaps it in before the next event is processed, so edits are
//! serialized through a single owner. It also handles the outer concerns the
//! form deliberately has none of: the backing JSON file, the status line, and
//! quitting.

use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ids::{CounterIds, IdSource};
use crate::projects::{self, Project};
use crate::view::projects_form::{render_projects_form, ProjectsFormState};
use crate::view::theme::Theme;

/// What the event loop should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppOutcome {
    Continue,
    Quit,
}

pub struct App {
    projects: Vec<Project>,
    form: ProjectsFormState,
    ids: CounterIds,
    theme: Theme,
    path: Option<PathBuf>,
    dirty: bool,
    status: Option<String>,
}

impl App {
    /// Open the given file, or start with a single blank project when there is
    /// no file (or it does not exist yet).
    pub fn load(path: Option<PathBuf>, theme: Theme) -> Result<Self> {
        let mut projects = match &path {
            Some(p) if p.exists() => {
                let content = std::fs::read_to_string(p)
                    .with_context(|| format!("failed to read {}", p.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("{} is not a valid project list", p.display()))?
            }
            _ => Vec::new(),
        };
        projects::normalize(&mut projects);

        let mut ids = CounterIds::seeded_past(&projects);
        if projects.is_empty() {
            projects.push(Project::new(ids.next_id()));
        }

        tracing::info!(count = projects.len(), "loaded project list");
        Ok(Self {
            projects,
            form: ProjectsFormState::new(),
            ids,
            theme,
            path,
            dirty: false,
            status: None,
        })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Route one terminal event.
    pub fn handle_event(&mut self, event: Event) -> AppOutcome {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => {
                if let Some(next) = self.form.handle_mouse(mouse, &self.projects, &mut self.ids) {
                    self.apply(next);
                }
                AppOutcome::Continue
            }
            _ => AppOutcome::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> AppOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') => return AppOutcome::Quit,
                KeyCode::Char('s') => {
                    self.save();
                    return AppOutcome::Continue;
                }
                _ => {}
            }
        }

        if let Some(next) = self.form.handle_key(key, &self.projects, &mut self.ids) {
            self.apply(next);
        }
        AppOutcome::Continue
    }

    /// Accept a replacement list reported by the form.
    fn apply(&mut self, next: Vec<Project>) {
        self.projects = next;
        self.dirty = true;
        self.status = None;
    }

    fn save(&mut self) {
        let Some(path) = &self.path else {
            self.status = Some("no file to save to (start with: vitae FILE)".to_string());
            return;
        };
        match serde_json::to_string_pretty(&self.projects)
            .map_err(anyhow::Error::from)
            .and_then(|json| std::fs::write(path, json).map_err(anyhow::Error::from))
        {
            Ok(()) => {
                self.dirty = false;
                self.status = Some(format!("saved {}", path.display()));
                tracing::info!(path = %path.display(), "saved project list");
            }
            Err(e) => {
                self.status = Some(format!("save failed: {}", e));
                tracing::error!(error = %e, "save failed");
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let [main, status] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        render_projects_form(frame, main, &self.projects, &mut self.form, &self.theme);
        self.render_status_line(frame, status);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let left = match (&self.status, &self.path) {
            (Some(message), _) => message.clone(),
            (None, Some(path)) if self.dirty => format!("{} \u{2022} modified", path.display()),
            (None, Some(path)) => path.display().to_string(),
            (None, None) if self.dirty => "(no file) \u{2022} modified".to_string(),
            (None, None) => "(no file)".to_string(),
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                left,
                Style::default().fg(self.theme.muted_fg),
            ))),
            area,
        );

        let hints = "Tab next \u{2022} Enter activate \u{2022} ^S save \u{2022} ^Q quit";
        let width = hints.chars().count() as u16;
        if area.width > width {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    hints,
                    Style::default().fg(self.theme.muted_fg),
                ))),
                Rect::new(area.x + area.width - width, area.y, width, 1),
            );
        }
    }
}
