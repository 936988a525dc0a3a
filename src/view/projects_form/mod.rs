//! The projects form panel.
//!
//! Renders an editable list of project records and turns key/mouse events into
//! replacement lists. The panel owns no project data: it is handed the current
//! list on every call and reports each edit as a complete new list — the caller
//! applies it and renders again with the result. The only state kept here is
//! UI-local: focus, cursor column, scroll offset, hover, and the hit-test layout
//! cached from the last render.
//!
//! Keyboard model: Tab/Shift-Tab (or Down/Up outside text) walk the focus order,
//! Enter activates buttons and advances out of text fields, printable keys and
//! Backspace/Delete edit the focused field in place. Every edit reports exactly
//! one replacement list.

mod render;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::ids::IdSource;
use crate::projects::{
    add_bullet, add_project, remove_bullet, remove_project, update_bullet, update_field, Project,
    ScalarField,
};

pub use render::{render_projects_form, BulletHitArea, ProjectHitArea, ProjectsFormLayout};

/// One interactive element of the form. Doubles as the focus target and the
/// mouse hit-test result; identified by project id (stable across edits) plus a
/// bullet index where needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormTarget {
    /// The panel-level add button
    AddProject,
    /// A project's remove button (rendered only when more than one project exists)
    RemoveProject { id: String },
    /// One of a project's scalar field inputs
    Field { id: String, field: ScalarField },
    /// A project's add-description button
    AddBullet { id: String },
    /// One description text area
    Bullet { id: String, index: usize },
    /// A bullet's remove button (rendered only when the project has several)
    RemoveBullet { id: String, index: usize },
}

impl FormTarget {
    /// Whether this target is a text widget (receives character input).
    fn is_text(&self) -> bool {
        matches!(self, FormTarget::Field { .. } | FormTarget::Bullet { .. })
    }
}

/// Focus order for the current list: panel button first, then per project its
/// remove button, the three scalar fields, the add-description button, and each
/// bullet with its remove button. Policy-hidden buttons are skipped entirely.
pub fn focus_targets(projects: &[Project]) -> Vec<FormTarget> {
    let mut targets = vec![FormTarget::AddProject];
    for p in projects {
        if projects.len() > 1 {
            targets.push(FormTarget::RemoveProject { id: p.id.clone() });
        }
        for field in [ScalarField::Name, ScalarField::Duration, ScalarField::Technologies] {
            targets.push(FormTarget::Field { id: p.id.clone(), field });
        }
        targets.push(FormTarget::AddBullet { id: p.id.clone() });
        for index in 0..p.bullets.len() {
            targets.push(FormTarget::Bullet { id: p.id.clone(), index });
            if p.bullets.len() > 1 {
                targets.push(FormTarget::RemoveBullet { id: p.id.clone(), index });
            }
        }
    }
    targets
}

/// UI-local state of the projects form.
#[derive(Debug, Default)]
pub struct ProjectsFormState {
    /// Focused element, if any
    pub focus: Option<FormTarget>,
    /// Cursor column (in characters) within the focused text widget
    pub cursor: usize,
    /// Rows scrolled off the top of the card area
    pub scroll: u16,
    /// Current mouse position, for hover feedback
    pub hover: Option<(u16, u16)>,
    /// Hit-test layout cached from the last render
    pub last_layout: ProjectsFormLayout,
}

impl ProjectsFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key event against the current list.
    ///
    /// Returns the replacement list when the interaction edited something —
    /// the reporting channel; navigation returns `None`.
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        projects: &[Project],
        ids: &mut dyn IdSource,
    ) -> Option<Vec<Project>> {
        self.ensure_focus(projects);

        match key.code {
            KeyCode::Tab => {
                self.focus_next(projects);
                None
            }
            KeyCode::BackTab => {
                self.focus_prev(projects);
                None
            }
            KeyCode::Down => {
                self.focus_next(projects);
                None
            }
            KeyCode::Up => {
                self.focus_prev(projects);
                None
            }
            KeyCode::Enter => self.activate(projects, ids),
            KeyCode::Char(c) => self.edit_text(projects, |value, cursor| {
                let mut chars: Vec<char> = value.chars().collect();
                let at = cursor.min(chars.len());
                chars.insert(at, c);
                (chars.into_iter().collect(), at + 1)
            }),
            KeyCode::Backspace => self.edit_text(projects, |value, cursor| {
                let mut chars: Vec<char> = value.chars().collect();
                let at = cursor.min(chars.len());
                if at == 0 {
                    return (value.to_string(), 0);
                }
                chars.remove(at - 1);
                (chars.into_iter().collect(), at - 1)
            }),
            KeyCode::Delete => self.edit_text(projects, |value, cursor| {
                let mut chars: Vec<char> = value.chars().collect();
                let at = cursor.min(chars.len());
                if at < chars.len() {
                    chars.remove(at);
                }
                (chars.into_iter().collect(), at)
            }),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                let len = self.focused_value(projects).map_or(0, |v| v.chars().count());
                self.cursor = (self.cursor + 1).min(len);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = self.focused_value(projects).map_or(0, |v| v.chars().count());
                None
            }
            _ => None,
        }
    }

    /// Handle a mouse event against the layout cached from the last render.
    pub fn handle_mouse(
        &mut self,
        mouse: MouseEvent,
        projects: &[Project],
        ids: &mut dyn IdSource,
    ) -> Option<Vec<Project>> {
        match mouse.kind {
            MouseEventKind::Moved => {
                self.hover = Some((mouse.column, mouse.row));
                None
            }
            MouseEventKind::ScrollDown => {
                self.scroll_by(3);
                None
            }
            MouseEventKind::ScrollUp => {
                self.scroll_by(-3);
                None
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = self.last_layout.hit_test(mouse.column, mouse.row)?;
                if hit.is_text() {
                    let len = value_of(projects, &hit).map_or(0, |v| v.chars().count());
                    self.focus = Some(hit);
                    self.cursor = len;
                    None
                } else {
                    self.focus = Some(hit);
                    self.activate(projects, ids)
                }
            }
            _ => None,
        }
    }

    /// Apply the focused button, or advance past a text widget.
    fn activate(&mut self, projects: &[Project], ids: &mut dyn IdSource) -> Option<Vec<Project>> {
        let focus = self.focus.clone()?;
        let next = match &focus {
            FormTarget::AddProject => add_project(projects, ids),
            FormTarget::RemoveProject { id } => remove_project(projects, id),
            FormTarget::AddBullet { id } => add_bullet(projects, id),
            FormTarget::RemoveBullet { id, index } => remove_bullet(projects, id, *index),
            FormTarget::Field { .. } | FormTarget::Bullet { .. } => {
                self.focus_next(projects);
                return None;
            }
        };

        // Land somewhere useful after structural edits
        match focus {
            FormTarget::AddProject => {
                if let Some(p) = next.last() {
                    self.focus = Some(FormTarget::Field {
                        id: p.id.clone(),
                        field: ScalarField::Name,
                    });
                    self.cursor = 0;
                }
            }
            FormTarget::AddBullet { id } => {
                if let Some(p) = next.iter().find(|p| p.id == id) {
                    self.focus = Some(FormTarget::Bullet {
                        id,
                        index: p.bullets.len() - 1,
                    });
                    self.cursor = 0;
                }
            }
            _ => {}
        }

        self.reconcile(&next);
        Some(next)
    }

    /// Run an in-place edit of the focused text widget and report the
    /// replacement list.
    fn edit_text(
        &mut self,
        projects: &[Project],
        edit: impl FnOnce(&str, usize) -> (String, usize),
    ) -> Option<Vec<Project>> {
        let focus = self.focus.clone()?;
        let value = value_of(projects, &focus)?;
        let (new_value, new_cursor) = edit(value, self.cursor);
        if new_value == value {
            return None;
        }
        self.cursor = new_cursor;
        let next = match &focus {
            FormTarget::Field { id, field } => update_field(projects, id, *field, &new_value),
            FormTarget::Bullet { id, index } => update_bullet(projects, id, *index, &new_value),
            _ => return None,
        };
        Some(next)
    }

    /// Focus the first target if nothing is focused yet.
    fn ensure_focus(&mut self, projects: &[Project]) {
        if self.focus.is_none() {
            self.focus = focus_targets(projects).into_iter().next();
            self.cursor = 0;
        }
    }

    fn focus_next(&mut self, projects: &[Project]) {
        self.focus_step(projects, 1);
    }

    fn focus_prev(&mut self, projects: &[Project]) {
        self.focus_step(projects, -1);
    }

    fn focus_step(&mut self, projects: &[Project], step: isize) {
        let targets = focus_targets(projects);
        if targets.is_empty() {
            self.focus = None;
            return;
        }
        let current = self
            .focus
            .as_ref()
            .and_then(|f| targets.iter().position(|t| t == f));
        let next_index = match current {
            Some(i) => (i as isize + step).rem_euclid(targets.len() as isize) as usize,
            None => 0,
        };
        self.focus = Some(targets[next_index].clone());
        self.cursor = self
            .focused_value(projects)
            .map_or(0, |v| v.chars().count());
    }

    /// Repair focus and cursor after the list changed shape: clamp bullet
    /// indices, retarget policy-hidden buttons, fall back to the panel button
    /// when the focused project is gone.
    pub fn reconcile(&mut self, projects: &[Project]) {
        let focus = match self.focus.take() {
            Some(f) => f,
            None => return,
        };

        let project_of = |id: &str| projects.iter().find(|p| p.id == id);
        let repaired = match focus {
            FormTarget::AddProject => Some(FormTarget::AddProject),
            FormTarget::RemoveProject { id } => match project_of(&id) {
                Some(_) if projects.len() > 1 => Some(FormTarget::RemoveProject { id }),
                Some(_) => Some(FormTarget::Field { id, field: ScalarField::Name }),
                None => Some(FormTarget::AddProject),
            },
            FormTarget::Field { id, field } => match project_of(&id) {
                Some(_) => Some(FormTarget::Field { id, field }),
                None => Some(FormTarget::AddProject),
            },
            FormTarget::AddBullet { id } => match project_of(&id) {
                Some(_) => Some(FormTarget::AddBullet { id }),
                None => Some(FormTarget::AddProject),
            },
            FormTarget::Bullet { id, index } => match project_of(&id) {
                Some(p) => Some(FormTarget::Bullet {
                    id,
                    index: index.min(p.bullets.len() - 1),
                }),
                None => Some(FormTarget::AddProject),
            },
            FormTarget::RemoveBullet { id, index } => match project_of(&id) {
                Some(p) if p.bullets.len() > 1 => Some(FormTarget::RemoveBullet {
                    id,
                    index: index.min(p.bullets.len() - 1),
                }),
                Some(p) => Some(FormTarget::Bullet {
                    id,
                    index: index.min(p.bullets.len() - 1),
                }),
                None => Some(FormTarget::AddProject),
            },
        };

        self.focus = repaired;
        let len = self.focused_value(projects).map_or(0, |v| v.chars().count());
        self.cursor = self.cursor.min(len);
    }

    /// Value of the focused text widget, if the focus is on one.
    fn focused_value<'a>(&self, projects: &'a [Project]) -> Option<&'a str> {
        self.focus.as_ref().and_then(|f| value_of(projects, f))
    }

    fn scroll_by(&mut self, delta: i16) {
        let max = self
            .last_layout
            .content_height
            .saturating_sub(self.last_layout.viewport.height);
        self.scroll = (self.scroll as i32 + delta as i32).clamp(0, max as i32) as u16;
    }
}

/// Look up the text behind a target, if it is a text widget.
fn value_of<'a>(projects: &'a [Project], target: &FormTarget) -> Option<&'a str> {
    match target {
        FormTarget::Field { id, field } => {
            let p = projects.iter().find(|p| p.id == *id)?;
            Some(match field {
                ScalarField::Name => p.name.as_str(),
                ScalarField::Technologies => p.technologies.as_str(),
                ScalarField::Duration => p.duration.as_str(),
            })
        }
        FormTarget::Bullet { id, index } => {
            let p = projects.iter().find(|p| p.id == *id)?;
            p.bullets.get(*index).map(|b| b.as_str())
        }
        _ => None,
    }
}
