//! Project records and the pure list operations behind the projects form.
//!
//! The form never owns the project list. Every edit is expressed as a pure
//! transform from the current list to a brand-new one: untouched projects are
//! cloned, the input slice is never mutated, and the caller (the external owner of
//! the list) swaps in whatever these functions return. Lookups that miss degrade to
//! silent no-ops returning a structurally equal list; the UI only ever asks about
//! ids it just rendered, so there is nothing to report.
//!
//! The one guarded condition lives here rather than in the rendering layer: a
//! project's bullet list never drops below one entry, so the form always has a row
//! to edit.

use serde::{Deserialize, Serialize};

use crate::ids::IdSource;

/// One project entry in the resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Opaque unique identifier, assigned at creation, never reassigned.
    /// Used only for list-keying and lookup; carries no ordering semantics.
    pub id: String,
    /// Free-text project title.
    pub name: String,
    /// Free-text technology list, comma-separated by convention. Stored as a
    /// single string and never parsed.
    pub technologies: String,
    /// Free-text date range.
    pub duration: String,
    /// Ordered description bullets. Never empty: always at least one entry,
    /// possibly the empty string.
    pub bullets: Vec<String>,
}

impl Project {
    /// A blank project: empty scalars and a single empty bullet.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            technologies: String::new(),
            duration: String::new(),
            bullets: vec![String::new()],
        }
    }
}

/// The scalar (single-line) fields of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    Name,
    Technologies,
    Duration,
}

impl ScalarField {
    /// Label shown next to the input. All three are required at the
    /// presentation layer.
    pub fn label(self) -> &'static str {
        match self {
            ScalarField::Name => "Project Name",
            ScalarField::Technologies => "Technologies Used",
            ScalarField::Duration => "Duration",
        }
    }

    /// Placeholder shown while the field is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            ScalarField::Name => "AI Math Solver",
            ScalarField::Technologies => "React, Node.js, MongoDB, Express",
            ScalarField::Duration => "February 2025 - March 2025",
        }
    }
}

/// Append one blank project with a fresh id. Always succeeds.
pub fn add_project(projects: &[Project], ids: &mut dyn IdSource) -> Vec<Project> {
    let mut next: Vec<Project> = projects.to_vec();
    next.push(Project::new(ids.next_id()));
    next
}

/// Drop the project with the given id, preserving the relative order of the rest.
/// Unknown id: no-op. A one-element list is tolerated (the UI hides the affordance
/// at that cardinality, but the operation itself must not care).
pub fn remove_project(projects: &[Project], id: &str) -> Vec<Project> {
    projects.iter().filter(|p| p.id != id).cloned().collect()
}

/// Replace one scalar field of the matching project. Unknown id: no-op.
pub fn update_field(projects: &[Project], id: &str, field: ScalarField, value: &str) -> Vec<Project> {
    projects
        .iter()
        .map(|p| {
            if p.id == id {
                let mut p = p.clone();
                match field {
                    ScalarField::Name => p.name = value.to_string(),
                    ScalarField::Technologies => p.technologies = value.to_string(),
                    ScalarField::Duration => p.duration = value.to_string(),
                }
                p
            } else {
                p.clone()
            }
        })
        .collect()
}

/// Append an empty bullet to the matching project. Unknown id: no-op.
pub fn add_bullet(projects: &[Project], id: &str) -> Vec<Project> {
    projects
        .iter()
        .map(|p| {
            if p.id == id {
                let mut p = p.clone();
                p.bullets.push(String::new());
                p
            } else {
                p.clone()
            }
        })
        .collect()
}

/// Remove the bullet at `index` from the matching project.
///
/// Refuses (no-op) when the project has only one bullet: the never-empty invariant
/// is enforced at this boundary, not by callers. Out-of-range indices are also a
/// no-op. Unknown id: no-op.
pub fn remove_bullet(projects: &[Project], id: &str, index: usize) -> Vec<Project> {
    projects
        .iter()
        .map(|p| {
            if p.id == id && p.bullets.len() > 1 && index < p.bullets.len() {
                let mut p = p.clone();
                p.bullets.remove(index);
                p
            } else {
                p.clone()
            }
        })
        .collect()
}

/// Replace the bullet at `index` in the matching project. Unknown id or
/// out-of-range index: no-op.
pub fn update_bullet(projects: &[Project], id: &str, index: usize, value: &str) -> Vec<Project> {
    projects
        .iter()
        .map(|p| {
            if p.id == id && index < p.bullets.len() {
                let mut p = p.clone();
                p.bullets[index] = value.to_string();
                p
            } else {
                p.clone()
            }
        })
        .collect()
}

/// Repair data that arrived from outside this process.
///
/// Files written by other tools may contain projects with no bullets at all; give
/// each of those a single empty bullet so the never-empty invariant holds for
/// every in-process state.
pub fn normalize(projects: &mut [Project]) {
    for p in projects {
        if p.bullets.is_empty() {
            p.bullets.push(String::new());
        }
    }
}
