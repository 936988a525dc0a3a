//! Projects form rendering.
//!
//! The panel is a bordered block with a fixed header row (title, project count,
//! add button) over a scrollable column of project cards. Rendering walks a list
//! of virtual rows so the scroll math and the focus-visibility math agree, and
//! returns every hit area through [`ProjectsFormLayout`], cached on the form
//! state for mouse dispatch.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::projects::{Project, ScalarField};
use crate::view::controls::text_area::{render_text_area, TextArea, TextAreaColors, TextAreaLayout};
use crate::view::controls::text_input::{
    render_text_input, TextInput, TextInputColors, TextInputLayout,
};
use crate::view::controls::{point_in_rect, FocusState};
use crate::view::theme::Theme;

use super::{FormTarget, ProjectsFormState};

/// Width reserved for field labels so the input boxes line up.
const LABEL_WIDTH: u16 = 17;
/// Rows per bullet text area.
const BULLET_ROWS: u16 = 2;

const ADD_PROJECT_LABEL: &str = "[+ Add Project]";
const ADD_BULLET_LABEL: &str = "[+ Add Description]";
const REMOVE_LABEL: &str = "[x]";
const BULLET_PLACEHOLDER: &str = "Describe project features, achievements, or technical details...";

/// Hit areas for one bullet row.
#[derive(Debug, Clone, Default)]
pub struct BulletHitArea {
    /// The text area
    pub text: TextAreaLayout,
    /// The remove button, when rendered
    pub remove_area: Option<Rect>,
}

/// Hit areas for one project card.
#[derive(Debug, Clone, Default)]
pub struct ProjectHitArea {
    /// The project this card renders
    pub id: String,
    /// The card's remove button, when rendered
    pub remove_area: Option<Rect>,
    /// Name input
    pub name_input: TextInputLayout,
    /// Duration input
    pub duration_input: TextInputLayout,
    /// Technologies input
    pub technologies_input: TextInputLayout,
    /// The add-description button
    pub add_bullet_area: Rect,
    /// One entry per bullet
    pub bullets: Vec<BulletHitArea>,
}

/// Layout information returned after rendering for hit testing and scrolling.
#[derive(Debug, Clone, Default)]
pub struct ProjectsFormLayout {
    /// The scrollable card area (below the header row)
    pub viewport: Rect,
    /// Total virtual rows of card content
    pub content_height: u16,
    /// The panel-level add button
    pub add_project_area: Rect,
    /// One entry per project
    pub projects: Vec<ProjectHitArea>,
}

impl ProjectsFormLayout {
    /// Find the interactive element at a point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<FormTarget> {
        if point_in_rect(self.add_project_area, x, y) {
            return Some(FormTarget::AddProject);
        }
        for card in &self.projects {
            if let Some(area) = card.remove_area {
                if point_in_rect(area, x, y) {
                    return Some(FormTarget::RemoveProject { id: card.id.clone() });
                }
            }
            if card.name_input.contains(x, y) {
                return Some(FormTarget::Field { id: card.id.clone(), field: ScalarField::Name });
            }
            if card.duration_input.contains(x, y) {
                return Some(FormTarget::Field {
                    id: card.id.clone(),
                    field: ScalarField::Duration,
                });
            }
            if card.technologies_input.contains(x, y) {
                return Some(FormTarget::Field {
                    id: card.id.clone(),
                    field: ScalarField::Technologies,
                });
            }
            if point_in_rect(card.add_bullet_area, x, y) {
                return Some(FormTarget::AddBullet { id: card.id.clone() });
            }
            for (index, bullet) in card.bullets.iter().enumerate() {
                if let Some(area) = bullet.remove_area {
                    if point_in_rect(area, x, y) {
                        return Some(FormTarget::RemoveBullet { id: card.id.clone(), index });
                    }
                }
                if bullet.text.contains(x, y) {
                    return Some(FormTarget::Bullet { id: card.id.clone(), index });
                }
            }
        }
        None
    }
}

/// One virtual row of card content. Heights are fixed per kind, so scroll
/// positions can be computed without rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    /// Card header with the project ordinal and remove button
    CardHeader(usize),
    /// A scalar field input
    Field(usize, ScalarField),
    /// The description section header with the add button
    DescHeader(usize),
    /// One bullet text area (project index, bullet index)
    Bullet(usize, usize),
    /// Blank row between cards
    Spacer,
}

impl RowKind {
    fn height(self) -> u16 {
        match self {
            RowKind::Bullet(_, _) => BULLET_ROWS,
            _ => 1,
        }
    }
}

fn virtual_rows(projects: &[Project]) -> Vec<RowKind> {
    let mut rows = Vec::new();
    for (i, p) in projects.iter().enumerate() {
        rows.push(RowKind::CardHeader(i));
        rows.push(RowKind::Field(i, ScalarField::Name));
        rows.push(RowKind::Field(i, ScalarField::Duration));
        rows.push(RowKind::Field(i, ScalarField::Technologies));
        rows.push(RowKind::DescHeader(i));
        for j in 0..p.bullets.len() {
            rows.push(RowKind::Bullet(i, j));
        }
        rows.push(RowKind::Spacer);
    }
    rows
}

/// Virtual position (top row, height) of the focus target, if it scrolls.
fn target_position(projects: &[Project], rows: &[RowKind], target: &FormTarget) -> Option<(u16, u16)> {
    let index_of = |id: &str| projects.iter().position(|p| p.id == id);
    let wanted = match target {
        FormTarget::AddProject => return None,
        FormTarget::RemoveProject { id } => RowKind::CardHeader(index_of(id)?),
        FormTarget::Field { id, field } => RowKind::Field(index_of(id)?, *field),
        FormTarget::AddBullet { id } => RowKind::DescHeader(index_of(id)?),
        FormTarget::Bullet { id, index } | FormTarget::RemoveBullet { id, index } => {
            RowKind::Bullet(index_of(id)?, *index)
        }
    };
    let mut v = 0;
    for row in rows {
        if *row == wanted {
            return Some((v, row.height()));
        }
        v += row.height();
    }
    None
}

/// Render the projects form panel.
///
/// Adjusts the scroll offset so the focused element is visible, draws the
/// panel, and caches the resulting hit-test layout on `state`.
pub fn render_projects_form(
    frame: &mut Frame,
    area: Rect,
    projects: &[Project],
    state: &mut ProjectsFormState,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(" Projects ")
        .title_style(Style::default().fg(theme.foreground).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < LABEL_WIDTH + 15 {
        state.last_layout = ProjectsFormLayout::default();
        return;
    }

    let rows = virtual_rows(projects);
    let content_height: u16 = rows.iter().map(|r| r.height()).sum();
    let content = Rect::new(inner.x, inner.y + 1, inner.width, inner.height - 1);

    // Keep the focused element inside the viewport
    if let Some(focus) = &state.focus {
        if let Some((v, h)) = target_position(projects, &rows, focus) {
            if v < state.scroll {
                state.scroll = v;
            } else if v + h > state.scroll + content.height {
                state.scroll = v + h - content.height;
            }
        }
    }
    state.scroll = state.scroll.min(content_height.saturating_sub(content.height));

    let mut layout = ProjectsFormLayout {
        viewport: content,
        content_height,
        add_project_area: Rect::default(),
        projects: projects
            .iter()
            .map(|p| ProjectHitArea {
                id: p.id.clone(),
                bullets: vec![BulletHitArea::default(); p.bullets.len()],
                ..ProjectHitArea::default()
            })
            .collect(),
    };

    render_header(frame, inner, projects, state, theme, &mut layout);

    if projects.is_empty() {
        let message = Paragraph::new(Line::from(Span::styled(
            "No projects. Activate [+ Add Project] to create one.",
            Style::default().fg(theme.muted_fg),
        )));
        frame.render_widget(message, Rect::new(content.x, content.y, content.width, 1));
        state.last_layout = layout;
        return;
    }

    let input_colors = TextInputColors::from_theme(theme);
    let area_colors = TextAreaColors::from_theme(theme);

    let mut v: u16 = 0;
    for row in &rows {
        let h = row.height();
        // Skip rows not fully inside the viewport
        let visible = v >= state.scroll && v + h <= state.scroll + content.height;
        if visible {
            let y = content.y + (v - state.scroll);
            let row_area = Rect::new(content.x, y, content.width, h);
            match *row {
                RowKind::CardHeader(i) => {
                    render_card_header(frame, row_area, projects, i, state, theme, &mut layout)
                }
                RowKind::Field(i, field) => {
                    let p = &projects[i];
                    let target = FormTarget::Field { id: p.id.clone(), field };
                    let value = match field {
                        ScalarField::Name => &p.name,
                        ScalarField::Technologies => &p.technologies,
                        ScalarField::Duration => &p.duration,
                    };
                    let input = TextInput::new(field.label(), value)
                        .placeholder(field.placeholder())
                        .required(true)
                        .focus(widget_focus(state, &target, row_area))
                        .cursor(state.cursor);
                    let input_layout =
                        render_text_input(frame, row_area, &input, &input_colors, Some(LABEL_WIDTH));
                    let card = &mut layout.projects[i];
                    match field {
                        ScalarField::Name => card.name_input = input_layout,
                        ScalarField::Duration => card.duration_input = input_layout,
                        ScalarField::Technologies => card.technologies_input = input_layout,
                    }
                }
                RowKind::DescHeader(i) => {
                    render_desc_header(frame, row_area, projects, i, state, theme, &mut layout)
                }
                RowKind::Bullet(i, j) => {
                    let p = &projects[i];
                    let show_remove = p.bullets.len() > 1;
                    let text_width = if show_remove {
                        row_area.width - (REMOVE_LABEL.len() as u16 + 1)
                    } else {
                        row_area.width
                    };
                    let text_rect = Rect::new(row_area.x, row_area.y, text_width, h);

                    let target = FormTarget::Bullet { id: p.id.clone(), index: j };
                    let text_area = TextArea::new(&p.bullets[j])
                        .placeholder(BULLET_PLACEHOLDER)
                        .focus(widget_focus(state, &target, text_rect))
                        .cursor(state.cursor);
                    let text_layout = render_text_area(frame, text_rect, &text_area, &area_colors);

                    let mut remove_area = None;
                    if show_remove {
                        let target = FormTarget::RemoveBullet { id: p.id.clone(), index: j };
                        let rect = Rect::new(
                            row_area.x + text_width + 1,
                            row_area.y,
                            REMOVE_LABEL.len() as u16,
                            1,
                        );
                        render_button(
                            frame,
                            rect,
                            REMOVE_LABEL,
                            button_style(theme, widget_focus(state, &target, rect), true),
                        );
                        remove_area = Some(rect);
                    }

                    layout.projects[i].bullets[j] = BulletHitArea {
                        text: text_layout,
                        remove_area,
                    };
                }
                RowKind::Spacer => {}
            }
        }
        v += h;
    }

    state.last_layout = layout;
}

fn render_header(
    frame: &mut Frame,
    inner: Rect,
    projects: &[Project],
    state: &ProjectsFormState,
    theme: &Theme,
    layout: &mut ProjectsFormLayout,
) {
    let header = Rect::new(inner.x, inner.y, inner.width, 1);

    let count = match projects.len() {
        1 => "1 project".to_string(),
        n => format!("{} projects", n),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(count, Style::default().fg(theme.muted_fg)))),
        header,
    );

    let width = ADD_PROJECT_LABEL.len() as u16;
    if header.width > width {
        let rect = Rect::new(header.x + header.width - width, header.y, width, 1);
        let focus = widget_focus(state, &FormTarget::AddProject, rect);
        render_button(frame, rect, ADD_PROJECT_LABEL, button_style(theme, focus, false));
        layout.add_project_area = rect;
    }
}

fn render_card_header(
    frame: &mut Frame,
    row_area: Rect,
    projects: &[Project],
    i: usize,
    state: &ProjectsFormState,
    theme: &Theme,
    layout: &mut ProjectsFormLayout,
) {
    let p = &projects[i];
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Project #{}", i + 1),
            Style::default().fg(theme.foreground).add_modifier(Modifier::BOLD),
        ))),
        row_area,
    );

    // Removal is hidden, not blocked, for a single-element list
    if projects.len() > 1 {
        let width = REMOVE_LABEL.len() as u16;
        let rect = Rect::new(row_area.x + row_area.width - width, row_area.y, width, 1);
        let target = FormTarget::RemoveProject { id: p.id.clone() };
        render_button(
            frame,
            rect,
            REMOVE_LABEL,
            button_style(theme, widget_focus(state, &target, rect), true),
        );
        layout.projects[i].remove_area = Some(rect);
    }
}

fn render_desc_header(
    frame: &mut Frame,
    row_area: Rect,
    projects: &[Project],
    i: usize,
    state: &ProjectsFormState,
    theme: &Theme,
    layout: &mut ProjectsFormLayout,
) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Description / Features",
            Style::default().fg(theme.label_fg),
        ))),
        row_area,
    );

    let width = ADD_BULLET_LABEL.len() as u16;
    if row_area.width > width {
        let rect = Rect::new(row_area.x + row_area.width - width, row_area.y, width, 1);
        let target = FormTarget::AddBullet { id: projects[i].id.clone() };
        render_button(
            frame,
            rect,
            ADD_BULLET_LABEL,
            button_style(theme, widget_focus(state, &target, rect), false),
        );
        layout.projects[i].add_bullet_area = rect;
    }
}

fn render_button(frame: &mut Frame, rect: Rect, label: &str, style: Style) {
    frame.render_widget(Paragraph::new(Line::from(Span::styled(label, style))), rect);
}

fn button_style(theme: &Theme, focus: FocusState, remove: bool) -> Style {
    let base = if remove { theme.remove_fg } else { theme.button_fg };
    match focus {
        FocusState::Focused => Style::default()
            .fg(theme.focused_fg)
            .add_modifier(Modifier::REVERSED),
        FocusState::Hovered => Style::default().fg(theme.focused_fg),
        _ => Style::default().fg(base),
    }
}

/// Focus state for a widget about to be drawn at `rect`.
fn widget_focus(state: &ProjectsFormState, target: &FormTarget, rect: Rect) -> FocusState {
    if state.focus.as_ref() == Some(target) {
        return FocusState::Focused;
    }
    if let Some((x, y)) = state.hover {
        if point_in_rect(rect, x, y) {
            return FocusState::Hovered;
        }
    }
    FocusState::Normal
}
