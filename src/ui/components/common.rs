use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::api::AttendanceStatus;

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

fn field_block(field_title: &str, focused: bool) -> Block<'static> {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color))
}

/// Creates an input field block, with a visual cursor while focused
pub fn create_input_paragraph<'a>(input_buffer: &str, field_title: &str, focused: bool) -> Paragraph<'a> {
    let input_display = if focused {
        format!("{}█", input_buffer)
    } else {
        input_buffer.to_string()
    };

    Paragraph::new(input_display)
        .block(field_block(field_title, focused))
        .style(Style::default().fg(Color::White))
}

/// Creates a selection field block (value picked with arrow keys)
pub fn create_selection_paragraph(value: String, field_title: &str, focused: bool) -> Paragraph<'static> {
    let shown = if focused { format!("‹ {} ›", value) } else { value };
    Paragraph::new(shown)
        .block(field_block(field_title, focused))
        .style(Style::default().fg(Color::White))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across forms and dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ENTER_SUBMIT: InstructionShortcut = ("Enter", Color::Green, " Submit");
    pub const TAB_NEXT_FIELD: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const CONFIRM_YES: InstructionShortcut = ("y", Color::Green, " Confirm");
    pub const CONFIRM_NO: InstructionShortcut = ("n", Color::Red, " Cancel");
}

/// Colored badge for an attendance status
#[must_use]
pub fn status_badge(status: AttendanceStatus) -> Span<'static> {
    let bg = match status {
        AttendanceStatus::Present => Color::Green,
        AttendanceStatus::Absent => Color::Red,
    };
    Span::styled(
        format!(" {} ", status),
        Style::default().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD),
    )
}

/// Message shown in place of an empty table
pub fn empty_state<'a>(title: &'a str, hint: Option<&'a str>) -> Paragraph<'a> {
    let mut lines = vec![
        Line::from(""),
        Line::styled(title, Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)),
    ];
    if let Some(hint) = hint {
        lines.push(Line::styled(hint, Style::default().fg(Color::DarkGray)));
    }
    Paragraph::new(lines).alignment(Alignment::Center)
}

/// Helper function to create a centered rect using up certain percentage of the available rect
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
