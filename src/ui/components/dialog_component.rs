//! Modal dialogs: delete confirmation, the activity log and the help overlay.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::constants::{CONFIRM_DELETE_EMPLOYEE, DIALOG_TITLE_ACTIVITY_LOG};
use crate::logger::Logger;
use crate::ui::components::common::{centered_rect, create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::ui::core::{Action, Component, DialogType, Mutation};

const HELP_CONTENT: &str = r"
EMS LITE - Employee Management Terminal Client
==============================================

PAGES
-----
1 / 2 / 3       Dashboard / Employees / Attendance
Tab / Shift-Tab Next / previous page
r               Reload the current page

EMPLOYEES
---------
a               Show or hide the Add Employee form
j/k, ↑/↓        Move the selection
d, Delete       Delete selected employee (with confirmation)

ATTENDANCE
----------
m               Show or hide the Mark Attendance form
f               Filter records by date (YYYY-MM-DD)
c               Clear the date filter
j/k, ↑/↓        Move the selection

FORMS
-----
Tab / Shift-Tab Next / previous field
←/→             Change employee or status
Enter           Submit
Esc             Close the form

GENERAL
-------
G               Activity log
?               Toggle this help
q, Ctrl+C       Quit
Esc             Close dialog, or quit
";

/// Lines scrolled by PageUp/PageDown
const PAGE_LINES: usize = 10;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    logger: Logger,
    scroll_offset: usize,
    scrollbar_state: ScrollbarState,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            logger,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn handle_confirm_key(&mut self, key: KeyEvent, employee_id: String) -> Action {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.clear_dialog();
                Action::Submit(Mutation::DeleteEmployee(employee_id))
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::HideDialog,
            _ => Action::None,
        }
    }

    fn handle_scroll_key(&mut self, key: KeyEvent, close: &[KeyCode]) -> Action {
        if key.code == KeyCode::Esc || close.contains(&key.code) {
            return Action::HideDialog;
        }
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.scroll_offset = self.scroll_offset.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            KeyCode::PageDown => self.scroll_offset = self.scroll_offset.saturating_add(PAGE_LINES),
            KeyCode::PageUp => self.scroll_offset = self.scroll_offset.saturating_sub(PAGE_LINES),
            KeyCode::Home => self.scroll_offset = 0,
            KeyCode::End => self.scroll_offset = usize::MAX,
            _ => return Action::None,
        }
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
        Action::None
    }

    fn render_delete_confirmation(f: &mut Frame, area: Rect, employee_id: &str, full_name: &str) {
        let dialog_area = centered_rect(50, 30, area);
        f.render_widget(Clear, dialog_area);

        let block = create_dialog_block(" ⚠ Confirm Delete ", Color::Red);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = Layout::vertical([Constraint::Length(2), Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        f.render_widget(
            Paragraph::new(CONFIRM_DELETE_EMPLOYEE)
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Center),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(format!("{} ({})", full_name, employee_id))
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center),
            chunks[1],
        );
        f.render_widget(
            create_instructions_paragraph(&[shortcuts::CONFIRM_YES, shortcuts::SEPARATOR, shortcuts::CONFIRM_NO]),
            chunks[2],
        );
    }

    /// Scrollable text overlay shared by the activity log and help dialogs
    fn render_scrollable(&mut self, f: &mut Frame, area: Rect, title: &str, content: &str) {
        let outer = centered_rect(90, 90, area);
        f.render_widget(Clear, outer);

        let content_area = Rect::new(
            outer.x + 2,
            outer.y + 1,
            outer.width.saturating_sub(4),
            outer.height.saturating_sub(2),
        );

        let lines: Vec<&str> = content.lines().collect();
        let total_lines = lines.len();
        let visible_height = content_area.height.saturating_sub(2) as usize;

        let max_scroll = total_lines.saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        self.scrollbar_state = self
            .scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(self.scroll_offset);

        let visible = lines
            .iter()
            .skip(self.scroll_offset)
            .take(visible_height)
            .copied()
            .collect::<Vec<_>>()
            .join("\n");

        let paragraph = Paragraph::new(visible)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title.to_string())
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White));
        f.render_widget(paragraph, content_area);

        if total_lines > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("▐")
                .style(Style::default().fg(Color::Gray))
                .thumb_style(Style::default().fg(Color::White));
            f.render_stateful_widget(scrollbar, content_area, &mut self.scrollbar_state);
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.dialog_type.clone() {
            Some(DialogType::ConfirmDeleteEmployee { employee_id, .. }) => self.handle_confirm_key(key, employee_id),
            Some(DialogType::ActivityLog) => self.handle_scroll_key(key, &[KeyCode::Char('G'), KeyCode::Char('q')]),
            Some(DialogType::Help) => self.handle_scroll_key(key, &[KeyCode::Char('?'), KeyCode::Char('q')]),
            None => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialog_type.clone() {
            Some(DialogType::ConfirmDeleteEmployee { employee_id, full_name }) => {
                Self::render_delete_confirmation(f, rect, &employee_id, &full_name);
            }
            Some(DialogType::ActivityLog) => {
                let logs = self.logger.get_logs();
                let content = if logs.is_empty() {
                    "No activity yet".to_string()
                } else {
                    logs.join("\n")
                };
                self.render_scrollable(f, rect, DIALOG_TITLE_ACTIVITY_LOG, &content);
            }
            Some(DialogType::Help) => {
                self.render_scrollable(f, rect, "📖 Help - Press 'Esc', '?' or 'q' to close", HELP_CONTENT);
            }
            None => {}
        }
    }
}
