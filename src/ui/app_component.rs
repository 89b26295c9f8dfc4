use crate::api::EmsApi;
use crate::config::{BannerConfig, Config};
use crate::constants::{SUCCESS_ATTENDANCE_MARKED, SUCCESS_EMPLOYEE_ADDED, SUCCESS_EMPLOYEE_DELETED};
use crate::logger::Logger;
use crate::ui::components::{
    AttendancePage, Banners, DashboardPage, DialogComponent, EmployeesPage, LoadState, Navbar, StatusBar,
};
use crate::ui::core::{
    actions::{Action, BannerKind, DialogType, Mutation, Page, PageData},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct AppComponent {
    // Pages
    dashboard: DashboardPage,
    employees: EmployeesPage,
    attendance: AttendancePage,
    dialog: DialogComponent,
    current_page: Page,

    // Services
    api: Arc<dyn EmsApi>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    banner_config: BannerConfig,

    // Simple UI state
    pending_mutations: usize,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(api: Arc<dyn EmsApi>, config: &Config, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let date_format = config.ui.date_format.as_str();

        Self {
            dashboard: DashboardPage::new(date_format),
            employees: EmployeesPage::new(),
            attendance: AttendancePage::new(date_format),
            dialog: DialogComponent::new(logger.clone()),
            current_page: Page::from_name(&config.ui.default_page).unwrap_or_default(),
            api,
            task_manager,
            background_action_rx,
            logger,
            banner_config: config.banners.clone(),
            pending_mutations: 0,
            should_quit: false,
        }
    }

    /// Mount the configured start page
    pub fn start(&mut self) {
        self.logger.log(format!("Starting on {}", self.current_page.title()));
        self.dispatch(Action::Navigate(self.current_page));
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn dashboard(&self) -> &DashboardPage {
        &self.dashboard
    }

    pub fn employees(&self) -> &EmployeesPage {
        &self.employees
    }

    pub fn employees_mut(&mut self) -> &mut EmployeesPage {
        &mut self.employees
    }

    pub fn attendance(&self) -> &AttendancePage {
        &self.attendance
    }

    pub fn attendance_mut(&mut self) -> &mut AttendancePage {
        &mut self.attendance
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Number of submitted mutations without an outcome yet
    pub fn pending_mutations(&self) -> usize {
        self.pending_mutations
    }

    pub fn load_state(&self, page: Page) -> &LoadState {
        match page {
            Page::Dashboard => &self.dashboard.load,
            Page::Employees => &self.employees.load,
            Page::Attendance => &self.attendance.load,
        }
    }

    fn load_state_mut(&mut self, page: Page) -> &mut LoadState {
        match page {
            Page::Dashboard => &mut self.dashboard.load,
            Page::Employees => &mut self.employees.load,
            Page::Attendance => &mut self.attendance.load,
        }
    }

    pub fn is_loading(&self, page: Page) -> bool {
        self.load_state(page).is_loading()
    }

    pub fn banners(&self, page: Page) -> &Banners {
        match page {
            Page::Dashboard => &self.dashboard.banners,
            Page::Employees => &self.employees.banners,
            Page::Attendance => &self.attendance.banners,
        }
    }

    fn banners_mut(&mut self, page: Page) -> &mut Banners {
        match page {
            Page::Dashboard => &mut self.dashboard.banners,
            Page::Employees => &mut self.employees.banners,
            Page::Attendance => &mut self.attendance.banners,
        }
    }

    fn current_component(&self) -> &dyn Component {
        match self.current_page {
            Page::Dashboard => &self.dashboard,
            Page::Employees => &self.employees,
            Page::Attendance => &self.attendance,
        }
    }

    fn current_component_mut(&mut self) -> &mut dyn Component {
        match self.current_page {
            Page::Dashboard => &mut self.dashboard,
            Page::Employees => &mut self.employees,
            Page::Attendance => &mut self.attendance,
        }
    }

    /// Run an action through the component hierarchy and the app, following
    /// any actions it produces until nothing is left to do
    pub fn dispatch(&mut self, action: Action) {
        let mut next = action;
        while !matches!(next, Action::None) {
            let routed = self.dialog.update(next);
            let routed = self.current_component_mut().update(routed);
            next = self.handle_app_action(routed);
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('1') => Action::Navigate(Page::Dashboard),
            KeyCode::Char('2') => Action::Navigate(Page::Employees),
            KeyCode::Char('3') => Action::Navigate(Page::Attendance),
            KeyCode::Tab => Action::NextPage,
            KeyCode::BackTab => Action::PreviousPage,
            KeyCode::Char('r') => Action::LoadPage(self.current_page),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::ActivityLog),
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    /// Route a key: dialog first, then a page editing a field, then page keys, then global keys
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }
        if self.current_component().captures_input() {
            return self.current_component_mut().handle_key_events(key);
        }

        let page_action = self.current_component_mut().handle_key_events(key);
        if !matches!(page_action, Action::None) {
            return page_action;
        }
        self.handle_global_key(key)
    }

    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };
        self.dispatch(action);
    }

    /// Handle the actions no component consumed; returns a follow-up action
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Navigate(page) => {
                self.current_page = page;
                match page {
                    Page::Dashboard => self.dashboard.mount(),
                    Page::Employees => self.employees.mount(),
                    Page::Attendance => self.attendance.mount(),
                }
                self.logger.log(format!("Opened {}", page.title()));
                Action::LoadPage(page)
            }
            Action::NextPage => Action::Navigate(self.current_page.next()),
            Action::PreviousPage => Action::Navigate(self.current_page.previous()),
            Action::LoadPage(page) => {
                let seq = self.load_state_mut(page).begin();
                self.task_manager.spawn_load(self.api.clone(), page, seq);
                Action::None
            }
            Action::PageLoaded { seq, data } => {
                let page = data.page();
                let applied = match data {
                    PageData::Dashboard(data) => self.dashboard.apply_loaded(seq, data),
                    PageData::Employees(result) => self.employees.apply_loaded(seq, result),
                    PageData::Attendance(data) => self.attendance.apply_loaded(seq, data),
                };
                if !applied {
                    log::debug!("Discarding superseded {} load #{}", page.title(), seq);
                }
                Action::None
            }
            Action::LoadingFinished { page, seq } => {
                self.load_state_mut(page).finish(seq);
                Action::None
            }
            Action::Submit(mutation) => {
                self.logger.log(format!("Submitting: {}", mutation.describe()));
                self.pending_mutations += 1;
                self.task_manager.spawn_mutation(self.api.clone(), mutation);
                Action::None
            }
            Action::MutationSucceeded { mutation, message } => {
                self.pending_mutations = self.pending_mutations.saturating_sub(1);
                if let Some(message) = message {
                    self.logger.log(format!("Server: {}", message));
                }
                let page = mutation.page();
                match page {
                    Page::Employees => self.employees.on_mutation_succeeded(&mutation),
                    Page::Attendance => self.attendance.on_mutation_succeeded(&mutation),
                    Page::Dashboard => {}
                }
                self.show_banner(page, BannerKind::Success, success_text(&mutation).to_string());
                Action::LoadPage(page)
            }
            Action::MutationFailed { mutation, message } => {
                self.pending_mutations = self.pending_mutations.saturating_sub(1);
                self.logger.log(format!("{} failed: {}", mutation.describe(), message));
                self.show_banner(mutation.page(), BannerKind::Error, message);
                Action::None
            }
            Action::ShowBanner { page, kind, text } => {
                self.show_banner(page, kind, text);
                Action::None
            }
            Action::BannerExpired { page, kind, generation } => {
                self.banners_mut(page).slot_mut(kind).expire(generation);
                Action::None
            }
            Action::Quit => {
                self.logger.log("Quitting".to_string());
                self.should_quit = true;
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Show a banner that clears itself after the configured duration
    fn show_banner(&mut self, page: Page, kind: BannerKind, text: String) {
        let duration = match kind {
            BannerKind::Success => self.banner_config.success_duration(),
            BannerKind::Error => self.banner_config.error_duration(),
        };
        let generation = self.banners_mut(page).slot_mut(kind).set(text);
        let timer = self
            .task_manager
            .schedule(duration, Action::BannerExpired { page, kind, generation });
        self.banners_mut(page).slot_mut(kind).arm(timer);
    }

    /// Apply every action background tasks have reported so far
    pub fn process_background_actions(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.background_action_rx.try_recv() {
            self.dispatch(action);
            processed += 1;
        }

        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        if !completed_tasks.is_empty() {
            log::debug!("Cleaned up {} finished tasks", completed_tasks.len());
        }

        processed
    }

    /// Wait for the next background action and apply it
    ///
    /// Returns false once every sender is gone.
    pub async fn process_next_background_action(&mut self) -> bool {
        match self.background_action_rx.recv().await {
            Some(action) => {
                self.dispatch(action);
                self.task_manager.cleanup_finished_tasks();
                true
            }
            None => false,
        }
    }

    fn render_loading_popup(&self, f: &mut Frame, rect: Rect) {
        let popup_area = {
            let popup_layout =
                Layout::vertical([Constraint::Percentage(40), Constraint::Min(3), Constraint::Percentage(40)])
                    .split(rect);

            Layout::horizontal([Constraint::Percentage(30), Constraint::Min(30), Constraint::Percentage(30)])
                .split(popup_layout[1])[1]
        };

        let content = Paragraph::new(Line::from(Span::styled(
            format!("⟳ Loading {}...", self.current_page.title().to_lowercase()),
            Style::default().fg(Color::Yellow),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(Style::default().fg(Color::Yellow)));

        f.render_widget(Clear, popup_area);
        f.render_widget(content, popup_area);
    }
}

fn success_text(mutation: &Mutation) -> &'static str {
    match mutation {
        Mutation::CreateEmployee(_) => SUCCESS_EMPLOYEE_ADDED,
        Mutation::DeleteEmployee(_) => SUCCESS_EMPLOYEE_DELETED,
        Mutation::MarkAttendance(_) => SUCCESS_ATTENDANCE_MARKED,
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.current_component_mut().update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)]).split(rect);

        Navbar::render(f, chunks[0], self.current_page);
        self.current_component_mut().render(f, chunks[1]);

        let loading = self.is_loading(self.current_page);
        StatusBar::render(f, chunks[2], self.current_page, loading, self.pending_mutations);

        if loading {
            self.render_loading_popup(f, chunks[1]);
        }

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
