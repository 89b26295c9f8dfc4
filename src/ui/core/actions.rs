use crate::api::{Employee, NewAttendance};
use crate::loader::{AttendancePageData, DashboardData};

/// The pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Employees,
    Attendance,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Employees, Page::Attendance];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Employees => "Employees",
            Page::Attendance => "Attendance",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Page::Dashboard => 0,
            Page::Employees => 1,
            Page::Attendance => 2,
        }
    }

    pub fn next(&self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    pub fn previous(&self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }

    /// Parse the `ui.default_page` config value
    pub fn from_name(name: &str) -> Option<Page> {
        match name {
            "dashboard" => Some(Page::Dashboard),
            "employees" => Some(Page::Employees),
            "attendance" => Some(Page::Attendance),
            _ => None,
        }
    }
}

/// Which banner slot of a page a message goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Server-state changing operations
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    CreateEmployee(Employee),
    DeleteEmployee(String),
    MarkAttendance(NewAttendance),
}

impl Mutation {
    /// Page that issued the mutation and shows its outcome
    pub fn page(&self) -> Page {
        match self {
            Mutation::CreateEmployee(_) | Mutation::DeleteEmployee(_) => Page::Employees,
            Mutation::MarkAttendance(_) => Page::Attendance,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Mutation::CreateEmployee(employee) => {
                format!("Create employee {} '{}'", employee.employee_id, employee.full_name)
            }
            Mutation::DeleteEmployee(id) => format!("Delete employee {}", id),
            Mutation::MarkAttendance(entry) => format!(
                "Mark {} {} on {}",
                entry.employee_id, entry.status, entry.attendance_date
            ),
        }
    }
}

/// Result of a page load, tagged with the load sequence number
#[derive(Debug, Clone)]
pub enum PageData {
    Dashboard(DashboardData),
    Employees(Result<Vec<Employee>, String>),
    Attendance(AttendancePageData),
}

impl PageData {
    pub fn page(&self) -> Page {
        match self {
            PageData::Dashboard(_) => Page::Dashboard,
            PageData::Employees(_) => Page::Employees,
            PageData::Attendance(_) => Page::Attendance,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    Navigate(Page),
    NextPage,
    PreviousPage,
    NextRow,
    PreviousRow,

    // Loading
    LoadPage(Page),
    PageLoaded { seq: u64, data: PageData },
    LoadingFinished { page: Page, seq: u64 },

    // Mutations
    Submit(Mutation),
    MutationSucceeded { mutation: Mutation, message: Option<String> },
    MutationFailed { mutation: Mutation, message: String },

    // Banners
    ShowBanner { page: Page, kind: BannerKind, text: String },
    BannerExpired { page: Page, kind: BannerKind, generation: u64 },

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    ConfirmDeleteEmployee { employee_id: String, full_name: String },
    ActivityLog,
    Help,
}
