//! Static route table: which screen occupies the content region for a path.

/// A mountable content screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    AttendanceTable,
    DailyReports,
    CreateProject,
    Assignment,
    AttendanceView,
    Dashboard,
}

impl Screen {
    /// Screens linked from the sidebar, in menu order.
    pub const NAV: [Screen; 5] = [
        Screen::AttendanceTable,
        Screen::DailyReports,
        Screen::CreateProject,
        Screen::Assignment,
        Screen::AttendanceView,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::AttendanceTable => "/attendance-table",
            Self::DailyReports => "/daily-reports",
            Self::CreateProject => "/create-project",
            Self::Assignment => "/assignment",
            Self::AttendanceView => "/attendance-view",
            Self::Dashboard => "/",
        }
    }

    /// Sidebar menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::AttendanceTable => "User Management",
            Self::DailyReports => "Daily Reports",
            Self::CreateProject => "Project Management",
            Self::Assignment => "Assignment",
            Self::AttendanceView => "Attendance",
            Self::Dashboard => "Dashboard",
        }
    }

    /// Sidebar icon name (font-awesome). The dashboard has no sidebar entry.
    pub fn icon(self) -> Option<&'static str> {
        match self {
            Self::AttendanceTable => Some("users"),
            Self::DailyReports => Some("file-alt"),
            Self::CreateProject => Some("clipboard-list"),
            Self::Assignment => Some("tasks"),
            Self::AttendanceView => Some("user"),
            Self::Dashboard => None,
        }
    }

    /// Stable identifier used in markup.
    pub fn key(self) -> &'static str {
        match self {
            Self::AttendanceTable => "attendance_table",
            Self::DailyReports => "daily_reports",
            Self::CreateProject => "create_project",
            Self::Assignment => "assignment",
            Self::AttendanceView => "attendance_view",
            Self::Dashboard => "dashboard",
        }
    }

    /// Last path segment looks like a file (`/favicon.ico`, `/robots.txt`).
    /// No screen serves such paths.
    pub fn is_asset_path(path: &str) -> bool {
        path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
    }

    /// Select the screen for a request path. First prefix match wins and the
    /// dashboard catches everything else.
    pub fn resolve(path: &str) -> Screen {
        Screen::NAV
            .into_iter()
            .find(|screen| {
                let p = screen.path();
                path == p || path.strip_prefix(p).is_some_and(|rest| rest.starts_with('/'))
            })
            .unwrap_or(Screen::Dashboard)
    }
}
