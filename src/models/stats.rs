//! Stats API payloads and the aggregated dashboard view model.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::card::CardId;

/// Employee as listed by the employee and attendance endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(
        rename(deserialize = "EmployeeId"),
        alias = "Id",
        deserialize_with = "string_or_number",
        default
    )]
    pub id: String,
    #[serde(rename(deserialize = "FullName"), default)]
    pub full_name: String,
}

/// Project as listed by the project and assignment endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(rename(deserialize = "ProjectName"), default)]
    pub project_name: String,
}

/// User who filed today's daily report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    #[serde(rename(deserialize = "UserName"), default)]
    pub username: String,
    #[serde(
        rename(deserialize = "EmployeeId"),
        deserialize_with = "string_or_number",
        default
    )]
    pub employee_id: String,
    #[serde(rename(deserialize = "FullName"), default)]
    pub full_name: String,
}

/// Accepts ids the API sends either as JSON strings or numbers.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// `GetTotalEmployeesCount` body.
#[derive(Debug, Deserialize)]
pub struct EmployeesCountResponse {
    #[serde(rename = "TotalCount")]
    pub total_count: i64,
    #[serde(rename = "Employees", default)]
    pub employees: Vec<EmployeeRecord>,
}

/// `GetTotalPresentEmployees` / `GetTotalAbsentEmployees` body.
#[derive(Debug, Deserialize)]
pub struct AttendanceResponse {
    #[serde(rename = "Total")]
    pub total: i64,
    #[serde(rename = "Employees", default)]
    pub employees: Vec<EmployeeRecord>,
}

/// `GetTotalProjectsCount` body.
#[derive(Debug, Deserialize)]
pub struct ProjectsCountResponse {
    #[serde(rename = "TotalCount")]
    pub total_count: i64,
    #[serde(rename = "Projects", default)]
    pub projects: Vec<ProjectRecord>,
}

/// `GetTotalAssignedProjectsCount` body.
#[derive(Debug, Deserialize)]
pub struct AssignmentsResponse {
    #[serde(rename = "TotalCount")]
    pub total_count: i64,
    #[serde(rename = "Assignments", default)]
    pub assignments: Vec<ProjectRecord>,
}

/// `GetMarkedUsersOfTodayDailyReport` body.
#[derive(Debug, Deserialize)]
pub struct MarkedUsersResponse {
    #[serde(rename = "TotalCount")]
    pub total_count: i64,
    #[serde(rename = "MarkedUsers", default)]
    pub marked_users: Vec<ReportRecord>,
}

/// A count together with the records behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric<T> {
    pub total_count: i64,
    pub items: Vec<T>,
}

impl<T> Default for Metric<T> {
    fn default() -> Self {
        Self {
            total_count: 0,
            items: Vec::new(),
        }
    }
}

impl From<EmployeesCountResponse> for Metric<EmployeeRecord> {
    fn from(r: EmployeesCountResponse) -> Self {
        Self {
            total_count: r.total_count,
            items: r.employees,
        }
    }
}

impl From<AttendanceResponse> for Metric<EmployeeRecord> {
    fn from(r: AttendanceResponse) -> Self {
        Self {
            total_count: r.total,
            items: r.employees,
        }
    }
}

impl From<ProjectsCountResponse> for Metric<ProjectRecord> {
    fn from(r: ProjectsCountResponse) -> Self {
        Self {
            total_count: r.total_count,
            items: r.projects,
        }
    }
}

impl From<AssignmentsResponse> for Metric<ProjectRecord> {
    fn from(r: AssignmentsResponse) -> Self {
        Self {
            total_count: r.total_count,
            items: r.assignments,
        }
    }
}

impl From<MarkedUsersResponse> for Metric<ReportRecord> {
    fn from(r: MarkedUsersResponse) -> Self {
        Self {
            total_count: r.total_count,
            items: r.marked_users,
        }
    }
}

/// One line of a detail surface: a bold label and optional trailing text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailItem {
    pub label: String,
    pub detail: Option<String>,
}

/// Records that can be listed in a detail surface.
pub trait DetailLine {
    fn detail_item(&self) -> DetailItem;
}

impl DetailLine for EmployeeRecord {
    fn detail_item(&self) -> DetailItem {
        DetailItem {
            label: self.id.clone(),
            detail: Some(self.full_name.clone()),
        }
    }
}

impl DetailLine for ProjectRecord {
    fn detail_item(&self) -> DetailItem {
        DetailItem {
            label: self.project_name.clone(),
            detail: None,
        }
    }
}

impl DetailLine for ReportRecord {
    fn detail_item(&self) -> DetailItem {
        DetailItem {
            label: self.username.clone(),
            detail: Some(format!("{} - {}", self.employee_id, self.full_name)),
        }
    }
}

/// Everything the summary panel shows, rebuilt wholesale on every fetch cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewModel {
    pub total_employees: Metric<EmployeeRecord>,
    pub present_employees: Metric<EmployeeRecord>,
    pub absent_employees: Metric<EmployeeRecord>,
    pub projects: Metric<ProjectRecord>,
    pub assigned_projects: Metric<ProjectRecord>,
    pub daily_reports: Metric<ReportRecord>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl ViewModel {
    /// Zero counts and no items; the state before the first fetch completes.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn count(&self, card: CardId) -> i64 {
        match card {
            CardId::TotalEmployees => self.total_employees.total_count,
            CardId::TotalPresent => self.present_employees.total_count,
            CardId::TotalAbsent => self.absent_employees.total_count,
            CardId::TotalProjects => self.projects.total_count,
            CardId::TotalAssignedProjects => self.assigned_projects.total_count,
            CardId::TotalDailyReports => self.daily_reports.total_count,
        }
    }

    /// Number of records behind a card, which may differ from its count.
    pub fn item_count(&self, card: CardId) -> usize {
        match card {
            CardId::TotalEmployees => self.total_employees.items.len(),
            CardId::TotalPresent => self.present_employees.items.len(),
            CardId::TotalAbsent => self.absent_employees.items.len(),
            CardId::TotalProjects => self.projects.items.len(),
            CardId::TotalAssignedProjects => self.assigned_projects.items.len(),
            CardId::TotalDailyReports => self.daily_reports.items.len(),
        }
    }

    /// The first `limit` detail lines of a card, or all of them.
    pub fn detail_items(&self, card: CardId, limit: Option<usize>) -> Vec<DetailItem> {
        fn take<T: DetailLine>(items: &[T], limit: Option<usize>) -> Vec<DetailItem> {
            let n = limit.unwrap_or(items.len()).min(items.len());
            items[..n].iter().map(DetailLine::detail_item).collect()
        }

        match card {
            CardId::TotalEmployees => take(&self.total_employees.items, limit),
            CardId::TotalPresent => take(&self.present_employees.items, limit),
            CardId::TotalAbsent => take(&self.absent_employees.items, limit),
            CardId::TotalProjects => take(&self.projects.items, limit),
            CardId::TotalAssignedProjects => take(&self.assigned_projects.items, limit),
            CardId::TotalDailyReports => take(&self.daily_reports.items, limit),
        }
    }
}
