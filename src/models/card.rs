//! Card identities and the stats endpoints that back them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identity of one summary card. Serialized as the card's DOM id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardId {
    #[serde(rename = "totalEmployeesCard")]
    TotalEmployees,
    #[serde(rename = "totalPresentCard")]
    TotalPresent,
    #[serde(rename = "totalAbsentCard")]
    TotalAbsent,
    #[serde(rename = "totalProjectsCard")]
    TotalProjects,
    #[serde(rename = "totalAssignedProjectsCard")]
    TotalAssignedProjects,
    #[serde(rename = "totalDailyReportsCard")]
    TotalDailyReports,
}

impl CardId {
    /// Render order of the panel.
    pub const ALL: [CardId; 6] = [
        CardId::TotalEmployees,
        CardId::TotalPresent,
        CardId::TotalAbsent,
        CardId::TotalProjects,
        CardId::TotalAssignedProjects,
        CardId::TotalDailyReports,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            Self::TotalEmployees => "totalEmployeesCard",
            Self::TotalPresent => "totalPresentCard",
            Self::TotalAbsent => "totalAbsentCard",
            Self::TotalProjects => "totalProjectsCard",
            Self::TotalAssignedProjects => "totalAssignedProjectsCard",
            Self::TotalDailyReports => "totalDailyReportsCard",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::TotalEmployees => "Total Employees",
            Self::TotalPresent => "Total Present",
            Self::TotalAbsent => "Total Absent",
            Self::TotalProjects => "Total Projects",
            Self::TotalAssignedProjects => "Total Assigned Projects",
            Self::TotalDailyReports => "Total Daily Reports",
        }
    }

    /// Heading of the card's detail surface.
    pub fn detail_header(self) -> &'static str {
        match self {
            Self::TotalEmployees => "Employees",
            Self::TotalPresent => "Present Employees",
            Self::TotalAbsent => "Absent Employees",
            Self::TotalProjects => "Projects",
            Self::TotalAssignedProjects => "Assigned Projects",
            Self::TotalDailyReports => "Daily Reports",
        }
    }

    pub fn endpoint(self) -> StatsEndpoint {
        match self {
            Self::TotalEmployees => StatsEndpoint::TotalEmployeesCount,
            Self::TotalPresent => StatsEndpoint::TotalPresentEmployees,
            Self::TotalAbsent => StatsEndpoint::TotalAbsentEmployees,
            Self::TotalProjects => StatsEndpoint::TotalProjectsCount,
            Self::TotalAssignedProjects => StatsEndpoint::TotalAssignedProjectsCount,
            Self::TotalDailyReports => StatsEndpoint::MarkedUsersOfTodayDailyReport,
        }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

impl FromStr for CardId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardId::ALL
            .into_iter()
            .find(|card| card.dom_id() == s)
            .ok_or_else(|| format!("unknown card: {s}"))
    }
}

/// One operation of the remote `DashboardStats` controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatsEndpoint {
    TotalEmployeesCount,
    TotalPresentEmployees,
    TotalAbsentEmployees,
    TotalProjectsCount,
    TotalAssignedProjectsCount,
    MarkedUsersOfTodayDailyReport,
}

impl StatsEndpoint {
    pub const ALL: [StatsEndpoint; 6] = [
        StatsEndpoint::TotalEmployeesCount,
        StatsEndpoint::TotalPresentEmployees,
        StatsEndpoint::TotalAbsentEmployees,
        StatsEndpoint::TotalProjectsCount,
        StatsEndpoint::TotalAssignedProjectsCount,
        StatsEndpoint::MarkedUsersOfTodayDailyReport,
    ];

    pub fn operation_name(self) -> &'static str {
        match self {
            Self::TotalEmployeesCount => "GetTotalEmployeesCount",
            Self::TotalPresentEmployees => "GetTotalPresentEmployees",
            Self::TotalAbsentEmployees => "GetTotalAbsentEmployees",
            Self::TotalProjectsCount => "GetTotalProjectsCount",
            Self::TotalAssignedProjectsCount => "GetTotalAssignedProjectsCount",
            Self::MarkedUsersOfTodayDailyReport => "GetMarkedUsersOfTodayDailyReport",
        }
    }

    /// Absolute URL of this operation under the given API base.
    pub fn url(self, base: &str) -> String {
        format!(
            "{}/api/DashboardStats/{}",
            base.trim_end_matches('/'),
            self.operation_name()
        )
    }
}

impl fmt::Display for StatsEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operation_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_id_serializes_as_dom_id() {
        let json = serde_json::to_string(&CardId::TotalAssignedProjects).unwrap();
        assert_eq!(json, "\"totalAssignedProjectsCard\"");
        for card in CardId::ALL {
            let json = serde_json::to_string(&card).unwrap();
            assert_eq!(json.trim_matches('"'), card.dom_id());
        }
    }

    #[test]
    fn card_id_parses_from_dom_id() {
        assert_eq!(
            "totalDailyReportsCard".parse::<CardId>().unwrap(),
            CardId::TotalDailyReports
        );
        assert!("totalSalaryCard".parse::<CardId>().is_err());
    }

    #[test]
    fn every_card_has_a_distinct_endpoint() {
        let mut endpoints: Vec<_> = CardId::ALL.iter().map(|c| c.endpoint()).collect();
        endpoints.dedup();
        assert_eq!(endpoints.len(), 6);
        assert_eq!(endpoints, StatsEndpoint::ALL.to_vec());
    }

    #[test]
    fn endpoint_url_shape() {
        assert_eq!(
            StatsEndpoint::TotalPresentEmployees.url("https://localhost:44380/"),
            "https://localhost:44380/api/DashboardStats/GetTotalPresentEmployees"
        );
    }
}
