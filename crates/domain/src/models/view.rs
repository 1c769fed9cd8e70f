//! Routing shell: maps browser paths to application views.

use serde::Serialize;

/// Application views reachable by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Index,
    AdminDashboard,
    LeadsDashboard,
    SalesDashboard,
    AnalyticsDashboard,
    Login,
    NotFound,
}

/// Path table, matched exactly in declaration order. The first match wins.
const ROUTES: &[(&str, View)] = &[
    ("/", View::Index),
    ("/admin", View::AdminDashboard),
    ("/admin/sales-persons", View::AdminDashboard),
    ("/admin/leads", View::AdminDashboard),
    ("/leads", View::LeadsDashboard),
    // Shadowed by the AdminDashboard entry above.
    ("/admin/leads", View::LeadsDashboard),
    ("/sales", View::SalesDashboard),
    ("/admin/sales", View::SalesDashboard),
    ("/analytics", View::AnalyticsDashboard),
    ("/admin/analytics", View::AnalyticsDashboard),
    ("/login", View::Login),
];

impl View {
    /// Resolves a request path to a view. Unknown paths map to `NotFound`.
    pub fn resolve(path: &str) -> Self {
        let path = normalize_path(path);
        ROUTES
            .iter()
            .find(|(route, _)| *route == path)
            .map(|(_, view)| *view)
            .unwrap_or(View::NotFound)
    }

    /// Views that send unauthenticated visitors to the login path.
    pub fn requires_auth(&self) -> bool {
        matches!(self, View::AdminDashboard)
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Index => "Axisphere CRM",
            View::AdminDashboard => "Admin Dashboard",
            View::LeadsDashboard => "Leads",
            View::SalesDashboard => "Sales",
            View::AnalyticsDashboard => "Analytics",
            View::Login => "Sign in",
            View::NotFound => "Page not found",
        }
    }

    /// API endpoints the view reads on load.
    pub fn data_endpoints(&self) -> &'static [&'static str] {
        match self {
            View::AdminDashboard => &["/api/v1/admin/dashboard"],
            View::LeadsDashboard => &["/api/v1/leads", "/api/v1/lead-statuses"],
            View::SalesDashboard => &["/api/v1/sales-persons", "/api/v1/invoices"],
            View::AnalyticsDashboard => &["/api/v1/leads", "/api/v1/invoices"],
            View::Index | View::Login | View::NotFound => &[],
        }
    }
}

/// Strips trailing slashes; an empty path is the root.
fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// View descriptor returned by the routing shell.
#[derive(Debug, Clone, Serialize)]
pub struct ViewResponse {
    pub view: View,
    pub path: String,
    pub title: String,
    pub requires_auth: bool,
    pub data_endpoints: Vec<String>,
}

impl ViewResponse {
    pub fn new(view: View, path: &str) -> Self {
        Self {
            view,
            path: path.to_string(),
            title: view.title().to_string(),
            requires_auth: view.requires_auth(),
            data_endpoints: view.data_endpoints().iter().map(|e| e.to_string()).collect(),
        }
    }
}
