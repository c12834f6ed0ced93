mod dashboard;
mod metric_card;

pub use dashboard::SalesOverviewDashboard;
