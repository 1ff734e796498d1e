pub mod dashboard_context;
