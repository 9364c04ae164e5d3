pub mod chart_spec;
