pub mod analysis_result;
