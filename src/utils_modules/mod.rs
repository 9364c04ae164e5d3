pub mod logger_utils;
pub mod time_utils;
