pub mod flow_writer;
pub mod scenario_reader;
pub mod schedule_writer;
