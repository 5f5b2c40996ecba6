pub mod csv;
pub mod sankey;
