//! Pure parsers: XBRL instance documents into fact tables, reporting periods into
//! labels, and the small number helpers shared by the ratio engine.
pub mod facts;
pub mod period;
pub mod utils;
