//! Reading label sequences from delimited files

mod load;


pub use load::{load_csv, read_csv, LabelPair};
