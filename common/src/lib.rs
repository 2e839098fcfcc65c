pub mod sink;
pub mod subject_observer;
