pub mod region_selector;
