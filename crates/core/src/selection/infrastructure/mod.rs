pub mod selector_factory;
