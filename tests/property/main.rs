// Property-based test suite

mod grid_properties;
