pub mod colors;
pub mod test_attrs;
