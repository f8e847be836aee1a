// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! row {
    // Owned row of fields from anything `&str`-like:
    // row!["1", "ÁO", "FEMALE"] → vec![String, String, String]
    ($($field:expr),* $(,)?) => {
        vec![$( ::std::string::String::from($field) ),*]
    };
}
