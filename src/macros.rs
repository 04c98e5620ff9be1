// src/macros.rs
#[macro_export]
macro_rules! s {
    // Empty field shorthand
    () => {
        ::std::string::String::new()
    };
    // Owned copy of anything `String: From<_>`
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}
