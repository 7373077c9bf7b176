/// A ternary expression macro.  Rust's `if` is already an expression,
/// but `cargo fmt` spreads it over five lines, and the table of
/// border cases in the seam solver is far easier to read when each
/// case fits on one.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
