// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules in this crate `use crate::errors::*;` to get at everything `error_chain!` creates.
use error_chain::error_chain;

error_chain! {
    errors {
        InvalidDimension(axis: &'static str, requested: i64) {
            description("invalid grid dimension")
            display("cannot build a grid with {} {}", requested, axis)
        }
        InvalidDirection(detail: String) {
            description("invalid wall direction")
            display("invalid wall direction: {}", detail)
        }
        InvalidCoordinate(detail: String) {
            description("coordinate outside the grid")
            display("coordinate outside the grid: {}", detail)
        }
        NotAdjacent(detail: String) {
            description("cells are not adjacent")
            display("cells are not adjacent: {}", detail)
        }
        InvariantViolation(detail: String) {
            description("maze invariant violated")
            display("maze invariant violated: {}", detail)
        }
    }
}
