/// Binary entrypoint for the `cliput` executable.
///
/// Keeps the binary thin — all business logic lives in the `cliput_lib` crate
/// so unit tests can import library functions directly.
fn main() {
    cliput_lib::run();
}
