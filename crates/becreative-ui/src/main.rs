#![forbid(unsafe_code)]
#![warn(
    unused,
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    missing_docs
)]
//! Docs site wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    becreative_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    let mut stderr = io::stderr().lock();
    stderr.write_all(
        b"becreative-ui runs in the browser; serve it with `trunk serve` or build with `trunk build --release`.\n",
    )?;
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_main_prints_hint() -> std::io::Result<()> {
        main()
    }
}
