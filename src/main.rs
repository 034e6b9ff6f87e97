//! Blue Nine Access main entrypoint.

use bluenine::run;

fn main() {
    if let Err(e) = run() {
        bluenine::ui::messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
