//! Browser entry point for the signup board

fn main() {
    #[cfg(target_arch = "wasm32")]
    board_app::boot();

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("board-app is a browser application; build it with trunk for wasm32-unknown-unknown");
}
