pub mod check;
pub mod play;

use std::path::Path;

use derelict_pack::LoadedPack;

/// Load a content pack. Each warning has already been logged through
/// `tracing` by the time this returns.
fn load(dir: &Path) -> Result<LoadedPack, String> {
    derelict_pack::load_pack(dir).map_err(|e| format!("cannot load content pack: {e}"))
}

/// `"1 warning"`, `"2 warnings"`.
fn plural(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", if count == 1 { "" } else { "s" })
}
