use anyhow::{Context, Result};
use std::{fs, path::Path, process};

mod basis;
mod encode;
mod glyph;

/// 生成したアイコンの書き込み先. macOS のトレイが Template 画像として読む固定パス.
const OUTPUT_PATH: &str = "assets/perfect-t-icon.png";

fn write_icon(path: &Path) -> Result<()> {
    let icon = glyph::rasterize();
    let bytes = encode::to_png(&icon)?;

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory {}", dir.display()))?;
    }
    fs::write(path, &bytes).with_context(|| format!("failed to write {}", path.display()))
}

fn main() {
    match write_icon(Path::new(OUTPUT_PATH)) {
        Ok(()) => println!("created tray icon: {}", OUTPUT_PATH),
        Err(err) => {
            println!("failed to create tray icon: {:#}", err);
            process::exit(1);
        }
    }
}
