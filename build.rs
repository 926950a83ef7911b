//! Build script for spotlist.
//!
//! Copies the configuration templates into the user's local data directory so
//! that an installed binary finds ready-to-edit examples next to the files it
//! actually reads.

use std::{env, fs, path::PathBuf};

/// Templates copied from the crate root into the data directory.
const TEMPLATES: [&str; 2] = [".env.example", "playlists.example.txt"];

/// Copies every template to the local data directory.
///
/// # Destination
///
/// - Linux: `~/.local/share/spotlist/`
/// - macOS: `~/Library/Application Support/spotlist/`
/// - Windows: `%LOCALAPPDATA%/spotlist/`
///
/// # Error Handling
///
/// - **Missing Templates**: Issues a `cargo:warning` but continues the build
/// - **Directory Creation / Copy Failures**: Returned as build errors
fn main() -> Result<(), Box<dyn std::error::Error>> {
    for template in TEMPLATES {
        println!("cargo:rerun-if-changed={}", template);
    }

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotlist");
    fs::create_dir_all(&out_dir)?;

    for template in TEMPLATES {
        let source = manifest_dir.join(template);
        if source.is_file() {
            fs::copy(&source, out_dir.join(template))?;
        } else {
            println!(
                "cargo:warning={} not found at {}",
                template,
                source.display()
            );
        }
    }

    Ok(())
}
