use include_dir::{include_dir, Dir};

use crate::errors::ExportError;

static ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Text of a compiled-in asset.
pub fn asset(name: &'static str) -> Result<&'static str, ExportError> {
    ASSETS_DIR
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or(ExportError::MissingAsset(name))
}
