use std::error::Error;
use std::path::Path;

pub(super) fn load_json_file(path: &Path) -> Result<serde_json::Value, Box<dyn Error>> {
    let data = std::fs::read_to_string(path)?;
    let json: serde_json::Value = serde_json::from_str(&data)?;
    Ok(json)
}
