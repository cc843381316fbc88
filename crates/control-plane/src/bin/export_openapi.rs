// Export OpenAPI specification as JSON
//
// Usage: cargo run --bin export-openapi > docs/openapi.json
//
// Generates the OpenAPI document without starting the API server.

use anyhow::Result;
use eventdeck_control_plane::openapi::ApiDoc;

fn main() -> Result<()> {
    println!("{}", ApiDoc::to_json()?);
    Ok(())
}
