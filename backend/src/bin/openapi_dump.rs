//! Print the generated OpenAPI document as pretty JSON on stdout.

use student_api::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<(), serde_json::Error> {
    let rendered = ApiDoc::openapi().to_pretty_json()?;
    println!("{rendered}");
    Ok(())
}
