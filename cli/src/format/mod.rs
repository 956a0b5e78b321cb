pub mod json;

#[derive(Clone, Copy)]
pub enum OutputFormat {
    Json,
    Tree,
}

impl OutputFormat {
    pub fn from_string(format: &str) -> Self {
        match format {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Tree,
        }
    }
}
