mod block;
mod config;
mod html;
mod parser;
mod plan;
mod typst;

pub use block::{Block, ListItem, Span};
pub use config::Config;
pub use html::{blocks_to_html, plan_to_html};
pub use plan::{PlanRequest, PlanResponse, normalize_budget};
pub use typst::plan_to_typst;

use typst_as_lib::TypstEngine;
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_pdf::PdfOptions;

/// Convert one block of plan text into a vector of blocks.
pub fn convert(text: &str) -> Vec<Block> {
    parser::convert(text)
}

/// Convert one block of plan text to an HTML fragment.
pub fn text_to_html(text: &str) -> String {
    html::blocks_to_html(&parser::convert(text))
}

/// Convert a plan to PDF bytes.
pub fn plan_to_pdf(plan: &PlanResponse, config: &Config) -> Result<Vec<u8>, String> {
    use typst_library::layout::PagedDocument;

    let typst_content = typst::plan_to_typst(plan, config);

    let font_options = TypstKitFontOptions::new()
        .include_embedded_fonts(true)
        .include_system_fonts(false);

    let engine = TypstEngine::builder()
        .main_file(typst_content)
        .search_fonts_with(font_options)
        .build();

    let doc: PagedDocument = engine
        .compile()
        .output
        .map_err(|e| format!("Typst compilation failed: {:?}", e))?;

    typst_pdf::pdf(&doc, &PdfOptions::default())
        .map_err(|e| format!("PDF generation failed: {:?}", e))
}
