use docx_rs::{AlignmentType, Docx, Paragraph, Run};
use std::io::Cursor;

use crate::report::{Block, Report, Span};
use crate::{ExportError, Result};

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

// Sizes are in half-points.
const TITLE_SIZE: usize = 36;
const HEADING_SIZE: usize = 28;
const SUBHEADING_SIZE: usize = 24;
const FOOTER_SIZE: usize = 18;

/// Packs `report` into the bytes of a `.docx` file.
pub fn render_docx(report: &Report) -> Result<Vec<u8>> {
    let docx = report
        .blocks
        .iter()
        .fold(Docx::new(), |docx, block| docx.add_paragraph(paragraph(block)));

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| ExportError::Render(e.to_string()))?;
    Ok(buffer.into_inner())
}

fn paragraph(block: &Block) -> Paragraph {
    match block {
        Block::Title(text) => Paragraph::new()
            .add_run(Run::new().add_text(text).bold().size(TITLE_SIZE))
            .align(AlignmentType::Center),
        Block::Heading(text) => Paragraph::new()
            .add_run(Run::new().add_text(text).bold().size(HEADING_SIZE))
            .align(AlignmentType::Right),
        Block::Subheading(text) => Paragraph::new()
            .add_run(Run::new().add_text(text).bold().size(SUBHEADING_SIZE))
            .align(AlignmentType::Right),
        Block::Paragraph(spans) => spans
            .iter()
            .fold(Paragraph::new(), |paragraph, span| paragraph.add_run(run(span)))
            .align(AlignmentType::Right),
        Block::Rule(c) => Paragraph::new()
            .add_run(Run::new().add_text(c.to_string().repeat(50)))
            .align(AlignmentType::Center),
        Block::Blank => Paragraph::new(),
        Block::Footer(text) => Paragraph::new()
            .add_run(Run::new().add_text(text).size(FOOTER_SIZE))
            .align(AlignmentType::Center),
    }
}

fn run(span: &Span) -> Run {
    let run = Run::new().add_text(&span.text);
    if span.bold {
        run.bold()
    } else {
        run
    }
}
