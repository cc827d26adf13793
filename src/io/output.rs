use crate::insights::{
    format_completeness_summary, format_coverage_matrix, format_gap_summary,
    format_recommendations, generate_wardrobe_insight, WardrobeReport,
};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &WardrobeReport) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &WardrobeReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &WardrobeReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Wardrobe Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &WardrobeReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Items | {} |", report.item_count)?;
        writeln!(self.writer, "| Available | {} |", report.available_count)?;
        writeln!(self.writer, "| Completeness | {}% |", report.completeness)?;
        writeln!(self.writer, "| Gaps | {} |", report.gaps.len())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_gaps(&mut self, report: &WardrobeReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Gaps")?;
        writeln!(self.writer)?;

        if report.gaps.is_empty() {
            writeln!(self.writer, "No gaps detected.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        for gap in &report.gaps {
            writeln!(self.writer, "### {}", gap.title)?;
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "{} (impact: {}, completion: {}%)",
                gap.description, gap.impact, gap.completion
            )?;
            writeln!(self.writer)?;
            for rec in &gap.recommendations {
                writeln!(
                    self.writer,
                    "- **{}** ({}) — {}",
                    rec.name,
                    rec.price.display(),
                    rec.reason
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &WardrobeReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_gaps(report)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &WardrobeReport) -> anyhow::Result<()> {
        let insight = generate_wardrobe_insight(report);
        self.writer
            .write_all(format_completeness_summary(report).as_bytes())?;
        self.writer
            .write_all(format_coverage_matrix(&report.coverage).as_bytes())?;
        self.writer
            .write_all(format_gap_summary(&insight.gaps).as_bytes())?;
        self.writer
            .write_all(format_recommendations(&insight.top_recommendations).as_bytes())?;
        Ok(())
    }
}
