//! Run summary printed after a successful analysis

use crate::measures::Measure;
use crate::models::Query;
use crate::pipeline::PipelineReport;
use console::style;

pub fn print(query: &Query, report: &PipelineReport) {
    let a = &report.analysis;
    let tag = query.tag.as_ref().map(|t| t.to_string()).unwrap_or_default();

    println!(
        "{} {} {}",
        style("Collocations of").bold(),
        style(&query.word).cyan().bold(),
        style(format!("({})", tag)).dim()
    );
    println!("  As first word:      {}", a.split.as_first_word.len());
    println!("  As second word:     {}", a.split.as_second_word.len());
    println!("  Combined:           {}", a.combined.len());
    println!("  Matching templates: {}", a.excluded.len());
    println!();

    for outcome in &a.outcomes {
        let top = outcome
            .ranked
            .first()
            .map(|e| format!("{} ({:.3})", e.partner, e.score))
            .unwrap_or_else(|| "-".to_string());
        match &outcome.filtered {
            Some(f) => println!(
                "  {:<17} top: {:<28} {} significant {}",
                label(outcome.measure),
                top,
                style(f.entries.len()).green().bold(),
                style(format!("(> {:.4})", f.quantile)).dim()
            ),
            None => println!("  {:<17} top: {}", label(outcome.measure), top),
        }
    }

    println!();
    println!(
        "{} {}",
        style("Results written to").dim(),
        report.output_dir.display()
    );
}

fn label(measure: Measure) -> String {
    format!("{}:", measure)
}
