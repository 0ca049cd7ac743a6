use crate::structs::analysis_report::AnalysisReport;
use crate::structs::analysis_result::AnalysisResult;

pub struct ReportLogger {}

impl ReportLogger {

    pub fn print_repository(result: &AnalysisResult, index: usize, total: usize) {
        println!("\nChecked: {} ({}/{})", result.name, index, total);
        println!("  URL: {}", result.url);
        println!("  Description: {}", result.description.as_deref().unwrap_or(""));
        println!("  Stars: {}", result.stars);
        println!("  Open Issues: {}", result.open_issues);
        println!("  Created: {}", result.created_at.format("%Y-%m-%dT%H:%M:%SZ"));
        println!("  Last Push: {}", result.last_push.format("%Y-%m-%dT%H:%M:%SZ"));
        println!("  Outdated: {}", Self::yes_no(result.is_outdated));
        println!("  Potentially Broken: {}", Self::yes_no(result.is_broken));
    }

    pub fn print_summary(report: &AnalysisReport) {
        println!("\n{}", "=".repeat(60));
        println!("📊 {} repositories checked ({})", report.results.len(), report.completeness);
        println!("   🕰️  Outdated: {}", report.outdated_count());
        println!("   🔧 Potentially broken: {}", report.broken_count());
        println!("{}", "=".repeat(60));
    }

    fn yes_no(flag: bool) -> &'static str {
        if flag { "Yes" } else { "No" }
    }
}
