//! Text rendering for financial reports

use std::fmt::Write;

use super::FinancialReport;
use crate::finance::{format_currency, format_large_number, format_percentage};

const RULE: &str = "───────────────────────────────────────────────────────";
const DOUBLE_RULE: &str = "══════════════════════════════════════════════════════";

impl FinancialReport {
    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        let opp = &self.opportunity;
        let costs = &self.cost_breakdown;
        let roi = &self.roi;

        let payback = match roi.payback_period_months {
            Some(months) => format!("{months} months"),
            None => "not within horizon".to_string(),
        };

        let mut out = format!(
            r#"
{DOUBLE_RULE}
  {}
{DOUBLE_RULE}

OPPORTUNITY
{RULE}
Category:         {}
TAM:              {}
Price / Cost:     {} / {}
Gross Margin:     {}%
Score:            {}
Ease of Entry:    {:?}
Confidence:       {}%

UNIT COSTS
{RULE}
Material:         {:.2}
Manufacturing:    {:.2}
Logistics:        {:.2}
Marketing:        {:.2}
Overhead:         {:.2}
Total:            {:.2}

RETURNS
{RULE}
Investment:       {}
NPV:              {}
ROI:              {}
Approx. IRR:      {}
Payback:          {}
"#,
            opp.name,
            opp.category,
            format_large_number(opp.tam),
            format_currency(opp.suggested_price, "USD"),
            format_currency(opp.estimated_cost, "USD"),
            self.gross_margin,
            opp.overall_score.normalize(),
            opp.ease_of_entry,
            self.confidence,
            costs.material_costs,
            costs.manufacturing_costs,
            costs.logistics_costs,
            costs.marketing_costs,
            costs.overhead_costs,
            costs.total_costs,
            format_currency(roi.initial_investment, "USD"),
            format_currency(roi.net_present_value, "USD"),
            format_percentage(roi.projected_roi, 1),
            format_percentage(roi.approximate_irr, 1),
            payback,
        );

        match &self.break_even {
            Some(be) => {
                let _ = writeln!(
                    out,
                    "Break-even:       {} units ({})",
                    be.break_even_units,
                    format_currency(be.break_even_revenue, "USD")
                );
            }
            None => {
                let _ = writeln!(out, "Break-even:       no positive contribution margin");
            }
        }

        let _ = writeln!(out, "\nPROJECTIONS\n{RULE}");
        for p in &self.projections {
            let _ = writeln!(
                out,
                "Year {:<3}  {:>12} units  {:>14}  {:>7}",
                p.year,
                p.projected_units,
                format_currency(p.projected_revenue, "USD"),
                format_percentage(p.market_penetration, 1),
            );
        }

        if !self.sensitivity.is_empty() {
            let _ = writeln!(out, "\nSENSITIVITY\n{RULE}");
            for s in &self.sensitivity {
                let _ = writeln!(
                    out,
                    "{:<32} margin {:>4}%  score {:>4}  {}",
                    s.scenario,
                    s.adjusted_margin,
                    s.adjusted_score.normalize(),
                    s.impact
                );
            }
        }

        if let Some(last) = self.timeline.last() {
            let _ = writeln!(
                out,
                "\nADOPTION\n{RULE}\nMonth {}: {} penetration, {} revenue, {} units",
                last.month,
                format_percentage(last.penetration, 2),
                format_currency(last.revenue, "USD"),
                last.units,
            );
        }

        let _ = writeln!(out, "{DOUBLE_RULE}");
        out
    }
}
