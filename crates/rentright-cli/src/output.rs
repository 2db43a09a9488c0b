//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use rentright_domain::money::format_euros;
use rentright_domain::{FairnessCategory, FairnessVerdict, ListingView, WwsAssessment};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a fairness verdict.
    pub fn verdict(&self, verdict: &FairnessVerdict) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(verdict)?),
            OutputFormat::Quiet => Ok(verdict.category.as_str().to_string()),
            OutputFormat::Table => Ok(format!(
                "{}\n{}",
                self.badge(verdict.category),
                verdict.explanation
            )),
        }
    }

    /// Format a WWS assessment with its breakdown.
    pub fn assessment(&self, assessment: &WwsAssessment) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(assessment)?),
            OutputFormat::Quiet => Ok(assessment.points.to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Item", "Points"]);
                for item in &assessment.breakdown {
                    builder.push_record([item.item.clone(), item.points.to_string()]);
                }
                builder.push_record(["Total".to_string(), assessment.points.to_string()]);

                Ok(format!(
                    "{}\nMax legal rent: {}",
                    self.table(builder),
                    format_euros(assessment.max_rent)
                ))
            }
        }
    }

    /// Format a list of listings.
    pub fn listings(&self, views: &[ListingView]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(views)?),
            OutputFormat::Quiet => Ok(views
                .iter()
                .map(|v| v.listing.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if views.is_empty() {
                    return Ok(self.colorize("No listings found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Title", "Location", "Rent", "Max Legal", "Points", "Verdict"]);

                for view in views {
                    let listing = &view.listing;
                    builder.push_record([
                        listing.id.to_string(),
                        listing.title.clone(),
                        listing.location.clone(),
                        format_euros(listing.advertised_rent),
                        listing.max_legal_rent.map(format_euros).unwrap_or_else(|| "-".to_string()),
                        listing.wws_points.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string()),
                        view.fairness
                            .as_ref()
                            .map(|v| v.category.label().to_string())
                            .unwrap_or_else(|| "Not assessed".to_string()),
                    ]);
                }

                Ok(self.table(builder))
            }
        }
    }

    /// Format one listing in detail.
    pub fn listing(&self, view: &ListingView) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
            OutputFormat::Quiet => Ok(view.listing.id.to_string()),
            OutputFormat::Table => {
                let listing = &view.listing;
                let mut lines = vec![
                    self.colorize(&listing.title, "cyan"),
                    format!("Location:       {}", listing.location),
                    format!(
                        "Size:           {} m², {} room(s)",
                        listing.size_m2, listing.rooms
                    ),
                    format!("Advertised:     {}", format_euros(listing.advertised_rent)),
                ];
                if let Some(max) = listing.max_legal_rent {
                    lines.push(format!("Max legal rent: {}", format_euros(max)));
                }
                if let Some(points) = listing.wws_points {
                    lines.push(format!("WWS points:     {}", points));
                }
                if !listing.amenities.is_empty() {
                    let names: Vec<&str> = listing.amenities.iter().map(|a| a.name.as_str()).collect();
                    lines.push(format!("Amenities:      {}", names.join(", ")));
                }

                if !listing.wws_breakdown.is_empty() {
                    let mut builder = Builder::default();
                    builder.push_record(["Item", "Points"]);
                    for item in &listing.wws_breakdown {
                        builder.push_record([item.item.clone(), item.points.to_string()]);
                    }
                    lines.push(self.table(builder));
                }

                match &view.fairness {
                    Some(verdict) => {
                        lines.push(self.badge(verdict.category));
                        lines.push(verdict.explanation.clone());
                    }
                    None => lines.push(self.warning("No WWS data, fairness not assessed")),
                }

                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Verdict badge, colored by category.
    fn badge(&self, category: FairnessCategory) -> String {
        let color = match category {
            FairnessCategory::Fair => "green",
            FairnessCategory::Overpriced => "red",
            FairnessCategory::LikelyLiberalized => "yellow",
        };
        self.colorize(&format!("[{}]", category.label()), color)
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentright_domain::wws::assess;
    use rentright_domain::{classify, FairnessClassifier, Listing, WwsInput};

    fn create_test_view() -> ListingView {
        let mut listing = Listing {
            id: 4,
            title: "Cozy Studio near Station".to_string(),
            location: "Rotterdam Centraal".to_string(),
            images: vec![],
            advertised_rent: 1100.0,
            size_m2: 45.0,
            rooms: 1,
            description: String::new(),
            energy_label: Some("C".to_string()),
            woz_value: Some(180_000.0),
            wws_points: None,
            max_legal_rent: None,
            amenities: vec![],
            wws_breakdown: vec![],
        };
        listing.apply_assessment(
            assess(&WwsInput {
                size_m2: 45.0,
                rooms: 1,
                energy_label: Some("C".to_string()),
                woz_value: Some(180_000.0),
            })
            .unwrap(),
        );
        ListingView::new(listing, &FairnessClassifier::default())
    }

    #[test]
    fn test_verdict_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.verdict(&classify(1200.0, 1000.0, 120).unwrap()).unwrap();
        assert_eq!(output, "[Overpriced]\nThis is €200.00 above the max legal rent.");
    }

    #[test]
    fn test_verdict_quiet_and_json() {
        let verdict = classify(1500.0, 1200.0, 150).unwrap();

        let quiet = Formatter::new(OutputFormat::Quiet, false).verdict(&verdict).unwrap();
        assert_eq!(quiet, "likely_liberalized");

        let json = Formatter::new(OutputFormat::Json, false).verdict(&verdict).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["category"], "likely_liberalized");
    }

    #[test]
    fn test_assessment_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let assessment = assess(&WwsInput {
            size_m2: 75.0,
            rooms: 3,
            energy_label: Some("A".to_string()),
            woz_value: Some(300_000.0),
        })
        .unwrap();

        let output = formatter.assessment(&assessment).unwrap();
        assert!(output.contains("Surface Area (75 m²)"));
        assert!(output.contains("Energy Label (A)"));
        assert!(output.contains("200"));
        assert!(output.ends_with("Max legal rent: €1550.00"));
    }

    #[test]
    fn test_listings_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.listings(&[create_test_view()]).unwrap();
        assert!(output.contains("Cozy Studio near Station"));
        assert!(output.contains("€905.00"));
        assert!(output.contains("Overpriced"));
    }

    #[test]
    fn test_listings_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.listings(&[create_test_view()]).unwrap();
        assert_eq!(output, "4");
    }

    #[test]
    fn test_empty_listings() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.listings(&[]).unwrap();
        assert!(output.contains("No listings found"));
    }

    #[test]
    fn test_listing_detail() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.listing(&create_test_view()).unwrap();
        assert!(output.starts_with("Cozy Studio near Station"));
        assert!(output.contains("WWS points:     114"));
        assert!(output.contains("WOZ Value (€180,000)"));
        assert!(output.contains("This is €195.00 above the max legal rent."));
    }

    #[test]
    fn test_unassessed_listing_detail() {
        let mut view = create_test_view();
        view.listing.wws_points = None;
        view.listing.wws_breakdown.clear();
        view.fairness = None;

        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.listing(&view).unwrap();
        assert!(output.contains("fairness not assessed"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
