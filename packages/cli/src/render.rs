//! Terminal rendering of the generator and data views.
//!
//! Every function returns the rendered text so the views can be checked
//! without a terminal. Police figures are red and alternative figures are
//! yellow when `colors` is set.

use std::fmt::Write as _;

use console::{Alignment, Style, measure_text_width, pad_str};
use police_budget_dataset::{Alternative, City, DataLink, Dataset};
use police_budget_math::{BudgetSection, ChartPercents, Comparison};
use strum_macros::Display;

/// Width of a 100% chart bar, in characters.
const CHART_WIDTH: u64 = 40;

/// Top-level sections of the data view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, clap::ValueEnum)]
pub enum DataSection {
    /// Budget sources for every city.
    #[strum(serialize = "City Budgets")]
    #[value(name = "cities")]
    Cities,
    /// Sources for the non-salaried alternatives.
    #[strum(serialize = "Other Data")]
    #[value(name = "other")]
    Other,
}

impl DataSection {
    /// Every section, in display order.
    pub const ALL: &[Self] = &[Self::Cities, Self::Other];
}

struct Palette {
    police: Style,
    alternative: Style,
    heading: Style,
}

impl Palette {
    fn new(colors: bool) -> Self {
        Self {
            police: Style::new().red().bold().force_styling(colors),
            alternative: Style::new().yellow().bold().force_styling(colors),
            heading: Style::new().bold().force_styling(colors),
        }
    }
}

/// Renders the generator view for `cmp`.
#[must_use]
pub fn generator_view(cmp: &Comparison, colors: bool) -> String {
    let palette = Palette::new(colors);
    let mut out = String::new();

    writeln!(out, "With 50% of the {}", palette.heading.apply_to(&cmp.city_label)).unwrap();
    writeln!(
        out,
        "{}, we could pay for",
        palette.police.apply_to("police budget")
    )
    .unwrap();
    writeln!(out).unwrap();
    writeln!(out, "  {}", palette.alternative.apply_to(&cmp.units_affordable)).unwrap();
    writeln!(out, "  {}", palette.alternative.apply_to(&cmp.alternative)).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "Instead, city spending looks like this:").unwrap();
    writeln!(out).unwrap();
    write_section(&mut out, &cmp.police, &palette.police);
    write_section(&mut out, &cmp.department, &palette.alternative);
    writeln!(out).unwrap();
    write_chart(&mut out, cmp, &palette);
    writeln!(out).unwrap();
    writeln!(
        out,
        "Tell {} to {}.",
        cmp.city_name,
        palette.heading.apply_to("#defundthepolice")
    )
    .unwrap();

    out
}

fn write_section(out: &mut String, section: &BudgetSection, style: &Style) {
    writeln!(
        out,
        "  {} {}",
        style.apply_to(format!("{}%", section.percent)),
        style.apply_to(&section.name)
    )
    .unwrap();
    writeln!(out, "     {}", section.dollars).unwrap();
}

fn write_chart(out: &mut String, cmp: &Comparison, palette: &Palette) {
    let ChartPercents { police, department } = cmp.chart;
    let width = measure_text_width(&cmp.police.name)
        .max(measure_text_width(&cmp.department.name));

    for (label, percent, style) in [
        (&cmp.police.name, police, &palette.police),
        (&cmp.department.name, department, &palette.alternative),
    ] {
        writeln!(
            out,
            "  {} |{}",
            pad_str(label, width, Alignment::Left, None),
            style.apply_to(chart_bar(percent))
        )
        .unwrap();
    }
}

/// A bar of `percent`% of [`CHART_WIDTH`], followed by the percentage.
fn chart_bar(percent: Option<u64>) -> String {
    percent.map_or_else(
        || police_budget_math::PLACEHOLDER.to_string(),
        |percent| {
            let len = usize::try_from(percent.min(100) * CHART_WIDTH / 100).unwrap_or(0);
            format!("{} {percent}%", "█".repeat(len))
        },
    )
}

/// Renders the data view, limited to `sections`.
#[must_use]
pub fn data_view(dataset: &Dataset, sections: &[DataSection], colors: bool) -> String {
    let palette = Palette::new(colors);
    let mut out = String::new();

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            writeln!(out).unwrap();
        }
        let title = section.to_string();
        writeln!(out, "{}", palette.heading.apply_to(&title)).unwrap();
        writeln!(out, "{}", "=".repeat(measure_text_width(&title))).unwrap();

        match section {
            DataSection::Cities => {
                for city in dataset.cities() {
                    write_city(&mut out, city, &palette.alternative);
                }
            }
            DataSection::Other => {
                for alt in dataset.other_data() {
                    write_alternative(&mut out, alt, &palette.alternative);
                }
            }
        }
    }

    out
}

fn write_city(out: &mut String, city: &City, style: &Style) {
    writeln!(out).unwrap();
    writeln!(out, "{}", style.apply_to(&city.name)).unwrap();
    write_links(out, &city.links);
    write_notes(out, &city.notes);
}

fn write_alternative(out: &mut String, alt: &Alternative, style: &Style) {
    writeln!(out).unwrap();
    writeln!(out, "{}", style.apply_to(&alt.name)).unwrap();
    if let Some(links) = &alt.links {
        write_links(out, links);
    }
    if let Some(notes) = &alt.notes {
        write_notes(out, notes);
    }
}

fn write_links(out: &mut String, links: &[DataLink]) {
    writeln!(out, "  Links").unwrap();
    for link in links {
        writeln!(out, "    {}: {}", link.link_text, link.url).unwrap();
    }
}

fn write_notes(out: &mut String, notes: &[String]) {
    writeln!(out, "  Notes").unwrap();
    for note in notes {
        writeln!(out, "    {note}").unwrap();
    }
}
